//! CLI argument handling. The path to `input.txt` is this crate's only
//! argument: there is no other configuration to parse.

/// The input file path: the first positional argument, or `input.txt` in
/// the current directory if none is given.
pub fn input_path(args: &[String]) -> String {
    args.get(1).cloned().unwrap_or_else(|| "input.txt".to_string())
}
