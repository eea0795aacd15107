/*!
Miscellaneous items related to [logging](log).

Calls to the `log` macros are made throughout the parser and the tableau
engine to help with extending or debugging a search. No log implementation
is provided by this crate; see [log] for choosing one.
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to the [parser](crate::parser).
    pub const PARSER: &str = "parser";

    /// Logs related to the [tableau engine](crate::tableau::engine).
    pub const ENGINE: &str = "engine";
}
