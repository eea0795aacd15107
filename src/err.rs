/*!
Error types.

Unlike most of the library, which is total (every formula classifies and
every `sat` call returns a tri-valued verdict, never an [Err]), the CLI
driver performs I/O and so needs a real error path. A small enum-of-kinds
rather than a `thiserror`/`anyhow` wrapper.
*/

/// A union of the ambient failure kinds this crate's surfaces can produce.
///
/// The tableau core itself never constructs this type: parse failures are
/// folded into [`Formula::NotAFormula`](crate::formula::Formula::NotAFormula)
/// rather than raised as errors.
#[derive(Debug)]
pub enum ErrorKind {
    /// Failure to read an input file.
    Io(std::io::Error),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
