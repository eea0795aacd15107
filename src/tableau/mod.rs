/*!
The tableau search engine.

A worklist-driven main loop (pop work, branch, record progress via `log`)
that maps internal search state to a tri-valued external verdict.
*/

mod theory;

pub mod engine;
pub mod rules;

pub use theory::Theory;

/// The tri-valued result of a tableau search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SatVerdict {
    Unsatisfiable,
    Satisfiable,
    Unknown,
}

impl SatVerdict {
    /// The external code: `0` unsatisfiable, `1` satisfiable, `2` unknown.
    pub fn code(self) -> u8 {
        match self {
            Self::Unsatisfiable => 0,
            Self::Satisfiable => 1,
            Self::Unknown => 2,
        }
    }
}

impl std::fmt::Display for SatVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
