//! The line-oriented driver behaviour, kept separate from `main` so it can
//! be exercised directly against in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::session::Session;

/// Indexed by the classification code.
const PARSE_OUTPUTS: [&str; 9] = [
    "not a formula",
    "an atom",
    "a negation of a first order logic formula",
    "a universally quantified formula",
    "an existentially quantified formula",
    "a binary connective first order formula",
    "a proposition",
    "a negation of a propositional formula",
    "a binary connective propositional formula",
];

/// Indexed by the satisfiability code.
const SAT_OUTPUTS: [&str; 3] = [
    "is not satisfiable",
    "is satisfiable",
    "may or may not be satisfiable",
];

/// Reads a mode header and one formula per line from `input`, and writes
/// the fixed sentences to `output`.
///
/// Line 1 is inspected for the literal substrings `PARSE` and `SAT`
/// (case-sensitive); either, both, or neither may be present. Each
/// remaining line holds exactly one formula string.
pub fn run(input: impl BufRead, mut output: impl Write, session: &mut Session) -> io::Result<()> {
    let mut lines = input.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };
    let parse_mode = header.contains("PARSE");
    let sat_mode = header.contains("SAT");

    for line in lines {
        let line = line?;
        let code = session.classify(&line);

        if parse_mode {
            let mut sentence = format!("{line} is {}.", PARSE_OUTPUTS[code as usize]);
            if code == 5 || code == 8 {
                sentence.push_str(&format!(
                    " Its left hand side is {}, its connective is {}, and its right hand side is {}.",
                    session.lhs(&line),
                    session.con(&line),
                    session.rhs(&line),
                ));
            }
            writeln!(output, "{sentence}")?;
        }

        if sat_mode {
            if code == 0 {
                writeln!(output, "{line} is not a formula.")?;
            } else {
                let theory = session.theory(&line);
                let verdict = session.sat(vec![theory]);
                writeln!(output, "{line} {}.", SAT_OUTPUTS[verdict.code() as usize])?;
            }
        }
    }

    Ok(())
}
