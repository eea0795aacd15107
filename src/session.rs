/*!
A session: the explicitly owned parse cache and search configuration a
caller needs to run `parse`/`sat` calls.

Rather than a process-wide parse cache and fresh-constant counter living as
module-level globals, both are fields of this struct, owned the way a
solver context owns its own counters and dispatch state instead of
reaching for statics.

The fresh-constant counter lives only for the duration of one
[`sat`](Session::sat) call: each call starts counting from zero, so
repeated calls on the same session never interact through that counter.
Only the parse cache persists across calls on a session, and is never
evicted within the session's lifetime.
*/

use std::collections::HashMap;
use std::rc::Rc;

use crate::config::Config;
use crate::formula::{Formula, ParseTree};
use crate::parser;
use crate::tableau::{engine, SatVerdict, Theory};

/// Owns a parse cache and a search configuration across any number of
/// `parse`/`sat` calls.
#[derive(Default)]
pub struct Session {
    config: Config,
    cache: HashMap<String, Rc<ParseTree>>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cache: HashMap::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses `formula`, or returns the cached tree from an earlier call
    /// with the same string.
    pub fn parse(&mut self, formula: &str) -> Rc<ParseTree> {
        if let Some(tree) = self.cache.get(formula) {
            return Rc::clone(tree);
        }
        let tree = Rc::new(parser::parse_auto(formula));
        self.cache.insert(formula.to_string(), Rc::clone(&tree));
        tree
    }

    /// The classification code of the formula.
    pub fn classify(&mut self, formula: &str) -> u8 {
        self.parse(formula).classify()
    }

    /// The left-hand side of a binary-connective formula, as surface
    /// syntax. Empty if `formula` is not a binary-connective formula.
    pub fn lhs(&mut self, formula: &str) -> String {
        match &self.parse(formula).root {
            Formula::Binary { left, .. } => left.to_string(),
            _ => String::new(),
        }
    }

    /// The connective symbol of a binary-connective formula. Empty if
    /// `formula` is not one.
    pub fn con(&mut self, formula: &str) -> String {
        match &self.parse(formula).root {
            Formula::Binary { connective, .. } => connective.symbol().to_string(),
            _ => String::new(),
        }
    }

    /// The right-hand side of a binary-connective formula, as surface
    /// syntax. Empty if `formula` is not one.
    pub fn rhs(&mut self, formula: &str) -> String {
        match &self.parse(formula).root {
            Formula::Binary { right, .. } => right.to_string(),
            _ => String::new(),
        }
    }

    /// Builds an initial theory containing just the parsed form of
    /// `formula`.
    pub fn theory(&mut self, formula: &str) -> Theory {
        let tree = self.parse(formula);
        Theory::singleton(tree.root.clone())
    }

    /// Decides satisfiability of a tableau (worklist of theories). The
    /// fresh-constant counter is reset for this call.
    pub fn sat(&self, tableau: Vec<Theory>) -> SatVerdict {
        engine::run(tableau, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_parse_of_same_string_hits_the_cache() {
        let mut session = Session::default();
        let first = session.parse("p");
        let second = session.parse("p");
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn lhs_con_rhs_of_binary_formula() {
        let mut session = Session::default();
        assert_eq!(session.lhs("(p^-p)"), "p");
        assert_eq!(session.con("(p^-p)"), "^");
        assert_eq!(session.rhs("(p^-p)"), "-p");
    }

    #[test]
    fn sat_resets_fresh_counter_across_calls() {
        let mut session = Session::default();
        let theory = session.theory("ExP(x,x)");
        assert_eq!(session.sat(vec![theory.clone()]), SatVerdict::Satisfiable);
        // Running the same theory again should behave identically, not
        // inherit a nonzero counter from the previous call.
        assert_eq!(session.sat(vec![theory]), SatVerdict::Satisfiable);
    }
}
