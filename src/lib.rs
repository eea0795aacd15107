/*!
A decision procedure for the satisfiability of formulas in a propositional
logic and a restricted first-order logic, via the analytic semantic
tableau method.

For each input formula the library (a) classifies the formula
syntactically ([`parse`]) and (b) decides whether a set containing only
that formula is satisfiable ([`sat`]), bounded by a fixed number of fresh
witness constants introduced for existential witnesses.

# Orientation

- The [formula] module has the AST ([`formula::Formula`]) produced by the
  [parser] and the operations on it (substitution, the literal test).
- The [parser] recognises the two grammars from the input alphabet alone
  and is total: malformed input becomes
  [`Formula::NotAFormula`](formula::Formula::NotAFormula), never an error.
- The [tableau] module has the search engine: [`tableau::Theory`] (one
  open branch) and [`tableau::engine::run`] (the worklist search loop).
- [session::Session] owns a parse cache and [config::Config] across calls;
  the free functions below ([parse], [lhs], [con], [rhs], [theory], [sat])
  are the same operations against a shared default session, kept to match
  the bundled API a line-oriented driver expects.

# Example

```rust
use logic_tableau::{parse, sat, theory};

assert_eq!(parse("(p^-p)"), 8); // a binary connective propositional formula
assert_eq!(sat(vec![theory("(p^-p)")]), 0); // not satisfiable
assert_eq!(sat(vec![theory("(p>p)")]), 1); // satisfiable
```
*/

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod err;
pub mod formula;
pub mod misc;
pub mod parser;
pub mod session;
pub mod tableau;

use std::cell::RefCell;

use config::Config;
use session::Session;
use tableau::Theory;

thread_local! {
    static DEFAULT_SESSION: RefCell<Session> = RefCell::new(Session::new(Config::default()));
}

/// Classifies `formula`, returning one of the nine classification codes.
pub fn parse(formula: &str) -> u8 {
    DEFAULT_SESSION.with(|session| session.borrow_mut().classify(formula))
}

/// The left-hand side of a binary-connective formula, as surface syntax.
pub fn lhs(formula: &str) -> String {
    DEFAULT_SESSION.with(|session| session.borrow_mut().lhs(formula))
}

/// The connective symbol of a binary-connective formula.
pub fn con(formula: &str) -> String {
    DEFAULT_SESSION.with(|session| session.borrow_mut().con(formula))
}

/// The right-hand side of a binary-connective formula, as surface syntax.
pub fn rhs(formula: &str) -> String {
    DEFAULT_SESSION.with(|session| session.borrow_mut().rhs(formula))
}

/// Initialises a theory with a single formula in it.
pub fn theory(formula: &str) -> Theory {
    DEFAULT_SESSION.with(|session| session.borrow_mut().theory(formula))
}

/// Decides satisfiability of a tableau. `0` not satisfiable, `1`
/// satisfiable, `2` may or may not be satisfiable (fresh-constant budget
/// exceeded).
pub fn sat(tableau: Vec<Theory>) -> u8 {
    DEFAULT_SESSION.with(|session| session.borrow().sat(tableau).code())
}
