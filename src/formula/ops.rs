//! Formula operations: substitution, the literal test, and the literal
//! projection used for contradiction detection.

use super::Formula;

/// A literal is an atom or predicate, or the negation of one. Its identity
/// for contradiction detection is the string form of the underlying
/// atom/predicate: `P(x,y)` and `P(x,y)` match, `P(x,y)` and `P(y,x)`
/// do not, and there is no unification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub atom_string: String,
    pub polarity: bool,
}

/// Whether a formula is a literal: an atom/predicate, or its negation.
pub fn is_literal(formula: &Formula) -> bool {
    match formula {
        Formula::PropAtom(_) | Formula::Predicate { .. } => true,
        Formula::Negation(child) => {
            matches!(**child, Formula::PropAtom(_) | Formula::Predicate { .. })
        }
        _ => false,
    }
}

/// Projects a literal formula to its [Literal] identity, or `None` if the
/// formula is not a literal.
pub fn literal_of(formula: &Formula) -> Option<Literal> {
    match formula {
        Formula::PropAtom(_) | Formula::Predicate { .. } => Some(Literal {
            atom_string: formula.to_string(),
            polarity: true,
        }),
        Formula::Negation(child)
            if matches!(**child, Formula::PropAtom(_) | Formula::Predicate { .. }) =>
        {
            Some(Literal {
                atom_string: child.to_string(),
                polarity: false,
            })
        }
        _ => None,
    }
}

/// Replaces every occurrence (free or bound) of variable name `old` with
/// `new`. Capture-free by construction: callers only ever pass a freshly
/// generated `new` name that cannot already occur in `formula`.
pub fn substitute(formula: &Formula, old: &str, new: &str) -> Formula {
    match formula {
        Formula::Term(name) => {
            if name == old {
                Formula::Term(new.to_string())
            } else {
                formula.clone()
            }
        }
        Formula::PropAtom(_) | Formula::NotAFormula => formula.clone(),
        Formula::Predicate { symbol, left, right } => Formula::Predicate {
            symbol: *symbol,
            left: Box::new(substitute(left, old, new)),
            right: Box::new(substitute(right, old, new)),
        },
        Formula::Negation(child) => Formula::Negation(Box::new(substitute(child, old, new))),
        Formula::Binary { connective, left, right } => Formula::Binary {
            connective: *connective,
            left: Box::new(substitute(left, old, new)),
            right: Box::new(substitute(right, old, new)),
        },
        Formula::Quantifier { kind, variable, body } => {
            let variable = if variable == old {
                new.to_string()
            } else {
                variable.clone()
            };
            Formula::Quantifier {
                kind: *kind,
                variable,
                body: Box::new(substitute(body, old, new)),
            }
        }
    }
}
