//! Canonical surface-syntax printing, used by the driver to expose
//! `lhs`/`rhs`/`con` and by the tableau engine's logging.

use super::Formula;
use std::fmt;

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropAtom(c) => write!(f, "{c}"),
            Self::Term(name) => write!(f, "{name}"),
            Self::Predicate { symbol, left, right } => write!(f, "{symbol}({left},{right})"),
            Self::Negation(child) => write!(f, "-{child}"),
            Self::Binary { connective, left, right } => {
                write!(f, "({left}{}{right})", connective.symbol())
            }
            Self::Quantifier { kind, variable, body } => {
                write!(f, "{}{variable}{body}", kind.symbol())
            }
            // Never printed by the driver: `lhs`/`con`/`rhs` are only
            // requested for binary-connective classification codes, which
            // guarantees this variant never reaches here in practice.
            Self::NotAFormula => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{Connective, QuantifierKind};

    #[test]
    fn prints_predicate_without_spaces() {
        let f = Formula::Predicate {
            symbol: 'P',
            left: Box::new(Formula::term("x")),
            right: Box::new(Formula::term("y")),
        };
        assert_eq!(f.to_string(), "P(x,y)");
    }

    #[test]
    fn prints_binary_with_parens_and_symbol() {
        let f = Formula::Binary {
            connective: Connective::And,
            left: Box::new(Formula::PropAtom('p')),
            right: Box::new(Formula::Negation(Box::new(Formula::PropAtom('p')))),
        };
        assert_eq!(f.to_string(), "(p^-p)");
    }

    #[test]
    fn prints_quantifier_prefix() {
        let f = Formula::Quantifier {
            kind: QuantifierKind::Existential,
            variable: "x".into(),
            body: Box::new(Formula::Predicate {
                symbol: 'P',
                left: Box::new(Formula::term("x")),
                right: Box::new(Formula::term("x")),
            }),
        };
        assert_eq!(f.to_string(), "ExP(x,x)");
    }
}
