//! Expansion rules: for each non-literal formula shape, the kind of
//! expansion it calls for and the formulas the expansion produces.

use crate::formula::{substitute, Connective, Formula, QuantifierKind};

/// The kind of expansion a non-literal formula calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Non-branching: the result formulas all join the same branch.
    Alpha,
    /// Branching: the branch forks into two alternatives.
    Beta,
    /// Branching into one alternative, consuming a fresh witness constant.
    Delta,
}

/// The outcome of inspecting a single formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Already a literal; no expansion applies.
    Literal,
    /// A non-literal with a supported expansion.
    Rule(RuleKind),
    /// A non-literal γ-shaped formula (`∀v.φ` or `¬∃v.φ`) this procedure
    /// does not expand: universal quantifiers and negated existentials
    /// have no supported expansion.
    Stuck,
}

/// Classifies a formula for the purposes of the non-literal selector's
/// priority rule.
pub fn classify_formula(formula: &Formula) -> Classification {
    if crate::formula::is_literal(formula) {
        return Classification::Literal;
    }

    match formula {
        Formula::Binary { connective: Connective::And, .. } => Classification::Rule(RuleKind::Alpha),
        Formula::Binary { connective: Connective::Or, .. } => Classification::Rule(RuleKind::Beta),
        Formula::Binary { connective: Connective::Implies, .. } => Classification::Rule(RuleKind::Beta),

        Formula::Quantifier { kind: QuantifierKind::Existential, .. } => {
            Classification::Rule(RuleKind::Delta)
        }
        Formula::Quantifier { kind: QuantifierKind::Universal, .. } => Classification::Stuck,

        Formula::Negation(child) => match child.as_ref() {
            Formula::Negation(_) => Classification::Rule(RuleKind::Alpha),
            Formula::Binary { connective: Connective::Or, .. } => Classification::Rule(RuleKind::Alpha),
            Formula::Binary { connective: Connective::Implies, .. } => Classification::Rule(RuleKind::Alpha),
            Formula::Binary { connective: Connective::And, .. } => Classification::Rule(RuleKind::Beta),
            Formula::Quantifier { kind: QuantifierKind::Universal, .. } => {
                Classification::Rule(RuleKind::Delta)
            }
            Formula::Quantifier { kind: QuantifierKind::Existential, .. } => Classification::Stuck,
            // PropAtom/Predicate are caught by the is_literal check above;
            // NotAFormula should never appear in a well-formed theory.
            _ => Classification::Stuck,
        },

        // PropAtom/Predicate/Term/NotAFormula: the first two are literals
        // (handled above), Term never appears as a theory member, and
        // NotAFormula should never appear in a well-formed theory.
        _ => Classification::Stuck,
    }
}

/// Expands an α-formula into the (one or two) formulas that join the same
/// branch.
///
/// Panics if `formula` is not α-shaped; callers are expected to have
/// checked via [classify_formula] first.
pub fn expand_alpha(formula: &Formula) -> Vec<Formula> {
    match formula {
        Formula::Binary { connective: Connective::And, left, right } => {
            vec![(**left).clone(), (**right).clone()]
        }
        Formula::Negation(child) => match child.as_ref() {
            Formula::Negation(inner) => vec![(**inner).clone()],
            Formula::Binary { connective: Connective::Or, left, right } => vec![
                Formula::Negation(left.clone()),
                Formula::Negation(right.clone()),
            ],
            Formula::Binary { connective: Connective::Implies, left, right } => {
                vec![(**left).clone(), Formula::Negation(right.clone())]
            }
            _ => panic!("expand_alpha called on a non-alpha formula"),
        },
        _ => panic!("expand_alpha called on a non-alpha formula"),
    }
}

/// Expands a β-formula into its two alternative branches.
///
/// Panics if `formula` is not β-shaped.
pub fn expand_beta(formula: &Formula) -> (Formula, Formula) {
    match formula {
        Formula::Binary { connective: Connective::Or, left, right } => {
            ((**left).clone(), (**right).clone())
        }
        Formula::Binary { connective: Connective::Implies, left, right } => {
            (Formula::Negation(left.clone()), (**right).clone())
        }
        Formula::Negation(child) => match child.as_ref() {
            Formula::Binary { connective: Connective::And, left, right } => (
                Formula::Negation(left.clone()),
                Formula::Negation(right.clone()),
            ),
            _ => panic!("expand_beta called on a non-beta formula"),
        },
        _ => panic!("expand_beta called on a non-beta formula"),
    }
}

/// Expands a δ-formula by substituting its bound variable with `fresh`.
///
/// Panics if `formula` is not δ-shaped.
pub fn expand_delta(formula: &Formula, fresh: &str) -> Formula {
    match formula {
        Formula::Quantifier { kind: QuantifierKind::Existential, variable, body } => {
            substitute(body, variable, fresh)
        }
        Formula::Negation(child) => match child.as_ref() {
            Formula::Quantifier { kind: QuantifierKind::Universal, variable, body } => {
                Formula::Negation(Box::new(substitute(body, variable, fresh)))
            }
            _ => panic!("expand_delta called on a non-delta formula"),
        },
        _ => panic!("expand_delta called on a non-delta formula"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(c: char) -> Formula {
        Formula::PropAtom(c)
    }

    #[test]
    fn conjunction_is_alpha() {
        let f = Formula::Binary {
            connective: Connective::And,
            left: Box::new(atom('p')),
            right: Box::new(atom('q')),
        };
        assert_eq!(classify_formula(&f), Classification::Rule(RuleKind::Alpha));
        assert_eq!(expand_alpha(&f), vec![atom('p'), atom('q')]);
    }

    #[test]
    fn disjunction_is_beta() {
        let f = Formula::Binary {
            connective: Connective::Or,
            left: Box::new(atom('p')),
            right: Box::new(atom('q')),
        };
        assert_eq!(classify_formula(&f), Classification::Rule(RuleKind::Beta));
        assert_eq!(expand_beta(&f), (atom('p'), atom('q')));
    }

    #[test]
    fn implication_is_beta_with_negated_antecedent() {
        let f = Formula::Binary {
            connective: Connective::Implies,
            left: Box::new(atom('p')),
            right: Box::new(atom('q')),
        };
        assert_eq!(
            expand_beta(&f),
            (Formula::Negation(Box::new(atom('p'))), atom('q'))
        );
    }

    #[test]
    fn double_negation_is_alpha() {
        let f = Formula::Negation(Box::new(Formula::Negation(Box::new(atom('p')))));
        assert_eq!(classify_formula(&f), Classification::Rule(RuleKind::Alpha));
        assert_eq!(expand_alpha(&f), vec![atom('p')]);
    }

    #[test]
    fn negated_conjunction_is_beta() {
        let f = Formula::Negation(Box::new(Formula::Binary {
            connective: Connective::And,
            left: Box::new(atom('p')),
            right: Box::new(atom('q')),
        }));
        assert_eq!(classify_formula(&f), Classification::Rule(RuleKind::Beta));
        assert_eq!(
            expand_beta(&f),
            (
                Formula::Negation(Box::new(atom('p'))),
                Formula::Negation(Box::new(atom('q')))
            )
        );
    }

    #[test]
    fn negated_disjunction_and_implication_are_alpha() {
        let disj = Formula::Negation(Box::new(Formula::Binary {
            connective: Connective::Or,
            left: Box::new(atom('p')),
            right: Box::new(atom('q')),
        }));
        assert_eq!(classify_formula(&disj), Classification::Rule(RuleKind::Alpha));

        let impl_ = Formula::Negation(Box::new(Formula::Binary {
            connective: Connective::Implies,
            left: Box::new(atom('p')),
            right: Box::new(atom('q')),
        }));
        assert_eq!(classify_formula(&impl_), Classification::Rule(RuleKind::Alpha));
    }

    #[test]
    fn existential_is_delta_and_universal_is_stuck() {
        let body = atom('p');
        let exists = Formula::Quantifier {
            kind: QuantifierKind::Existential,
            variable: "x".into(),
            body: Box::new(body.clone()),
        };
        assert_eq!(classify_formula(&exists), Classification::Rule(RuleKind::Delta));

        let forall = Formula::Quantifier {
            kind: QuantifierKind::Universal,
            variable: "x".into(),
            body: Box::new(body),
        };
        assert_eq!(classify_formula(&forall), Classification::Stuck);
    }

    #[test]
    fn negated_universal_is_delta_and_negated_existential_is_stuck() {
        let body = atom('p');
        let not_forall = Formula::Negation(Box::new(Formula::Quantifier {
            kind: QuantifierKind::Universal,
            variable: "x".into(),
            body: Box::new(body.clone()),
        }));
        assert_eq!(classify_formula(&not_forall), Classification::Rule(RuleKind::Delta));

        let not_exists = Formula::Negation(Box::new(Formula::Quantifier {
            kind: QuantifierKind::Existential,
            variable: "x".into(),
            body: Box::new(body),
        }));
        assert_eq!(classify_formula(&not_exists), Classification::Stuck);
    }
}
