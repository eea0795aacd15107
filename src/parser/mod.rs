/*!
The recursive-descent parser.

Maintains an explicit cursor and bails out to a typed error on mismatch,
with a one-character lookahead the grammar requires down to the character.

The parser is *total*: [`parse_auto`] (and the two entry points it
dispatches to) never fails outright. A malformed input simply produces
[`Formula::NotAFormula`](crate::formula::Formula::NotAFormula) at the root
instead of propagating an error.
*/

mod lexer;

use crate::alphabet::{
    self, BINARY_CONNECTIVES, FIRST_ORDER_VARIABLES, PREDICATE_SYMBOLS, PROPOSITIONAL_VARIABLES,
    QUANTIFIER_SYMBOLS,
};
use crate::formula::{Connective, Formula, ParseTree, QuantifierKind};
use crate::misc::log::targets;
use lexer::Lexer;

/// Raised internally on an `expect` mismatch and caught at the root of a
/// parse attempt; never observed outside this module.
struct ParseError;

type PResult<T> = Result<T, ParseError>;

/// Helpers shared by both grammars for negation and binary forms. A trait
/// with default methods plays the role an abstract base class would,
/// without needing a shared concrete base type.
trait GrammarParser {
    fn lexer(&mut self) -> &mut Lexer;

    /// Parses a single formula according to this grammar's `FMLA` rule.
    fn fmla(&mut self) -> PResult<Formula>;

    fn current(&mut self) -> char {
        self.lexer().current()
    }

    fn expect_char(&mut self, c: char) -> PResult<()> {
        if self.lexer().current() == c {
            self.lexer().advance();
            Ok(())
        } else {
            Err(ParseError)
        }
    }

    fn expect_any_of(&mut self, set: &[char]) -> PResult<char> {
        let current = self.lexer().current();
        if set.contains(&current) {
            self.lexer().advance();
            Ok(current)
        } else {
            Err(ParseError)
        }
    }

    /// `NEG := '-' FMLA`
    fn neg(&mut self) -> PResult<Formula> {
        self.expect_char('-')?;
        Ok(Formula::Negation(Box::new(self.fmla()?)))
    }

    /// `BIN := '(' FMLA BINOP FMLA ')'`
    fn bin(&mut self) -> PResult<Formula> {
        self.expect_char('(')?;
        let left = self.fmla()?;
        let symbol = self.current();
        self.expect_any_of(&BINARY_CONNECTIVES)?;
        let right = self.fmla()?;
        self.expect_char(')')?;
        let connective = Connective::from_char(symbol).expect("checked by expect_any_of");
        Ok(Formula::Binary {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

struct PropParser {
    lexer: Lexer,
}

impl GrammarParser for PropParser {
    fn lexer(&mut self) -> &mut Lexer {
        &mut self.lexer
    }

    fn fmla(&mut self) -> PResult<Formula> {
        match self.current() {
            c if PROPOSITIONAL_VARIABLES.contains(&c) => self.prop(),
            '-' => self.neg(),
            '(' => self.bin(),
            _ => Err(ParseError),
        }
    }
}

impl PropParser {
    fn prop(&mut self) -> PResult<Formula> {
        let var = self.current();
        self.expect_any_of(&PROPOSITIONAL_VARIABLES)?;
        Ok(Formula::PropAtom(var))
    }
}

struct FoParser {
    lexer: Lexer,
}

impl GrammarParser for FoParser {
    fn lexer(&mut self) -> &mut Lexer {
        &mut self.lexer
    }

    fn fmla(&mut self) -> PResult<Formula> {
        match self.current() {
            c if PREDICATE_SYMBOLS.contains(&c) => self.pred(),
            '-' => self.neg(),
            c if QUANTIFIER_SYMBOLS.contains(&c) => self.quant(),
            '(' => self.bin(),
            _ => Err(ParseError),
        }
    }
}

impl FoParser {
    /// `VAR := one of x,y,z,w`
    fn var(&mut self) -> PResult<Formula> {
        let name = self.current();
        self.expect_any_of(&FIRST_ORDER_VARIABLES)?;
        Ok(Formula::term(name.to_string()))
    }

    /// `PRED := one of P,Q,R,S '(' VAR ',' VAR ')'`
    fn pred(&mut self) -> PResult<Formula> {
        let symbol = self.current();
        self.expect_any_of(&PREDICATE_SYMBOLS)?;
        self.expect_char('(')?;
        let left = self.var()?;
        self.expect_char(',')?;
        let right = self.var()?;
        self.expect_char(')')?;
        Ok(Formula::Predicate {
            symbol,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `QUANT VAR FMLA`
    fn quant(&mut self) -> PResult<Formula> {
        let symbol = self.current();
        self.expect_any_of(&QUANTIFIER_SYMBOLS)?;
        let variable = self.var()?;
        let variable = match variable {
            Formula::Term(name) => name,
            _ => unreachable!("var() always yields a Term"),
        };
        let body = self.fmla()?;
        let kind = QuantifierKind::from_char(symbol).expect("checked by expect_any_of");
        Ok(Formula::Quantifier {
            kind,
            variable,
            body: Box::new(body),
        })
    }
}

/// Parses `input` under the propositional grammar only.
pub fn parse_propositional(input: &str) -> ParseTree {
    let mut parser = PropParser {
        lexer: Lexer::new(input),
    };
    let root = parser.fmla().unwrap_or(Formula::NotAFormula);
    log::trace!(target: targets::PARSER, "parsed '{input}' (propositional) -> code {}",
        ParseTree::new(root.clone(), false).classify());
    ParseTree::new(root, false)
}

/// Parses `input` under the first-order grammar only.
pub fn parse_first_order(input: &str) -> ParseTree {
    let mut parser = FoParser {
        lexer: Lexer::new(input),
    };
    let root = parser.fmla().unwrap_or(Formula::NotAFormula);
    log::trace!(target: targets::PARSER, "parsed '{input}' (first-order) -> code {}",
        ParseTree::new(root.clone(), true).classify());
    ParseTree::new(root, true)
}

/// Selects a grammar by alphabet inspection and parses `input` with it.
/// If neither alphabet is present, the result is
/// [`Formula::NotAFormula`](crate::formula::Formula::NotAFormula) without
/// attempting either grammar.
pub fn parse_auto(input: &str) -> ParseTree {
    match alphabet::detect_sub_language(input) {
        alphabet::SubLanguage::Propositional => parse_propositional(input),
        alphabet::SubLanguage::FirstOrder => parse_first_order(input),
        alphabet::SubLanguage::Neither => ParseTree::new(Formula::NotAFormula, false),
    }
}
