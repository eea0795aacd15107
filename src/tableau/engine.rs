//! The tableau search loop.

use super::rules::{self, Classification, RuleKind};
use super::{SatVerdict, Theory};
use crate::config::Config;
use crate::formula::Formula;
use crate::misc::log::targets;

/// The non-literal selected for expansion, and how.
enum Selection {
    Found(Formula, RuleKind),
    /// Every remaining non-literal is γ-shaped and unsupported; this
    /// branch can make no further progress.
    Stuck,
}

/// Scans `theory` for the non-literal to expand next, honouring the
/// α > β > δ priority rule: the first α-formula encountered wins outright;
/// otherwise the first β- and first δ-formula seen are remembered and β is
/// preferred. Returns `None` if `theory` has no non-literal members at
/// all.
fn select_non_literal(theory: &Theory) -> Option<Selection> {
    let mut beta: Option<Formula> = None;
    let mut delta: Option<Formula> = None;
    let mut any_stuck = false;

    for formula in theory.formulas() {
        match rules::classify_formula(formula) {
            Classification::Literal => continue,
            Classification::Rule(RuleKind::Alpha) => {
                return Some(Selection::Found(formula.clone(), RuleKind::Alpha));
            }
            Classification::Rule(RuleKind::Beta) => {
                if beta.is_none() {
                    beta = Some(formula.clone());
                }
            }
            Classification::Rule(RuleKind::Delta) => {
                if delta.is_none() {
                    delta = Some(formula.clone());
                }
            }
            Classification::Stuck => any_stuck = true,
        }
    }

    if let Some(formula) = beta {
        return Some(Selection::Found(formula, RuleKind::Beta));
    }
    if let Some(formula) = delta {
        return Some(Selection::Found(formula, RuleKind::Delta));
    }
    if any_stuck {
        return Some(Selection::Stuck);
    }
    None
}

/// Runs the tableau search over `worklist`, the live frontier of open
/// branches, to a tri-valued verdict.
///
/// The fresh-constant counter is local to this call: it resets to zero on
/// every invocation rather than persisting across calls.
pub fn run(mut worklist: Vec<Theory>, config: &Config) -> SatVerdict {
    let mut fresh_counter: u32 = 0;
    let mut saw_stuck_branch = false;

    while let Some(theory) = worklist.pop() {
        log::trace!(target: targets::ENGINE, "popped a branch of {} formulas", theory.len());

        if theory.is_fully_expanded() {
            if theory.has_contradiction() {
                log::trace!(target: targets::ENGINE, "branch fully expanded, contradictory");
                continue;
            }
            log::debug!(target: targets::ENGINE, "branch fully expanded, satisfying");
            return SatVerdict::Satisfiable;
        }

        match select_non_literal(&theory) {
            None => {
                // Every member is a literal, contradicting the check
                // above; unreachable in practice but handled rather than
                // panicking.
                continue;
            }
            Some(Selection::Stuck) => {
                log::debug!(target: targets::ENGINE, "branch stuck on an unsupported gamma-shaped formula");
                saw_stuck_branch = true;
            }
            Some(Selection::Found(formula, RuleKind::Alpha)) => {
                let mut next = theory.clone();
                next.remove(&formula);
                for result in rules::expand_alpha(&formula) {
                    next.insert(result);
                }
                push_if_new(&mut worklist, next);
            }
            Some(Selection::Found(formula, RuleKind::Beta)) => {
                let mut base = theory.clone();
                base.remove(&formula);
                let (left, right) = rules::expand_beta(&formula);
                for branch_formula in [left, right] {
                    let mut branch = base.clone();
                    branch.insert(branch_formula);
                    push_if_new(&mut worklist, branch);
                }
            }
            Some(Selection::Found(formula, RuleKind::Delta)) => {
                if fresh_counter >= config.max_constants {
                    log::debug!(target: targets::ENGINE, "fresh-constant budget exhausted");
                    return SatVerdict::Unknown;
                }
                let fresh = format!("var{fresh_counter}");
                fresh_counter += 1;

                let mut next = theory.clone();
                next.remove(&formula);
                next.insert(rules::expand_delta(&formula, &fresh));
                push_if_new(&mut worklist, next);
            }
        }
    }

    if saw_stuck_branch {
        SatVerdict::Unknown
    } else {
        SatVerdict::Unsatisfiable
    }
}

/// Pushes `theory` onto the worklist unless it's contradictory or already
/// present.
fn push_if_new(worklist: &mut Vec<Theory>, theory: Theory) {
    if theory.has_contradiction() {
        return;
    }
    if worklist.iter().any(|existing| existing == &theory) {
        log::trace!(target: targets::ENGINE, "suppressed duplicate branch");
        return;
    }
    worklist.push(theory);
}
