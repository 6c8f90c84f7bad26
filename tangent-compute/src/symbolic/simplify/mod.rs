//! Single-pass algebraic simplification.
//!
//! Simplification walks the tree bottom-up and offers each node, with its children already
//! simplified, to a fixed list of rewrite rules. The first rule that applies rewrites the node;
//! the rewritten node is **not** offered to the rules again. The result is therefore not a
//! canonical form:
//!
//! ```
//! use tangent_compute::symbolic::expr::Expr;
//! use tangent_compute::symbolic::simplify;
//!
//! // neither product has a zero or one operand, so no rule fires, and
//! // the two constants stay apart even though 6 * x is within reach
//! let expr = Expr::mul(
//!     Expr::constant(2.0),
//!     Expr::mul(Expr::constant(3.0), Expr::variable("x")),
//! );
//! assert_eq!(simplify(&expr), expr);
//! ```
//!
//! Two rule sets are available. [`RuleSet::Identity`] applies only the algebraic identities
//! involving zero and one, and is what [`simplify()`] uses. [`RuleSet::Folding`] additionally
//! evaluates arithmetic and the unary functions over constant operands. The individual rules
//! live in [`rules`].

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use std::sync::Arc;
use step::Step;
use super::expr::Expr;

/// Selects which rewrite rules the simplifier applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleSet {
    /// The algebraic identity rules: `0 + a`, `a + 0`, `a - 0`, `0 * a`, `a * 0`, `1 * a`,
    /// `a * 1`, `0 / a` and `a / 1` rewrites.
    ///
    /// This is the set used by [`simplify()`] and by the differentiator.
    #[default]
    Identity,

    /// Everything in [`RuleSet::Identity`], plus constant folding: arithmetic over two constant
    /// operands is evaluated, and so are the unary functions of a constant operand.
    Folding,
}

impl RuleSet {
    /// Applies the first applicable rule of this set to the expression.
    fn apply(self, expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
        match self {
            RuleSet::Identity => rules::identities(expr, step_collector),
            RuleSet::Folding => rules::folding(expr, step_collector),
        }
    }
}

/// Simplifies the expression with the [`RuleSet::Identity`] rules, discarding the steps taken.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, RuleSet::Identity, &mut ())
}

/// Simplifies the expression with the given rule set, reporting every applied rewrite to the
/// given step collector in bottom-up order.
pub fn simplify_with(
    expr: &Expr,
    rules: RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let node = match expr {
        Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Add(lhs, rhs) => Expr::Add(
            Arc::new(simplify_with(lhs, rules, step_collector)),
            Arc::new(simplify_with(rhs, rules, step_collector)),
        ),
        Expr::Sub(lhs, rhs) => Expr::Sub(
            Arc::new(simplify_with(lhs, rules, step_collector)),
            Arc::new(simplify_with(rhs, rules, step_collector)),
        ),
        Expr::Mul(lhs, rhs) => Expr::Mul(
            Arc::new(simplify_with(lhs, rules, step_collector)),
            Arc::new(simplify_with(rhs, rules, step_collector)),
        ),
        Expr::Div(lhs, rhs) => Expr::Div(
            Arc::new(simplify_with(lhs, rules, step_collector)),
            Arc::new(simplify_with(rhs, rules, step_collector)),
        ),
        Expr::Sin(operand) => Expr::Sin(Arc::new(simplify_with(operand, rules, step_collector))),
        Expr::Cos(operand) => Expr::Cos(Arc::new(simplify_with(operand, rules, step_collector))),
        Expr::Exp(operand) => Expr::Exp(Arc::new(simplify_with(operand, rules, step_collector))),
        Expr::Log(operand) => Expr::Log(Arc::new(simplify_with(operand, rules, step_collector))),
    };

    rules.apply(&node, step_collector).unwrap_or(node)
}

/// Simplifies the expression with the given rule set and returns the steps that were applied,
/// in the order they were applied.
pub fn simplify_with_steps(expr: &Expr, rules: RuleSet) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, rules, &mut steps);
    (simplified, steps)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn leaves_unchanged() {
        assert_eq!(simplify(&x()), x());
        assert_eq!(simplify(&Expr::constant(2.5)), Expr::constant(2.5));
    }

    #[test]
    fn add_zero() {
        assert_eq!(simplify(&Expr::add(x(), Expr::constant(0.0))), x());
        assert_eq!(simplify(&Expr::add(Expr::constant(0.0), x())), x());
        assert_eq!(
            simplify(&Expr::add(Expr::constant(0.0), Expr::constant(0.0))),
            Expr::constant(0.0),
        );
    }

    #[test]
    fn subtract_zero() {
        assert_eq!(simplify(&Expr::sub(x(), Expr::constant(0.0))), x());

        // only a zero right operand is special-cased
        let expr = Expr::sub(Expr::constant(0.0), x());
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn multiply_zero() {
        assert_eq!(
            simplify(&Expr::mul(x(), Expr::constant(0.0))),
            Expr::constant(0.0),
        );
        assert_eq!(
            simplify(&Expr::mul(Expr::constant(0.0), x())),
            Expr::constant(0.0),
        );
    }

    #[test]
    fn multiply_one() {
        assert_eq!(simplify(&Expr::mul(x(), Expr::constant(1.0))), x());
        assert_eq!(simplify(&Expr::mul(Expr::constant(1.0), x())), x());
    }

    #[test]
    fn divide() {
        assert_eq!(
            simplify(&Expr::div(Expr::constant(0.0), x())),
            Expr::constant(0.0),
        );
        assert_eq!(simplify(&Expr::div(x(), Expr::constant(1.0))), x());
    }

    #[test]
    fn rules_cascade_bottom_up() {
        // x * (1 * (x + 0)): the addition collapses first, then the inner product
        let expr = Expr::mul(
            x(),
            Expr::mul(Expr::constant(1.0), Expr::add(x(), Expr::constant(0.0))),
        );
        assert_eq!(simplify(&expr), Expr::mul(x(), x()));
    }

    #[test]
    fn unary_operands_simplify() {
        // sin(x + 0) = sin(x); the function node itself is left alone
        assert_eq!(
            simplify(&Expr::sin(Expr::add(x(), Expr::constant(0.0)))),
            Expr::sin(x()),
        );
    }

    #[test]
    fn no_constant_folding_by_default() {
        let expr = Expr::add(Expr::constant(2.0), Expr::constant(3.0));
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn not_a_normal_form() {
        // each rule looks at one node, and folding requires both operands of that node to be
        // constants, so nested constant products survive both rule sets
        let expr = Expr::mul(
            Expr::constant(2.0),
            Expr::mul(Expr::constant(3.0), x()),
        );
        assert_eq!(simplify(&expr), expr);
        assert_eq!(simplify_with(&expr, RuleSet::Folding, &mut ()), expr);
    }

    #[test]
    fn idempotent_on_covered_patterns() {
        let exprs = [
            Expr::add(x(), Expr::constant(0.0)),
            Expr::mul(Expr::constant(0.0), Expr::sin(x())),
            Expr::div(x(), Expr::constant(1.0)),
            Expr::sub(Expr::mul(x(), Expr::constant(1.0)), Expr::constant(0.0)),
        ];
        for expr in exprs {
            let once = simplify(&expr);
            assert_eq!(simplify(&once), once);
        }
    }

    #[test]
    fn folding_combines_constants() {
        let cases = [
            (
                Expr::add(Expr::constant(2.0), Expr::constant(3.0)),
                Expr::constant(5.0),
            ),
            (
                Expr::sub(Expr::constant(2.0), Expr::constant(3.0)),
                Expr::constant(-1.0),
            ),
            (
                Expr::mul(Expr::constant(2.0), Expr::constant(3.0)),
                Expr::constant(6.0),
            ),
            (
                Expr::div(Expr::constant(6.0), Expr::constant(3.0)),
                Expr::constant(2.0),
            ),
        ];
        for (expr, expected) in cases {
            assert_eq!(simplify_with(&expr, RuleSet::Folding, &mut ()), expected);
        }
    }

    #[test]
    fn folding_skips_division_by_zero() {
        let expr = Expr::div(x(), Expr::constant(0.0));
        assert_eq!(simplify_with(&expr, RuleSet::Folding, &mut ()), expr);

        let expr = Expr::div(Expr::constant(6.0), Expr::constant(0.0));
        assert_eq!(simplify_with(&expr, RuleSet::Folding, &mut ()), expr);
    }

    #[test]
    fn folding_evaluates_functions() {
        let cases = [
            (Expr::sin(Expr::constant(0.0)), Expr::constant(0.0)),
            (Expr::cos(Expr::constant(0.0)), Expr::constant(1.0)),
            (Expr::exp(Expr::constant(0.0)), Expr::constant(1.0)),
            (Expr::log(Expr::constant(1.0)), Expr::constant(0.0)),
        ];
        for (expr, expected) in cases {
            assert_eq!(simplify_with(&expr, RuleSet::Folding, &mut ()), expected);
        }

        // log of a non-positive constant is left alone
        let expr = Expr::log(Expr::constant(-1.0));
        assert_eq!(simplify_with(&expr, RuleSet::Folding, &mut ()), expr);
    }

    #[test]
    fn collects_steps() {
        // (x * 0) + x: the inner product collapses first, then the addition
        let expr = Expr::add(Expr::mul(x(), Expr::constant(0.0)), x());
        let (simplified, steps) = simplify_with_steps(&expr, RuleSet::Identity);
        assert_eq!(simplified, x());
        assert_eq!(steps, vec![Step::MultiplyZero, Step::AddZero]);
    }

    #[test]
    fn folding_steps() {
        // sin(2 - 2): the difference folds, then the sine
        let expr = Expr::sin(Expr::sub(Expr::constant(2.0), Expr::constant(2.0)));
        let (simplified, steps) = simplify_with_steps(&expr, RuleSet::Folding);
        assert_eq!(simplified, Expr::constant(0.0));
        assert_eq!(steps, vec![Step::CombineConstants, Step::Sin]);
    }
}
