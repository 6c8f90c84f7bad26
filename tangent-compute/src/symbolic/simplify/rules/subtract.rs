//! Simplification rules for subtraction.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_subtract, step::Step},
    step_collector::StepCollector,
};

/// `a - 0 = a`
///
/// A zero left operand is not rewritten; `0 - a` stays as it is.
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `a - b = c` (where `a` and `b` are constants)
pub fn combine_constants(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        Some(Expr::Constant(lhs.as_constant()? - rhs.as_constant()?))
    })?;

    step_collector.push(Step::CombineConstants);
    Some(opt)
}
