//! Simplification rules for division.

use crate::consts;
use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_divide, step::Step},
    step_collector::StepCollector,
};

/// `0 / a = 0`
///
/// The denominator is not inspected; `0 / 0` rewrites to `0` like any other zero numerator.
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, _| {
        if lhs.is_zero() {
            Some(consts::ZERO.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a / 1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `a / b = c` (where `a` and `b` are constants, and `b` is nonzero)
///
/// Division by a zero constant is left for evaluation, which follows IEEE 754.
pub fn combine_constants(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, rhs| {
        let denominator = rhs.as_constant()?;
        if denominator == 0.0 {
            return None;
        }
        Some(Expr::Constant(lhs.as_constant()? / denominator))
    })?;

    step_collector.push(Step::CombineConstants);
    Some(opt)
}
