//! Simplification rules for multiplication.

use crate::consts;
use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `0 * a = 0`
/// `a * 0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_zero() || rhs.is_zero() {
            Some(consts::ZERO.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1 * a = a`
/// `a * 1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_one() {
            Some(rhs.clone())
        } else if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a * b = c` (where `a` and `b` are constants)
pub fn combine_constants(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        Some(Expr::Constant(lhs.as_constant()? * rhs.as_constant()?))
    })?;

    step_collector.push(Step::CombineConstants);
    Some(opt)
}
