//! Simplification rules for addition.

use crate::consts;
use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// `0 + a = a`
/// `a + 0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if lhs.is_zero() && rhs.is_zero() {
            Some(consts::ZERO.clone())
        } else if lhs.is_zero() {
            Some(rhs.clone())
        } else if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a + b = c` (where `a` and `b` are constants)
pub fn combine_constants(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        Some(Expr::Constant(lhs.as_constant()? + rhs.as_constant()?))
    })?;

    step_collector.push(Step::CombineConstants);
    Some(opt)
}
