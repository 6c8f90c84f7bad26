//! Simplification rules for trigonometric functions.

use crate::symbolic::{
    expr::Expr,
    simplify::step::Step,
    step_collector::StepCollector,
};

/// `sin(a) = b` (where `a` is a constant, in radians)
pub fn sin(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match expr {
        Expr::Sin(operand) => Expr::Constant(operand.as_constant()?.sin()),
        _ => return None,
    };

    step_collector.push(Step::Sin);
    Some(opt)
}

/// `cos(a) = b` (where `a` is a constant, in radians)
pub fn cos(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match expr {
        Expr::Cos(operand) => Expr::Constant(operand.as_constant()?.cos()),
        _ => return None,
    };

    step_collector.push(Step::Cos);
    Some(opt)
}
