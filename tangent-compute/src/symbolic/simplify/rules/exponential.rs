//! Simplification rules for the exponential and natural logarithm functions.

use crate::symbolic::{
    expr::Expr,
    simplify::step::Step,
    step_collector::StepCollector,
};

/// `exp(a) = b` (where `a` is a constant)
pub fn exp(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match expr {
        Expr::Exp(operand) => Expr::Constant(operand.as_constant()?.exp()),
        _ => return None,
    };

    step_collector.push(Step::Exp);
    Some(opt)
}

/// `log(a) = b` (where `a` is a positive constant)
///
/// The logarithm of zero or of a negative constant is left alone rather than folded to
/// `-inf` or NaN.
pub fn log(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = match expr {
        Expr::Log(operand) => {
            let value = operand.as_constant()?;
            if value <= 0.0 {
                return None;
            }
            Expr::Constant(value.ln())
        },
        _ => return None,
    };

    step_collector.push(Step::Log);
    Some(opt)
}
