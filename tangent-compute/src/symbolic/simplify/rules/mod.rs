//! The rewrite rules used in the simplification process.
//!
//! Each rule inspects a single node and returns `Some(new_expr)` if it applies, pushing the
//! [`Step`] it performed onto the step collector. Rules never recurse; the driver in
//! [`simplify_with`](super::simplify_with) is responsible for visiting children first.

pub mod add;
pub mod divide;
pub mod exponential;
pub mod multiply;
pub mod subtract;
pub mod trigonometry;

use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use super::step::Step;

/// If the expression is an addition, calls `f` with its operands.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Add(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a subtraction, calls `f` with its operands.
pub(crate) fn do_subtract(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Sub(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a multiplication, calls `f` with its operands.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Mul(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a division, calls `f` with its operands.
pub(crate) fn do_divide(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Div(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// Applies the algebraic identity rules to the expression.
pub fn identities(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::add_zero(expr, step_collector)
        .or_else(|| subtract::subtract_zero(expr, step_collector))
        .or_else(|| multiply::multiply_zero(expr, step_collector))
        .or_else(|| multiply::multiply_one(expr, step_collector))
        .or_else(|| divide::divide_zero(expr, step_collector))
        .or_else(|| divide::divide_one(expr, step_collector))
}

/// Applies the algebraic identity rules, then the constant folding rules, to the expression.
pub fn folding(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    identities(expr, step_collector)
        .or_else(|| add::combine_constants(expr, step_collector))
        .or_else(|| subtract::combine_constants(expr, step_collector))
        .or_else(|| multiply::combine_constants(expr, step_collector))
        .or_else(|| divide::combine_constants(expr, step_collector))
        .or_else(|| trigonometry::sin(expr, step_collector))
        .or_else(|| trigonometry::cos(expr, step_collector))
        .or_else(|| exponential::exp(expr, step_collector))
        .or_else(|| exponential::log(expr, step_collector))
}
