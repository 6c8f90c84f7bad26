//! Symbolic differentiation of expression trees.
//!
//! [`differentiate`] implements the textbook sum, difference, product, and quotient rules,
//! running [`simplify`] over each node it builds so that derivatives of simple expressions come
//! out free of `* 1` and `+ 0` noise:
//!
//! ```
//! use tangent_compute::symbolic::{differentiate, expr::Expr};
//!
//! // d/dx (x * x) = 1 * x + 1 * x, which simplifies to x + x
//! let square = Expr::mul(Expr::variable("x"), Expr::variable("x"));
//! assert_eq!(
//!     differentiate(&square, "x"),
//!     Expr::add(Expr::variable("x"), Expr::variable("x")),
//! );
//! ```
//!
//! # No chain rule
//!
//! The unary functions differentiate as if their operand were the differentiation variable
//! itself; the chain rule factor is **not** multiplied in. `sin(x)` correctly becomes `cos(x)`,
//! but `sin(x * x)` becomes `cos(x * x)` rather than `2 * x * cos(x * x)`:
//!
//! ```
//! use tangent_compute::symbolic::{differentiate, expr::Expr};
//!
//! let inner = Expr::mul(Expr::variable("x"), Expr::variable("x"));
//! assert_eq!(
//!     differentiate(&Expr::sin(inner.clone()), "x"),
//!     Expr::cos(inner),
//! );
//! ```
//!
//! Derivatives involving `sin`, `cos`, `exp`, or `log` are therefore only correct when the
//! operand is the differentiation variable itself.

use crate::consts;
use std::sync::Arc;
use super::expr::Expr;
use super::simplify::simplify;

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Arc<Expr>, rhs: &Arc<Expr>, with: &str) -> Expr {
    simplify(&Expr::add(
        differentiate(lhs, with),
        differentiate(rhs, with),
    ))
}

/// `(f - g)' = f' - g'`
fn difference_rule(lhs: &Arc<Expr>, rhs: &Arc<Expr>, with: &str) -> Expr {
    simplify(&Expr::sub(
        differentiate(lhs, with),
        differentiate(rhs, with),
    ))
}

/// `(f * g)' = f' * g + g' * f`
fn product_rule(lhs: &Arc<Expr>, rhs: &Arc<Expr>, with: &str) -> Expr {
    let dl = differentiate(lhs, with);
    let dr = differentiate(rhs, with);
    simplify(&Expr::add(
        Expr::mul(dl, Arc::clone(rhs)),
        Expr::mul(dr, Arc::clone(lhs)),
    ))
}

/// `(f / g)' = (f' * g - g' * f) / (g * g)`
fn quotient_rule(lhs: &Arc<Expr>, rhs: &Arc<Expr>, with: &str) -> Expr {
    let dl = differentiate(lhs, with);
    let dr = differentiate(rhs, with);
    simplify(&Expr::div(
        Expr::sub(
            Expr::mul(dl, Arc::clone(rhs)),
            Expr::mul(dr, Arc::clone(lhs)),
        ),
        Expr::mul(Arc::clone(rhs), Arc::clone(rhs)),
    ))
}

/// Computes the derivative of the expression with respect to the variable named `with`.
///
/// Every expression is differentiable; unbound variables differentiate like any other variable,
/// so the result may still mention variables the caller never binds.
pub fn differentiate(expr: &Expr, with: &str) -> Expr {
    match expr {
        Expr::Constant(_) => consts::ZERO.clone(),
        Expr::Variable(name) => {
            if name == with {
                consts::ONE.clone()
            } else {
                consts::ZERO.clone()
            }
        },
        Expr::Add(lhs, rhs) => sum_rule(lhs, rhs, with),
        Expr::Sub(lhs, rhs) => difference_rule(lhs, rhs, with),
        Expr::Mul(lhs, rhs) => product_rule(lhs, rhs, with),
        Expr::Div(lhs, rhs) => quotient_rule(lhs, rhs, with),

        // the unary rules differentiate with respect to the operand; the chain rule factor is
        // not applied
        Expr::Sin(operand) => Expr::cos(Arc::clone(operand)),
        Expr::Cos(operand) => Expr::mul(Expr::constant(-1.0), Expr::sin(Arc::clone(operand))),
        Expr::Exp(operand) => Expr::exp(Arc::clone(operand)),
        Expr::Log(operand) => simplify(&Expr::div(consts::ONE.clone(), Arc::clone(operand))),
    }
}
