//! Constants used in the library. This module consists of the identity elements of addition and
//! multiplication as ready-made expression nodes, plus the usual mathematical constants bound by
//! the default evaluation environment.

use crate::symbolic::expr::Expr;
use once_cell::sync::Lazy;

/// The additive identity, as an expression node.
pub static ZERO: Lazy<Expr> = Lazy::new(|| Expr::Constant(0.0));

/// The multiplicative identity, as an expression node.
pub static ONE: Lazy<Expr> = Lazy::new(|| Expr::Constant(1.0));

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// The golden ratio.
pub static PHI: Lazy<f64> = Lazy::new(|| (1.0 + 5.0_f64.sqrt()) / 2.0);

pub const PI: f64 = std::f64::consts::PI;

pub const TAU: f64 = std::f64::consts::TAU;
