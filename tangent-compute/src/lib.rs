//! A small symbolic algebra engine: build arithmetic expression trees, simplify them, evaluate
//! them numerically, and take symbolic derivatives.
//!
//! # Quick start
//!
//! ```
//! use tangent_compute::numerical::{env::Environment, eval::Eval};
//! use tangent_compute::symbolic::{differentiate, expr::Expr};
//!
//! // f = x * x + x
//! let x = Expr::variable("x");
//! let f = Expr::add(Expr::mul(x.clone(), x.clone()), x);
//!
//! // f' = (x + x) + 1
//! let derivative = differentiate(&f, "x");
//! assert_eq!(derivative.to_string(), "((x + x) + 1)");
//!
//! let mut env = Environment::new();
//! env.add_var("x", 3.0);
//! assert_eq!(derivative.eval(&env).unwrap(), 7.0);
//! ```
//!
//! # Features
//!
//! - `numerical` (enabled by default): the [`numerical`] module, containing the evaluator, its
//!   environment type, and the unbound-variable error.
//! - `serde`: `Serialize` and `Deserialize` implementations for expression trees and
//!   environments.

pub mod consts;
pub mod numerical;
pub mod symbolic;
