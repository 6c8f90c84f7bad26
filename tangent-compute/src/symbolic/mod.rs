//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes: binary arithmetic nodes, unary
//! function nodes, and constant / variable leaves. Trees are immutable, and children are held
//! behind [`Arc`](std::sync::Arc), so the algorithms in this module return new trees that share
//! unchanged subtrees with their input. See the [`expr`] module for the equality semantics of
//! the tree, which everything here relies on.
//!
//! # Simplification
//!
//! The [`simplify()`] function rewrites an expression with a fixed set of algebraic identities,
//! such as `x + 0 = x` and `x * 1 = x`. It walks the tree once, bottom-up, and applies at most
//! one rule to each node on the way back up. It is **not** a normalizer: the result is not a
//! canonical form, and patterns that only become reducible after an outer rewrite are left
//! alone. The differentiator relies on this pass to tidy the trees it builds.
//!
//! ```
//! use tangent_compute::symbolic::expr::Expr;
//! use tangent_compute::symbolic::simplify;
//!
//! let expr = Expr::add(Expr::variable("x"), Expr::constant(0.0));
//! assert_eq!(simplify(&expr), Expr::variable("x"));
//! ```
//!
//! The rules applied by [`simplify()`] are the identity set. A superset that additionally folds
//! constant subexpressions is available through [`simplify_with`] and [`RuleSet::Folding`]; both
//! drivers can also report which rules fired, see [`simplify_with_steps`].
//!
//! # Differentiation
//!
//! The [`differentiate()`] function produces the symbolic derivative of an expression with
//! respect to one variable, simplifying as it goes.
//!
//! ```
//! use tangent_compute::symbolic::{differentiate, expr::Expr};
//!
//! // d/dx (x * y) = y
//! let expr = Expr::mul(Expr::variable("x"), Expr::variable("y"));
//! assert_eq!(differentiate(&expr, "x"), Expr::variable("y"));
//! ```
//!
//! Note that the derivative rules for the unary functions do not apply the chain rule; see the
//! [`derivative`] module before differentiating expressions with composite function operands.

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::differentiate;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps, RuleSet};
pub use step_collector::StepCollector;
