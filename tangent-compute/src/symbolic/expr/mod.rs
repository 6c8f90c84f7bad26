//! The expression tree shared by every algorithm in this crate.
//!
//! [`Expr`] is a small immutable tree. Interior nodes are the four binary arithmetic operators
//! and a handful of unary functions; the leaves are numeric constants and named variables.
//! Children are stored behind [`Arc`], so a subtree can appear in several expressions at once.
//! Algorithms that reference an operand twice (the product and quotient rules of the
//! differentiator, for example) clone the reference instead of the subtree.
//!
//! # Structural equality
//!
//! Deciding whether two expressions are *mathematically* equal is hard. `x + x` and `2 * x`
//! denote the same function, but no local inspection of the two trees reveals it, and answering
//! the question in general requires the kind of normalization this crate does not perform (see
//! [`simplify`](super::simplify)).
//!
//! The [`PartialEq`] implementation for [`Expr`] therefore implements **structural equality**:
//! two expressions are equal when their root nodes are the same kind of node, constants are
//! equal under plain `f64` comparison, variables carry the same name, and children are
//! structurally equal in order. Structural equality never reports a false positive, and it is
//! the comparison the simplification rules rely on for their checks against the constants zero
//! and one.
//!
//! There is no [`Eq`] implementation because constants are `f64` and inherit the usual `NaN`
//! caveats.

mod iter;

use iter::ExprIter;
use std::{collections::HashSet, ops::{Add, Div, Mul, Neg, Sub}, sync::Arc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in an expression tree.
///
/// Nodes are immutable once built. Use the constructors ([`Expr::add`], [`Expr::sin`], and so
/// on) or the arithmetic operator implementations to compose trees without spelling out the
/// [`Arc`] wrapping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal, such as `2` or `0.5`.
    Constant(f64),

    /// A variable, such as `x` or `y`. Two variables are equal iff their names are equal.
    Variable(String),

    /// The sum of the two operands.
    Add(Arc<Expr>, Arc<Expr>),

    /// The difference of the two operands, `lhs - rhs`.
    Sub(Arc<Expr>, Arc<Expr>),

    /// The product of the two operands.
    Mul(Arc<Expr>, Arc<Expr>),

    /// The quotient of the two operands, `lhs / rhs`.
    Div(Arc<Expr>, Arc<Expr>),

    /// The sine of the operand, in radians.
    Sin(Arc<Expr>),

    /// The cosine of the operand, in radians.
    Cos(Arc<Expr>),

    /// The natural exponential of the operand.
    Exp(Arc<Expr>),

    /// The natural logarithm of the operand.
    Log(Arc<Expr>),
}

/// Renders the expression as deterministic, fully parenthesized text.
///
/// Binary nodes render as `(lhs OP rhs)` and unary nodes as `fn(operand)`, so the expression
/// `(x + y) * 2` renders as `((x + y) * 2)`. The output is stable and intended for display and
/// tests; no parser reads it back.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Self::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Self::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Self::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Self::Sin(operand) => write!(f, "sin({})", operand),
            Self::Cos(operand) => write!(f, "cos({})", operand),
            Self::Exp(operand) => write!(f, "exp({})", operand),
            Self::Log(operand) => write!(f, "log({})", operand),
        }
    }
}

impl Expr {
    /// Creates a constant expression.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable expression with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates an addition node from the given operands.
    pub fn add(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::Add(lhs.into(), rhs.into())
    }

    /// Creates a subtraction node from the given operands, `lhs - rhs`.
    pub fn sub(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::Sub(lhs.into(), rhs.into())
    }

    /// Creates a multiplication node from the given operands.
    pub fn mul(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::Mul(lhs.into(), rhs.into())
    }

    /// Creates a division node from the given operands, `lhs / rhs`.
    pub fn div(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::Div(lhs.into(), rhs.into())
    }

    /// Creates a sine node.
    pub fn sin(operand: impl Into<Arc<Expr>>) -> Self {
        Self::Sin(operand.into())
    }

    /// Creates a cosine node.
    pub fn cos(operand: impl Into<Arc<Expr>>) -> Self {
        Self::Cos(operand.into())
    }

    /// Creates a natural exponential node.
    pub fn exp(operand: impl Into<Arc<Expr>>) -> Self {
        Self::Exp(operand.into())
    }

    /// Creates a natural logarithm node.
    pub fn log(operand: impl Into<Arc<Expr>>) -> Self {
        Self::Log(operand.into())
    }

    /// Returns true if the expression is exactly the constant `0.0`.
    ///
    /// The comparison is exact, matching the structural equality of the tree.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Constant(value) if *value == 0.0)
    }

    /// Returns true if the expression is exactly the constant `1.0`.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Constant(value) if *value == 1.0)
    }

    /// If the expression is an [`Expr::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::Variable`], returns the contained name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the set of distinct variable names that appear in the expression.
    pub fn variables(&self) -> HashSet<&str> {
        self.post_order_iter()
            .filter_map(|expr| expr.as_variable())
            .collect()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

/// Adds two [`Expr`]s, wrapping both operands in an [`Expr::Add`] node. No simplification is
/// done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Add(Arc::new(self), Arc::new(rhs))
    }
}

/// Subtracts two [`Expr`]s, wrapping both operands in an [`Expr::Sub`] node. No simplification
/// is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Sub(Arc::new(self), Arc::new(rhs))
    }
}

/// Multiplies two [`Expr`]s, wrapping both operands in an [`Expr::Mul`] node. No simplification
/// is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Mul(Arc::new(self), Arc::new(rhs))
    }
}

/// Divides two [`Expr`]s, wrapping both operands in an [`Expr::Div`] node. No simplification is
/// done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Div(Arc::new(self), Arc::new(rhs))
    }
}

/// Multiplies this expression by -1, wrapping it in an [`Expr::Mul`] node. No simplification is
/// done.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Constant(-1.0) * self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn structural_equality() {
        let a = Expr::add(Expr::variable("x"), Expr::constant(2.0));
        let b = Expr::add(Expr::variable("x"), Expr::constant(2.0));
        let c = Expr::add(Expr::variable("x"), Expr::constant(2.0));

        assert_eq!(a, a.clone());

        // symmetric between distinct trees
        assert_eq!(a, b);
        assert_eq!(b, a);

        // and transitive through a third
        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    #[test]
    fn structural_equality_2() {
        // same operands, different shape
        let a = Expr::add(Expr::variable("x"), Expr::constant(2.0));
        let b = Expr::add(Expr::constant(2.0), Expr::variable("x"));
        assert_ne!(a, b);

        // same operands, different operator
        let c = Expr::sub(Expr::variable("x"), Expr::constant(2.0));
        assert_ne!(a, c);
    }

    #[test]
    fn constants_compare_exactly() {
        assert_eq!(Expr::constant(0.5), Expr::constant(0.5));
        assert_ne!(Expr::constant(0.5), Expr::constant(0.5 + 1e-12));
    }

    #[test]
    fn shared_subtrees_compare_by_value() {
        let shared = Arc::new(Expr::variable("x"));
        let a = Expr::Mul(Arc::clone(&shared), shared);
        let b = Expr::mul(Expr::variable("x"), Expr::variable("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn identity_predicates() {
        assert!(Expr::constant(0.0).is_zero());
        assert!(Expr::constant(1.0).is_one());
        assert!(!Expr::constant(1.0).is_zero());
        assert!(!Expr::variable("x").is_zero());
    }

    #[test]
    fn fmt_expr() {
        let sum = Expr::add(Expr::variable("x"), Expr::variable("y"));
        assert_eq!(sum.to_string(), "(x + y)");

        let expr = Expr::mul(sum, Expr::constant(2.0));
        assert_eq!(expr.to_string(), "((x + y) * 2)");
    }

    #[test]
    fn fmt_unary() {
        assert_eq!(Expr::sin(Expr::variable("x")).to_string(), "sin(x)");

        let expr = Expr::div(Expr::cos(Expr::variable("t")), Expr::constant(-1.0));
        assert_eq!(expr.to_string(), "(cos(t) / -1)");
    }

    #[test]
    fn operator_sugar() {
        let expr = Expr::variable("x") + Expr::variable("y") * Expr::constant(3.0);
        assert_eq!(
            expr,
            Expr::add(
                Expr::variable("x"),
                Expr::mul(Expr::variable("y"), Expr::constant(3.0)),
            ),
        );

        assert_eq!(
            -Expr::variable("x"),
            Expr::mul(Expr::constant(-1.0), Expr::variable("x")),
        );
    }

    #[test]
    fn variables_of_expr() {
        let expr = Expr::add(
            Expr::mul(Expr::variable("x"), Expr::variable("y")),
            Expr::sin(Expr::variable("x")),
        );
        let vars = expr.variables();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains("x"));
        assert!(vars.contains("y"));
    }
}
