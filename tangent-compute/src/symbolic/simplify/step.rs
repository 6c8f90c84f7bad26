//! The rewrite steps the simplifier can report.

/// A single rewrite applied by the simplifier.
///
/// Each variant names the rule that fired. The variants carry no operands; a step collector that
/// needs the surrounding expressions can reconstruct them by replaying the simplification, since
/// steps are reported in bottom-up application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0 + a = a`, `a + 0 = a`
    AddZero,

    /// `a - 0 = a`
    SubtractZero,

    /// `0 * a = 0`, `a * 0 = 0`
    MultiplyZero,

    /// `1 * a = a`, `a * 1 = a`
    MultiplyOne,

    /// `0 / a = 0`
    DivideZero,

    /// `a / 1 = a`
    DivideOne,

    /// `a + b = c`, `a - b = c`, `a * b = c`, `a / b = c` (where `a` and `b` are constants)
    CombineConstants,

    /// `sin(a) = b` (where `a` is a constant)
    Sin,

    /// `cos(a) = b` (where `a` is a constant)
    Cos,

    /// `exp(a) = b` (where `a` is a constant)
    Exp,

    /// `log(a) = b` (where `a` is a positive constant)
    Log,
}
