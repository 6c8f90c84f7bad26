//! Evaluation of expression trees to [`f64`] values.

use crate::symbolic::expr::Expr;
use super::{env::Environment, error::UnboundVariable};

/// Any type that can be evaluated to a number.
pub trait Eval {
    /// Evaluates the type in the given environment, producing a number or an error.
    fn eval(&self, env: &Environment) -> Result<f64, UnboundVariable>;

    /// Evaluates the type in the default environment.
    fn eval_default(&self) -> Result<f64, UnboundVariable> {
        self.eval(&Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, env: &Environment) -> Result<f64, UnboundVariable> {
        match self {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(name) => env.get_var(name).ok_or_else(|| UnboundVariable {
                name: name.clone(),
                suggestions: env
                    .get_similar_vars(name)
                    .into_iter()
                    .map(ToString::to_string)
                    .collect(),
            }),
            Expr::Add(lhs, rhs) => Ok(lhs.eval(env)? + rhs.eval(env)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.eval(env)? - rhs.eval(env)?),
            Expr::Mul(lhs, rhs) => Ok(lhs.eval(env)? * rhs.eval(env)?),

            // division follows IEEE 754, so a zero divisor produces an infinity or NaN rather
            // than an error
            Expr::Div(lhs, rhs) => Ok(lhs.eval(env)? / rhs.eval(env)?),
            Expr::Sin(operand) => Ok(operand.eval(env)?.sin()),
            Expr::Cos(operand) => Ok(operand.eval(env)?.cos()),
            Expr::Exp(operand) => Ok(operand.eval(env)?.exp()),
            Expr::Log(operand) => Ok(operand.eval(env)?.ln()),
        }
    }
}
