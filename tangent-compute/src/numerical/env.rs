//! The environment that provides values for variables during evaluation.

use crate::consts;
use levenshtein::levenshtein;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from variable names to the values they evaluate to.
///
/// The [`Default`] environment binds several well-known constants: `e`, `phi`, `pi`, and `tau`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Environment {
    /// The variables bound in this environment.
    vars: HashMap<String, f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("e".to_string(), consts::E),
                ("phi".to_string(), *consts::PHI),
                ("pi".to_string(), consts::PI),
                ("tau".to_string(), consts::TAU),
            ]),
        }
    }
}

impl Environment {
    /// Creates a new empty environment.
    ///
    /// The empty environment does not even bind the common mathematical constants; consider
    /// using the [`Default`] implementation instead.
    pub fn new() -> Environment {
        Environment {
            vars: HashMap::new(),
        }
    }

    /// Binds the given value to the variable, replacing any previous binding.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Gets the value bound to the variable, if any.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns all variables bound in this environment.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all bound variables with names similar to the given name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        self.vars
            .keys()
            .filter(|var| levenshtein(var, name) < 2)
            .map(|var| var.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn default_constants() {
        let env = Environment::default();
        assert_eq!(env.get_var("pi"), Some(std::f64::consts::PI));
        assert_eq!(env.get_var("tau"), Some(std::f64::consts::TAU));
        assert_eq!(env.get_var("x"), None);
    }

    #[test]
    fn new_is_empty() {
        assert!(Environment::new().get_vars().is_empty());
    }

    #[test]
    fn similar_names() {
        let mut env = Environment::new();
        env.add_var("alpha", 1.0);
        env.add_var("beta", 2.0);
        assert_eq!(env.get_similar_vars("betb"), vec!["beta"]);
        assert!(env.get_similar_vars("gamma").is_empty());
    }
}
