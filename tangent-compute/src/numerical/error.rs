//! Errors produced when evaluating expressions.

use thiserror::Error;

/// The variable is not defined in the environment.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("`{name}` is not defined")]
pub struct UnboundVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// Bound variables with similar names, if any.
    pub suggestions: Vec<String>,
}

impl UnboundVariable {
    /// Returns a hint pointing at similarly named variables that are bound.
    pub fn help(&self) -> Option<String> {
        if self.suggestions.is_empty() {
            None
        } else if self.suggestions.len() == 1 {
            Some(format!("did you mean the `{}` variable?", self.suggestions[0]))
        } else {
            Some(format!(
                "did you mean one of these variables? {}",
                self.suggestions
                    .iter()
                    .map(|name| format!("`{}`", name))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn message() {
        let error = UnboundVariable {
            name: "y".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(error.to_string(), "`y` is not defined");
        assert_eq!(error.help(), None);
    }

    #[test]
    fn help_with_suggestions() {
        let error = UnboundVariable {
            name: "x2".to_string(),
            suggestions: vec!["x1".to_string()],
        };
        assert_eq!(error.help().unwrap(), "did you mean the `x1` variable?");

        let error = UnboundVariable {
            name: "tab".to_string(),
            suggestions: vec!["tau".to_string(), "tan".to_string()],
        };
        assert_eq!(
            error.help().unwrap(),
            "did you mean one of these variables? `tau`, `tan`",
        );
    }
}
