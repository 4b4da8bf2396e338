//! Unified error system for the pattern demos
//!
//! The demos themselves have almost no failure modes. The two latent ones,
//! a loan request no handler accepts and a role hierarchy that includes
//! itself, get their own variants so callers can match on them.

/// Unified error type for all demo operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    /// No handler in an approval chain accepted the request
    #[error("Unhandled request: no handler approved amount {amount}")]
    UnhandledRequest {
        /// Amount that fell through the chain
        amount: f64,
    },

    /// A role hierarchy refers back to one of its ancestors
    #[error("Cyclic structure: {}", .path.join(" -> "))]
    CyclicStructure {
        /// Role names from the first repeated role back to itself
        path: Vec<String>,
    },

    /// A referenced item does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Invalid input
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Configuration could not be read or parsed
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration failure
        message: String,
    },
}

impl PatternError {
    /// Create an unhandled request error
    pub fn unhandled(amount: f64) -> Self {
        Self::UnhandledRequest { amount }
    }

    /// Create a cyclic structure error from the offending path
    pub fn cyclic<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CyclicStructure {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Standard Result type for demo operations
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid TOML: {err}"))
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("Invalid JSON: {err}"))
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::config(format!("I/O error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_error_renders_path() {
        let err = PatternError::cyclic(["Admin", "Editor", "Admin"]);
        assert_eq!(err.to_string(), "Cyclic structure: Admin -> Editor -> Admin");
    }

    #[test]
    fn unhandled_error_names_amount() {
        let err = PatternError::unhandled(60000.0);
        assert!(err.to_string().contains("60000"));
    }
}
