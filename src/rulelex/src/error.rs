// rulelex/src/error.rs

//! Error types for rule table construction and scanning.
//!
//! Only failures that abort a run live here. Characters the engine cannot
//! recognize are not errors: they are reported as
//! [`Diagnostic`](crate::scanner::Diagnostic) values alongside the tokens.

use thiserror::Error;

/// Result type alias for rulelex operations.
pub type Result<T> = std::result::Result<T, LexError>;

/// Fatal failures of a tokenization run.
#[derive(Error, Debug)]
pub enum LexError {
    /// A quoted string was opened but the input ended before its closing quote.
    #[error("Unclosed string: {quote:?} opened at position {position} is never closed")]
    UnclosedString { quote: char, position: usize },

    /// The rule table could not be built.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LexError {
    /// Create a new unclosed string error.
    pub fn unclosed_string(quote: char, position: usize) -> Self {
        LexError::UnclosedString { quote, position }
    }

    /// Get the error category for logging purposes.
    pub fn category(&self) -> &'static str {
        match self {
            LexError::UnclosedString { .. } => "string",
            LexError::Config(_) => "config",
        }
    }
}

/// Problems found while validating a rule document.
///
/// Every variant carries the zero-based index of the offending rule in the
/// `tokens` list so a document author can find it.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Rule {index} ({token_type}) has neither a literal value nor a pattern")]
    MissingMatcher { index: usize, token_type: String },

    #[error("Rule {index} ({token_type}) has both a literal value and a pattern")]
    ConflictingMatcher { index: usize, token_type: String },

    #[error("Rule {index} has an empty type")]
    EmptyType { index: usize },

    #[error("Rule {index} ({token_type}) has an empty literal value")]
    EmptyLiteral { index: usize, token_type: String },

    #[error("Rule {index} ({token_type}) has an invalid pattern: {source}")]
    InvalidPattern {
        index: usize,
        token_type: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule {index} repeats literal {literal:?} already declared by rule {first}")]
    DuplicateLiteral {
        index: usize,
        first: usize,
        literal: String,
    },

    #[error(
        "Rule {index} ({literal:?}) is unreachable: rule {shadowed_by} ({prefix:?}) matches its prefix first; \
         list the longer literal first or guard the shorter one with a delimiter check"
    )]
    ShadowedLiteral {
        index: usize,
        literal: String,
        shadowed_by: usize,
        prefix: String,
    },

    #[error("Unknown scanner {0:?}")]
    UnknownScanner(String),
}

impl ConfigError {
    /// Index of the rule this error refers to, if any.
    pub fn rule_index(&self) -> Option<usize> {
        match self {
            ConfigError::MissingMatcher { index, .. }
            | ConfigError::ConflictingMatcher { index, .. }
            | ConfigError::EmptyType { index }
            | ConfigError::EmptyLiteral { index, .. }
            | ConfigError::InvalidPattern { index, .. }
            | ConfigError::DuplicateLiteral { index, .. }
            | ConfigError::ShadowedLiteral { index, .. } => Some(*index),
            ConfigError::UnknownScanner(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclosed_string_display() {
        let err = LexError::unclosed_string('"', 4);
        assert_eq!(
            err.to_string(),
            "Unclosed string: '\"' opened at position 4 is never closed"
        );
        assert_eq!(err.category(), "string");
    }

    #[test]
    fn test_config_error_converts() {
        let err: LexError = ConfigError::EmptyType { index: 2 }.into();
        assert_eq!(err.category(), "config");
        assert_eq!(err.to_string(), "Configuration error: Rule 2 has an empty type");
    }

    #[test]
    fn test_rule_index() {
        let err = ConfigError::ShadowedLiteral {
            index: 3,
            literal: "==".to_string(),
            shadowed_by: 1,
            prefix: "=".to_string(),
        };
        assert_eq!(err.rule_index(), Some(3));
        assert_eq!(ConfigError::UnknownScanner("x".into()).rule_index(), None);
    }
}
