// rulelex/src/scanner/token.rs

//! Token and diagnostic records produced by the scanner.

use serde::Serialize;
use std::fmt;

/// A typed lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The type tag of the rule or scanner that produced the token
    #[serde(rename = "type")]
    pub token_type: String,
    /// The matched text
    pub value: String,
}

impl Token {
    pub fn new<T: Into<String>, V: Into<String>>(token_type: T, value: V) -> Self {
        Self {
            token_type: token_type.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.token_type, self.value)
    }
}

/// A recoverable problem noticed while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No rule and no scanner recognized the character at `position`; it was skipped.
    UnmatchedCharacter { position: usize, character: char },
}

impl Diagnostic {
    /// Byte offset the diagnostic refers to.
    pub fn position(&self) -> usize {
        match self {
            Diagnostic::UnmatchedCharacter { position, .. } => *position,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnmatchedCharacter {
                position,
                character,
            } => write!(
                f,
                "could not determine character at position {}: {:?}",
                position, character
            ),
        }
    }
}

/// Tokens and diagnostics collected over a whole input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Scan {
    /// True when every character was either whitespace or part of a token.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate over the token types, in order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.token_type.as_str())
    }
}
