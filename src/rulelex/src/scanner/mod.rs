// rulelex/src/scanner/mod.rs

//! Rule-driven lexical scanner.
//!
//! [`Lexer`] is the matching engine: given a position it skips whitespace,
//! tries the rule table in order, falls back to the character-class scanners
//! in [`classes`], and otherwise skips one character with a [`Diagnostic`].
//! [`Scanner`] drives it from the start of the input to the end.

pub mod classes;
pub mod lexer;
pub mod scanner;
pub mod token;

// Re-export main types and functions
pub use lexer::{Lexer, Step};
pub use scanner::{Scanner, Steps};
pub use token::{Diagnostic, Scan, Token};

use crate::error::Result;
use crate::rules::RuleTable;

/// Convenience function to scan a string into tokens and diagnostics.
pub fn scan(input: &str, table: &RuleTable) -> Result<Scan> {
    Scanner::new(input, table).scan_all()
}
