// rulelex/src/lib.rs

//! A configuration-driven lexical scanner.
//!
//! Token grammars are described declaratively: an ordered list of rules, each
//! either a literal string or a regular expression, plus a set of delimiter
//! characters. This library provides functionality to:
//! - Deserialize and validate rule documents ([`LexerSpec`] → [`RuleTable`])
//! - Match rules at a position with ordered-choice semantics and delimiter guards
//! - Fall back to word, number and quoted-string scanners
//! - Recover from unrecognized characters, reporting them as [`Diagnostic`]s
//!
//! # Examples
//!
//! ```
//! fn main() -> Result<(), rulelex::LexError> {
//!     let table = rulelex::RuleTable::builder()
//!         .literal("op", "!=")
//!         .guarded_literal("op", "=")
//!         .delimiters(" ")
//!         .build()?;
//!
//!     let scan = rulelex::tokenize("a != 1", &table)?;
//!     let values: Vec<&str> = scan.tokens.iter().map(|t| t.value.as_str()).collect();
//!     assert_eq!(values, ["a", "!=", "1"]);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod rules;
pub mod scanner;

pub use error::{ConfigError, LexError, Result};
pub use rules::{LexerSpec, RuleSpec, RuleTable, RuleTableBuilder, ScannerKind};
pub use scanner::{Diagnostic, Lexer, Scan, Scanner, Step, Token};

/// Tokenize `input` against a compiled rule table.
pub fn tokenize(input: &str, table: &RuleTable) -> Result<Scan> {
    scanner::scan(input, table)
}

/// Validate `spec` and tokenize `input` with it.
///
/// Prefer building the [`RuleTable`] once when scanning several inputs.
pub fn tokenize_with_spec(input: &str, spec: &LexerSpec) -> Result<Scan> {
    let table = RuleTable::from_spec(spec)?;
    tokenize(input, &table)
}

/// Serialize tokens as a JSON array of `{"type": ..., "value": ...}` objects.
#[cfg(feature = "json")]
pub fn to_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string(tokens)
}

/// Like [`to_json`], indented for reading.
#[cfg(feature = "json")]
pub fn to_json_pretty(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_with_spec_rejects_bad_config() {
        let spec = LexerSpec {
            tokens: vec![RuleSpec::pattern("broken", "(")],
            ..Default::default()
        };
        let err = tokenize_with_spec("anything", &spec).unwrap_err();
        assert!(matches!(
            err,
            LexError::Config(ConfigError::InvalidPattern { .. })
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_to_json() {
        let tokens = vec![Token::new("paren", "("), Token::new("paren", ")")];
        assert_eq!(
            to_json(&tokens).unwrap(),
            r#"[{"type":"paren","value":"("},{"type":"paren","value":")"}]"#
        );
    }
}
