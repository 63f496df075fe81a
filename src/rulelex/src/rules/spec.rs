// rulelex/src/rules/spec.rs

//! Deserializable rule document.
//!
//! These are the INPUT types: they mirror the YAML/JSON layout one to one and
//! carry no validation. [`RuleTable::from_spec`](super::RuleTable::from_spec)
//! turns a [`LexerSpec`] into the compiled table the engine runs on.
//!
//! ```yaml
//! tokens:
//!   - type: keyword
//!     value: function
//!   - type: identifier
//!     pattern: "[a-zA-Z_][a-zA-Z0-9_]*"
//! delimiters: " (){};"
//! delimiter_check_for_types: [keyword]
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Quote characters recognized by the string scanner when none are configured.
pub const DEFAULT_QUOTES: &str = "\"'`";

/// Fallback scanners tried, in this order, when none are configured.
pub const DEFAULT_SCANNERS: [ScannerKind; 3] =
    [ScannerKind::String, ScannerKind::Word, ScannerKind::Number];

/// A complete rule document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LexerSpec {
    /// Ordered token rules; the first matching rule wins
    pub tokens: Vec<RuleSpec>,

    /// Characters that may follow a delimiter-checked literal
    #[serde(default)]
    pub delimiters: String,

    /// Rule types whose literals need a trailing delimiter
    #[serde(default)]
    pub delimiter_check_for_types: Vec<String>,

    /// Fallback scanners, in the order they are tried
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanners: Option<Vec<ScannerKind>>,

    /// Opening/closing characters for the string scanner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotes: Option<String>,
}

/// One entry of the `tokens` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RuleSpec {
    #[serde(rename = "type")]
    pub token_type: String,

    #[serde(default, alias = "literal", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Require a delimiter (or end of input) after this literal
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub delimiter_checked: bool,
}

impl RuleSpec {
    pub fn literal<T: Into<String>, V: Into<String>>(token_type: T, value: V) -> Self {
        Self {
            token_type: token_type.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn pattern<T: Into<String>, P: Into<String>>(token_type: T, pattern: P) -> Self {
        Self {
            token_type: token_type.into(),
            pattern: Some(pattern.into()),
            ..Default::default()
        }
    }

    pub fn with_delimiter_check(mut self, checked: bool) -> Self {
        self.delimiter_checked = checked;
        self
    }
}

/// Character-class scanners used when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScannerKind {
    /// Quote-delimited text, emitted as `string`
    String,
    /// Run of ASCII letters, emitted as `name`
    Word,
    /// Run of ASCII digits, emitted as `number`
    Number,
    /// Run of characters up to the next delimiter or whitespace, emitted as `text`
    Slice,
}

impl ScannerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScannerKind::String => "string",
            ScannerKind::Word => "word",
            ScannerKind::Number => "number",
            ScannerKind::Slice => "slice",
        }
    }

    /// Type tag of the tokens this scanner emits.
    pub fn token_type(&self) -> &'static str {
        match self {
            ScannerKind::String => "string",
            ScannerKind::Word => "name",
            ScannerKind::Number => "number",
            ScannerKind::Slice => "text",
        }
    }
}

impl fmt::Display for ScannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScannerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(ScannerKind::String),
            "word" => Ok(ScannerKind::Word),
            "number" => Ok(ScannerKind::Number),
            "slice" => Ok(ScannerKind::Slice),
            _ => Err(ConfigError::UnknownScanner(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ScannerKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::unknown_variant(&s, &["string", "word", "number", "slice"])
        })
    }
}

impl Serialize for ScannerKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_document() {
        let spec: LexerSpec = serde_json::from_str(
            r#"{"tokens": [{"type": "paren", "value": "("}, {"type": "id", "pattern": "[a-z]+"}]}"#,
        )
        .unwrap();

        assert_eq!(spec.tokens.len(), 2);
        assert_eq!(spec.tokens[0], RuleSpec::literal("paren", "("));
        assert_eq!(spec.tokens[1], RuleSpec::pattern("id", "[a-z]+"));
        assert!(spec.delimiters.is_empty());
        assert!(spec.scanners.is_none());
    }

    #[test]
    fn test_literal_alias() {
        let rule: RuleSpec =
            serde_json::from_str(r#"{"type": "eq", "literal": "=", "delimiter_checked": true}"#)
                .unwrap();
        assert_eq!(rule, RuleSpec::literal("eq", "=").with_delimiter_check(true));
    }

    #[test]
    fn test_scanner_kind_parsing() {
        assert_eq!("Word".parse::<ScannerKind>().unwrap(), ScannerKind::Word);
        assert!(matches!(
            "float".parse::<ScannerKind>(),
            Err(ConfigError::UnknownScanner(_))
        ));

        let kinds: Vec<ScannerKind> = serde_json::from_str(r#"["number", "slice"]"#).unwrap();
        assert_eq!(kinds, vec![ScannerKind::Number, ScannerKind::Slice]);
        assert!(serde_json::from_str::<Vec<ScannerKind>>(r#"["float"]"#).is_err());
    }

    #[test]
    fn test_serialize_skips_defaults() {
        let spec = LexerSpec {
            tokens: vec![RuleSpec::literal("paren", "(")],
            delimiters: " ".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(
            json,
            r#"{"tokens":[{"type":"paren","value":"("}],"delimiters":" ","delimiter_check_for_types":[]}"#
        );
    }
}
