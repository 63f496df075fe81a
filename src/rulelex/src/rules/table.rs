// rulelex/src/rules/table.rs

//! Compiled, validated rule table.

use super::spec::{LexerSpec, RuleSpec, ScannerKind, DEFAULT_QUOTES, DEFAULT_SCANNERS};
use crate::error::ConfigError;
use regex::Regex;

/// How a rule recognizes its token.
#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(String),
    /// Compiled with a leading `\A` so it only matches at the scan position
    Pattern(Regex),
}

/// A single compiled token rule.
#[derive(Debug, Clone)]
pub struct Rule {
    token_type: String,
    matcher: Matcher,
    delimiter_checked: bool,
}

impl Rule {
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn is_delimiter_checked(&self) -> bool {
        self.delimiter_checked
    }

    /// Literal text of the rule, if it is a literal rule.
    pub fn literal(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Literal(text) => Some(text),
            Matcher::Pattern(_) => None,
        }
    }

    /// Try the rule against `rest`, the input from the scan position onwards.
    ///
    /// Returns the matched prefix of `rest`. Pattern matches that consume
    /// nothing are rejected.
    pub fn match_prefix<'i>(&self, rest: &'i str, table: &RuleTable) -> Option<&'i str> {
        match &self.matcher {
            Matcher::Literal(text) => {
                if !rest.starts_with(text.as_str()) {
                    return None;
                }
                if self.delimiter_checked {
                    let followed_by_delimiter = rest[text.len()..]
                        .chars()
                        .next()
                        .map_or(true, |c| table.is_delimiter(c));
                    if !followed_by_delimiter {
                        return None;
                    }
                }
                Some(&rest[..text.len()])
            }
            Matcher::Pattern(regex) => regex
                .find(rest)
                .filter(|m| m.start() == 0 && !m.is_empty())
                .map(|m| m.as_str()),
        }
    }
}

/// The immutable configuration a scan runs against.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    delimiters: Vec<char>,
    scanners: Vec<ScannerKind>,
    quotes: Vec<char>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Validate and compile a rule document.
    pub fn from_spec(spec: &LexerSpec) -> Result<Self, ConfigError> {
        let mut rules = Vec::with_capacity(spec.tokens.len());
        for (index, rule) in spec.tokens.iter().enumerate() {
            let delimiter_checked = rule.delimiter_checked
                || spec.delimiter_check_for_types.contains(&rule.token_type);
            rules.push(compile_rule(index, rule, delimiter_checked)?);
        }

        let table = Self {
            rules,
            delimiters: spec.delimiters.chars().collect(),
            scanners: spec
                .scanners
                .clone()
                .unwrap_or_else(|| DEFAULT_SCANNERS.to_vec()),
            quotes: spec
                .quotes
                .as_deref()
                .unwrap_or(DEFAULT_QUOTES)
                .chars()
                .collect(),
        };
        table.check_literal_order()?;

        log::debug!(
            "compiled rule table: {} rules, {} delimiters, scanners {:?}",
            table.rules.len(),
            table.delimiters.len(),
            table.scanners
        );
        Ok(table)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    pub fn scanners(&self) -> &[ScannerKind] {
        &self.scanners
    }

    pub fn quotes(&self) -> &[char] {
        &self.quotes
    }

    pub fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(&c)
    }

    /// Reject literal rules that can never match because an earlier literal
    /// always claims their text first.
    fn check_literal_order(&self) -> Result<(), ConfigError> {
        for (later_index, later) in self.rules.iter().enumerate() {
            let Some(long) = later.literal() else {
                continue;
            };
            for (earlier_index, earlier) in self.rules[..later_index].iter().enumerate() {
                let Some(short) = earlier.literal() else {
                    continue;
                };
                if !long.starts_with(short) {
                    continue;
                }

                if long.len() == short.len() {
                    // A guarded duplicate still leaves an unguarded copy reachable.
                    if !earlier.delimiter_checked || later.delimiter_checked {
                        return Err(ConfigError::DuplicateLiteral {
                            index: later_index,
                            first: earlier_index,
                            literal: long.to_string(),
                        });
                    }
                    continue;
                }

                let shadowed = if earlier.delimiter_checked {
                    long[short.len()..]
                        .chars()
                        .next()
                        .is_some_and(|c| self.is_delimiter(c))
                } else {
                    true
                };
                if shadowed {
                    return Err(ConfigError::ShadowedLiteral {
                        index: later_index,
                        literal: long.to_string(),
                        shadowed_by: earlier_index,
                        prefix: short.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn compile_rule(index: usize, rule: &RuleSpec, delimiter_checked: bool) -> Result<Rule, ConfigError> {
    if rule.token_type.is_empty() {
        return Err(ConfigError::EmptyType { index });
    }
    let token_type = rule.token_type.clone();

    let matcher = match (&rule.value, &rule.pattern) {
        (Some(_), Some(_)) => {
            return Err(ConfigError::ConflictingMatcher { index, token_type })
        }
        (None, None) => return Err(ConfigError::MissingMatcher { index, token_type }),
        (Some(value), None) => {
            if value.is_empty() {
                return Err(ConfigError::EmptyLiteral { index, token_type });
            }
            Matcher::Literal(value.clone())
        }
        (None, Some(pattern)) => {
            // The bare pattern must parse on its own, otherwise an unbalanced
            // `)` could close the anchoring group below.
            let compiled = Regex::new(pattern)
                .and_then(|_| Regex::new(&format!(r"\A(?:{})", pattern)));
            match compiled {
                Ok(regex) => Matcher::Pattern(regex),
                Err(source) => {
                    return Err(ConfigError::InvalidPattern {
                        index,
                        token_type,
                        source,
                    })
                }
            }
        }
    };

    Ok(Rule {
        token_type,
        matcher,
        delimiter_checked,
    })
}

/// Builder for assembling a [`RuleTable`] in code.
///
/// Validation happens in [`build`](RuleTableBuilder::build), exactly as for a
/// deserialized document.
#[derive(Debug, Clone, Default)]
pub struct RuleTableBuilder {
    spec: LexerSpec,
}

impl RuleTableBuilder {
    pub fn literal(&mut self, token_type: &str, value: &str) -> &mut Self {
        self.spec.tokens.push(RuleSpec::literal(token_type, value));
        self
    }

    /// Add a literal that only matches when followed by a delimiter or end of input.
    pub fn guarded_literal(&mut self, token_type: &str, value: &str) -> &mut Self {
        self.spec
            .tokens
            .push(RuleSpec::literal(token_type, value).with_delimiter_check(true));
        self
    }

    pub fn pattern(&mut self, token_type: &str, pattern: &str) -> &mut Self {
        self.spec.tokens.push(RuleSpec::pattern(token_type, pattern));
        self
    }

    pub fn delimiters(&mut self, delimiters: &str) -> &mut Self {
        self.spec.delimiters = delimiters.to_string();
        self
    }

    /// Require a trailing delimiter for every literal rule of `token_type`.
    pub fn check_delimiters_for(&mut self, token_type: &str) -> &mut Self {
        self.spec
            .delimiter_check_for_types
            .push(token_type.to_string());
        self
    }

    pub fn scanners(&mut self, scanners: &[ScannerKind]) -> &mut Self {
        self.spec.scanners = Some(scanners.to_vec());
        self
    }

    pub fn quotes(&mut self, quotes: &str) -> &mut Self {
        self.spec.quotes = Some(quotes.to_string());
        self
    }

    pub fn build(&self) -> Result<RuleTable, ConfigError> {
        RuleTable::from_spec(&self.spec)
    }
}
