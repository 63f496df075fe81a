// rulelex/src/scanner/lexer.rs

//! The matching engine: one step of tokenization at a given position.

use super::classes::{is_whitespace, scan_number, scan_quoted, scan_slice, scan_word, ScannedText};
use super::token::{Diagnostic, Token};
use crate::error::Result;
use crate::rules::{RuleTable, ScannerKind};

/// Outcome of a single engine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A token was recognized; scanning resumes at `next`.
    Token { token: Token, next: usize },
    /// Nothing recognized the character; it was skipped.
    Skipped { diagnostic: Diagnostic, next: usize },
    /// An empty quoted string starting at `position` was consumed without a token.
    Discarded { position: usize, next: usize },
    /// Only whitespace (or nothing) remained.
    End { position: usize },
}

impl Step {
    /// Position the following step should start from.
    pub fn next_position(&self) -> usize {
        match self {
            Step::Token { next, .. }
            | Step::Skipped { next, .. }
            | Step::Discarded { next, .. } => *next,
            Step::End { position } => *position,
        }
    }
}

/// Low-level lexer over a borrowed input and rule table.
///
/// The lexer holds no cursor of its own; every call to [`step`](Lexer::step)
/// is a pure function of the position it is given.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a> {
    input: &'a str,
    table: &'a RuleTable,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, table: &'a RuleTable) -> Self {
        Self { input, table }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Skip whitespace starting at `position`.
    ///
    /// Returns the position of the next significant character, or `None` at
    /// end of input. Positions that fall inside a multi-byte character are
    /// moved forward to the next character boundary.
    pub fn skip_whitespace(&self, mut position: usize) -> Option<usize> {
        while position < self.input.len() && !self.input.is_char_boundary(position) {
            position += 1;
        }
        let rest = self.input.get(position..)?;
        let offset = rest.find(|c: char| !is_whitespace(c))?;
        Some(position + offset)
    }

    /// Run one engine step at `position`.
    ///
    /// Rules are tried in table order, then the table's scanners, and the
    /// first match wins. When nothing matches, the character is skipped and
    /// reported as a diagnostic. An empty quoted string is consumed without a
    /// token. Only an unclosed string fails the step.
    pub fn step(&self, position: usize) -> Result<Step> {
        let Some(start) = self.skip_whitespace(position) else {
            return Ok(Step::End {
                position: self.input.len().max(position),
            });
        };
        let rest = &self.input[start..];

        if let Some((token, consumed)) = self.match_rules(rest) {
            log::debug!("rule match at {}: {}", start, token);
            return Ok(Step::Token {
                token,
                next: start + consumed,
            });
        }

        if let Some((kind, scanned)) = self.match_scanners(rest, start)? {
            let next = start + scanned.consumed;
            if scanned.value.is_empty() {
                log::debug!("empty {} at {} discarded", kind, start);
                return Ok(Step::Discarded {
                    position: start,
                    next,
                });
            }
            let token = Token::new(kind.token_type(), scanned.value);
            log::debug!("scanner match at {}: {}", start, token);
            return Ok(Step::Token { token, next });
        }

        // skip_whitespace stopped on a non-whitespace character, so rest is non-empty
        let character = rest.chars().next().unwrap_or_default();
        let diagnostic = Diagnostic::UnmatchedCharacter {
            position: start,
            character,
        };
        log::warn!("{}", diagnostic);
        Ok(Step::Skipped {
            diagnostic,
            next: start + character.len_utf8(),
        })
    }

    fn match_rules(&self, rest: &str) -> Option<(Token, usize)> {
        self.table.rules().iter().find_map(|rule| {
            rule.match_prefix(rest, self.table)
                .map(|text| (Token::new(rule.token_type(), text), text.len()))
        })
    }

    fn match_scanners<'i>(
        &self,
        rest: &'i str,
        position: usize,
    ) -> Result<Option<(ScannerKind, ScannedText<'i>)>> {
        for &kind in self.table.scanners() {
            let scanned: Option<ScannedText> = match kind {
                ScannerKind::String => scan_quoted(rest, self.table.quotes(), position)?,
                ScannerKind::Word => scan_word(rest),
                ScannerKind::Number => scan_number(rest),
                ScannerKind::Slice => scan_slice(rest, self.table.delimiters()),
            };
            if let Some(scanned) = scanned {
                return Ok(Some((kind, scanned)));
            }
        }
        Ok(None)
    }
}
