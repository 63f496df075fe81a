// rulelex/src/scanner/classes.rs

//! Character-class scanners used when no rule matches.
//!
//! Each scanner looks at `rest`, the input from the scan position onwards,
//! and reports how much of it belongs to its token. Classification is ASCII
//! only.

use crate::error::{LexError, Result};

/// A token recognized by one of the scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedText<'i> {
    /// Token value
    pub value: &'i str,
    /// Bytes consumed from the scan position, including any quotes
    pub consumed: usize,
}

impl<'i> ScannedText<'i> {
    fn run(value: &'i str) -> Self {
        Self {
            value,
            consumed: value.len(),
        }
    }
}

/// Whitespace skipped between tokens.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Maximal run of ASCII letters.
pub fn scan_word(rest: &str) -> Option<ScannedText<'_>> {
    leading_run(rest, |c| c.is_ascii_alphabetic())
}

/// Maximal run of ASCII digits.
pub fn scan_number(rest: &str) -> Option<ScannedText<'_>> {
    leading_run(rest, |c| c.is_ascii_digit())
}

/// Maximal run of characters that are neither whitespace nor delimiters.
pub fn scan_slice<'i>(rest: &'i str, delimiters: &[char]) -> Option<ScannedText<'i>> {
    leading_run(rest, |c| !is_whitespace(c) && !delimiters.contains(&c))
}

/// Quote-delimited string starting at the scan position.
///
/// Returns `Ok(None)` when the first character is not one of `quotes`. The
/// value excludes both quotes; there are no escapes, so the first matching
/// quote closes the string. `position` is only used to report an unclosed
/// string.
pub fn scan_quoted<'i>(
    rest: &'i str,
    quotes: &[char],
    position: usize,
) -> Result<Option<ScannedText<'i>>> {
    let Some(quote) = rest.chars().next().filter(|c| quotes.contains(c)) else {
        return Ok(None);
    };

    let open = quote.len_utf8();
    match rest[open..].find(quote) {
        Some(len) => Ok(Some(ScannedText {
            value: &rest[open..open + len],
            consumed: open + len + open,
        })),
        None => Err(LexError::unclosed_string(quote, position)),
    }
}

fn leading_run(rest: &str, keep: impl Fn(char) -> bool) -> Option<ScannedText<'_>> {
    let end = rest.find(|c: char| !keep(c)).unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(ScannedText::run(&rest[..end]))
    }
}
