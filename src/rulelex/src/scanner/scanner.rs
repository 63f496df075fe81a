// rulelex/src/scanner/scanner.rs

//! Driver loop that runs the lexer over a whole input.

use super::lexer::{Lexer, Step};
use super::token::Scan;
use crate::error::Result;
use crate::rules::RuleTable;

/// Tokenizes a complete input against a rule table.
pub struct Scanner<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str, table: &'a RuleTable) -> Self {
        Self {
            lexer: Lexer::new(input, table),
        }
    }

    /// Scan the whole input, collecting tokens and diagnostics in order.
    ///
    /// Stops at the first fatal error; tokens produced before it are discarded.
    pub fn scan_all(&self) -> Result<Scan> {
        let mut scan = Scan::default();
        for step in self.steps() {
            match step? {
                Step::Token { token, .. } => scan.tokens.push(token),
                Step::Skipped { diagnostic, .. } => scan.diagnostics.push(diagnostic),
                Step::Discarded { .. } | Step::End { .. } => {}
            }
        }

        log::debug!(
            "scanned {} bytes into {} tokens ({} diagnostics)",
            self.lexer.input().len(),
            scan.tokens.len(),
            scan.diagnostics.len()
        );
        Ok(scan)
    }

    /// Iterate over engine steps from the start of the input.
    ///
    /// The iterator yields every step up to a single `End` (or the first
    /// error), and is exhausted afterwards.
    pub fn steps(&self) -> Steps<'a> {
        Steps {
            lexer: self.lexer,
            position: 0,
            done: false,
        }
    }
}

/// Iterator over the steps of a scan. See [`Scanner::steps`].
pub struct Steps<'a> {
    lexer: Lexer<'a>,
    position: usize,
    done: bool,
}

impl Iterator for Steps<'_> {
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let step = match self.lexer.step(self.position) {
            Ok(step) => step,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };

        match step {
            Step::End { .. } => self.done = true,
            _ => {
                let next = step.next_position();
                debug_assert!(next > self.position, "lexer step made no progress");
                self.position = next;
            }
        }
        Some(Ok(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;
    use crate::scanner::{Diagnostic, Token};

    fn js_like() -> RuleTable {
        RuleTable::builder()
            .guarded_literal("keyword", "function")
            .guarded_literal("keyword", "const")
            .literal("paren", "(")
            .literal("paren", ")")
            .literal("brace", "{")
            .literal("brace", "}")
            .literal("semi", ";")
            .literal("op", "==")
            .literal("op", "=")
            .delimiters(" (){};=\n\t")
            .build()
            .unwrap()
    }

    #[test]
    fn test_scan_function_source() {
        let table = js_like();
        let input = "function (test) { const a = 123; b = \"test\"}";
        let scan = Scanner::new(input, &table).scan_all().unwrap();

        let expected = vec![
            Token::new("keyword", "function"),
            Token::new("paren", "("),
            Token::new("name", "test"),
            Token::new("paren", ")"),
            Token::new("brace", "{"),
            Token::new("keyword", "const"),
            Token::new("name", "a"),
            Token::new("op", "="),
            Token::new("number", "123"),
            Token::new("semi", ";"),
            Token::new("name", "b"),
            Token::new("op", "="),
            Token::new("string", "test"),
            Token::new("brace", "}"),
        ];
        assert_eq!(scan.tokens, expected);
        assert!(scan.is_clean());
    }

    #[test]
    fn test_scan_collects_diagnostics_in_order() {
        let table = js_like();
        let scan = Scanner::new("a @ b # c", &table).scan_all().unwrap();

        assert_eq!(scan.types().collect::<Vec<_>>(), vec!["name"; 3]);
        assert_eq!(
            scan.diagnostics,
            vec![
                Diagnostic::UnmatchedCharacter {
                    position: 2,
                    character: '@'
                },
                Diagnostic::UnmatchedCharacter {
                    position: 6,
                    character: '#'
                },
            ]
        );
    }

    #[test]
    fn test_steps_end_once() {
        let table = js_like();
        let scanner = Scanner::new("( )  ", &table);
        let steps: Vec<Step> = scanner.steps().collect::<Result<_>>().unwrap();

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2], Step::End { position: 5 });
    }

    #[test]
    fn test_steps_stop_after_error() {
        let table = js_like();
        let scanner = Scanner::new("( 'open", &table);
        let mut steps = scanner.steps();

        assert!(matches!(steps.next(), Some(Ok(Step::Token { .. }))));
        assert!(matches!(
            steps.next(),
            Some(Err(LexError::UnclosedString { .. }))
        ));
        assert!(steps.next().is_none());
    }

    #[test]
    fn test_empty_quoted_string_emits_no_token() {
        let table = js_like();
        let scan = Scanner::new("b = \"\" ; ''", &table).scan_all().unwrap();

        assert_eq!(
            scan.tokens,
            vec![
                Token::new("name", "b"),
                Token::new("op", "="),
                Token::new("semi", ";"),
            ]
        );
        assert!(scan.is_clean());
        assert!(scan.tokens.iter().all(|token| !token.value.is_empty()));
    }

    #[test]
    fn test_empty_input() {
        let table = js_like();
        let scan = Scanner::new("", &table).scan_all().unwrap();
        assert!(scan.tokens.is_empty());
        assert!(scan.is_clean());
    }
}
