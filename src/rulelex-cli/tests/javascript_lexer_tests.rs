// rulelex-cli/tests/javascript_lexer_tests.rs

use rulelex::Token;
use rulelex_cli::cli::tokenize::{scan_file, tokenize_to_json, TokenizeOptions};
use rulelex_cli::cli::validate::validate_rules;
use std::path::PathBuf;
use tempfile::TempDir;

fn javascript_rules() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("lexers")
        .join("javascript.yaml")
}

fn write_input(temp_dir: &TempDir, source: &str) -> PathBuf {
    let path = temp_dir.path().join("source.js");
    fs_err::write(&path, source).unwrap();
    path
}

#[test]
fn bundled_javascript_rules_are_valid() {
    validate_rules(&javascript_rules()).unwrap();
}

#[test]
fn tokenizes_javascript_source() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "function (test) { const a = 123; b = \"test\"}\n",
    );

    let scan = scan_file(&input, &javascript_rules()).unwrap();

    assert_eq!(
        scan.tokens,
        vec![
            Token::new("keyword", "function"),
            Token::new("paren", "("),
            Token::new("identifier", "test"),
            Token::new("paren", ")"),
            Token::new("brace", "{"),
            Token::new("keyword", "const"),
            Token::new("identifier", "a"),
            Token::new("operator", "="),
            Token::new("number", "123"),
            Token::new("punctuation", ";"),
            Token::new("identifier", "b"),
            Token::new("operator", "="),
            Token::new("string", "test"),
            Token::new("brace", "}"),
        ]
    );
    assert!(scan.is_clean());
}

#[test]
fn keywords_do_not_split_identifiers() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "constant iffy if(x === 1.5)");

    let scan = scan_file(&input, &javascript_rules()).unwrap();
    let pairs: Vec<(&str, &str)> = scan
        .tokens
        .iter()
        .map(|t| (t.token_type.as_str(), t.value.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("identifier", "constant"),
            ("identifier", "iffy"),
            ("keyword", "if"),
            ("paren", "("),
            ("identifier", "x"),
            ("operator", "==="),
            ("number", "1.5"),
            ("paren", ")"),
        ]
    );
}

#[test]
fn unmatched_characters_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "a # b");

    let scan = scan_file(&input, &javascript_rules()).unwrap();
    assert_eq!(scan.tokens.len(), 2);
    assert_eq!(scan.diagnostics[0].position(), 2);

    let strict = TokenizeOptions {
        strict: true,
        pretty: false,
    };
    assert!(tokenize_to_json(&input, &javascript_rules(), &strict).is_err());
}

#[test]
fn pretty_output_is_indented_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "( )");

    let options = TokenizeOptions {
        pretty: true,
        strict: true,
    };
    let json = tokenize_to_json(&input, &javascript_rules(), &options).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["type"], "paren");
    assert_eq!(parsed[1]["value"], ")");
    assert!(json.contains("\n  "));
}
