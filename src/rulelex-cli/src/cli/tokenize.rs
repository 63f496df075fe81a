// rulelex-cli/src/cli/tokenize.rs

use crate::config::RulesConfig;
use anyhow::Context;
use rulelex::Scan;
use std::path::Path;

/// Output switches for the `tokenize` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizeOptions {
    /// Indent the JSON output
    pub pretty: bool,
    /// Fail when any character could not be matched
    pub strict: bool,
}

/// Tokenize `input_path` with the rules in `rules_path`.
pub fn scan_file(input_path: &Path, rules_path: &Path) -> anyhow::Result<Scan> {
    let table = RulesConfig::try_from(rules_path)?.compile()?;

    let input = fs_err::read_to_string(input_path)
        .context(format!("Error reading {} to string.", input_path.display()))?;

    let scan = rulelex::tokenize(&input, &table)
        .context(format!("Error tokenizing {}", input_path.display()))?;
    log::info!(
        "Tokenized {}: {} tokens, {} unmatched characters",
        input_path.display(),
        scan.tokens.len(),
        scan.diagnostics.len()
    );
    Ok(scan)
}

/// Tokenize a file and render the tokens as a JSON array.
pub fn tokenize_to_json(
    input_path: &Path,
    rules_path: &Path,
    options: &TokenizeOptions,
) -> anyhow::Result<String> {
    let scan = scan_file(input_path, rules_path)?;

    if options.strict && !scan.is_clean() {
        let details: Vec<String> = scan.diagnostics.iter().map(|d| d.to_string()).collect();
        anyhow::bail!(
            "{} unmatched character(s) in {}:\n  {}",
            scan.diagnostics.len(),
            input_path.display(),
            details.join("\n  ")
        );
    }

    let json = if options.pretty {
        rulelex::to_json_pretty(&scan.tokens)?
    } else {
        rulelex::to_json(&scan.tokens)?
    };
    Ok(json)
}

/// Entry point of the `tokenize` command: print the tokens to stdout.
pub fn tokenize_file(
    input_path: &Path,
    rules_path: &Path,
    options: &TokenizeOptions,
) -> anyhow::Result<()> {
    let json = tokenize_to_json(input_path, rules_path, options)?;
    println!("{}", json);
    Ok(())
}
