// rulelex-cli/src/cli/validate.rs

use crate::config::RulesConfig;
use std::path::{Path, PathBuf};

/// Load and compile one rule document.
pub fn validate_rules(path: &Path) -> anyhow::Result<()> {
    RulesConfig::try_from(path)?.compile()?;
    Ok(())
}

/// Validate every document, returning the ones that failed with their errors.
pub fn collect_failures(paths: &[PathBuf]) -> Vec<(PathBuf, anyhow::Error)> {
    paths
        .iter()
        .filter_map(|path| validate_rules(path).err().map(|err| (path.clone(), err)))
        .collect()
}

/// Entry point of the `validate` command.
pub fn validate_files(paths: &[PathBuf]) -> anyhow::Result<()> {
    let failures = collect_failures(paths);

    for path in paths {
        match failures.iter().find(|(failed, _)| failed == path) {
            Some((_, err)) => println!("  ✗ {}: {:#}", path.display(), err),
            None => println!("  ✓ {}", path.display()),
        }
    }

    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} rule document(s) failed validation",
            failures.len(),
            paths.len()
        );
    }
    Ok(())
}
