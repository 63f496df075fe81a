// rulelex-cli/src/config/mod.rs

use anyhow::Context;
use rulelex::{LexerSpec, RuleTable};
use std::path::{Path, PathBuf};

/// File formats a rule document can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesFormat {
    Yaml,
    Json,
}

impl RulesFormat {
    /// Pick the format from the file extension. Anything that is not `.json`
    /// is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RulesFormat::Json,
            _ => RulesFormat::Yaml,
        }
    }
}

/// A rule document loaded from disk.
#[derive(Debug, Clone)]
pub struct RulesConfig {
    path: PathBuf,
    spec: LexerSpec,
}

impl RulesConfig {
    pub fn parse_spec(content: &str, format: RulesFormat) -> anyhow::Result<LexerSpec> {
        let spec = match format {
            RulesFormat::Yaml => serde_saphyr::from_str::<LexerSpec>(content)
                .context("Error parsing YAML rule document")?,
            RulesFormat::Json => serde_json::from_str::<LexerSpec>(content)
                .context("Error parsing JSON rule document")?,
        };
        Ok(spec)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn spec(&self) -> &LexerSpec {
        &self.spec
    }

    /// Validate the document and build the rule table.
    pub fn compile(&self) -> anyhow::Result<RuleTable> {
        let table = RuleTable::from_spec(&self.spec)
            .context(format!("Invalid rule document {}", self.path.display()))?;
        log::info!(
            "Loaded {} rules from {}",
            table.rules().len(),
            self.path.display()
        );
        Ok(table)
    }
}

impl TryFrom<&Path> for RulesConfig {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs_err::read_to_string(path)
            .context(format!("Error reading {} to string.", path.display()))?;

        let spec = Self::parse_spec(&content, RulesFormat::from_path(path))
            .context(format!("Error loading rule document: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            spec,
        })
    }
}

impl TryFrom<&PathBuf> for RulesConfig {
    type Error = anyhow::Error;

    fn try_from(path: &PathBuf) -> anyhow::Result<Self> {
        Self::try_from(path.as_path())
    }
}
