// rulelex-cli/src/lib.rs

pub mod cli;
pub mod config;

// Re-export commonly used types
pub use config::{RulesConfig, RulesFormat};
