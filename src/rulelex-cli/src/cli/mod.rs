// rulelex-cli/src/cli/mod.rs

pub mod tokenize;
pub mod validate;

pub use tokenize::{tokenize_file, TokenizeOptions};
pub use validate::validate_files;
