// rulelex-cli/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use rulelex_cli::cli::{tokenize_file, validate_files, TokenizeOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rulelex")]
#[command(about = "Tokenize text with a declarative lexer configuration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize an input file and print the tokens as JSON
    Tokenize {
        /// The file to tokenize
        input_file: PathBuf,
        /// YAML or JSON rule document
        lexer_config: PathBuf,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
        /// Fail if any character could not be matched
        #[arg(long)]
        strict: bool,
    },
    /// Check rule documents without tokenizing anything
    Validate {
        /// Rule documents to check
        #[arg(required = true, value_name = "LEXER_CONFIG")]
        configs: Vec<PathBuf>,
    },
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize {
            input_file,
            lexer_config,
            pretty,
            strict,
        } => tokenize_file(
            &input_file,
            &lexer_config,
            &TokenizeOptions { pretty, strict },
        ),
        Commands::Validate { configs } => validate_files(&configs),
    }
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
