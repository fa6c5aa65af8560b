//! CLI command definitions and parsing
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mindweave",
    version,
    about = "Offline mind-map generation from extracted document text",
    long_about = "Mindweave turns one plain-text document into a mind-map graph using \
                  entirely local statistical NLP: TF-IDF keyword extraction, keyphrase \
                  scoring, co-occurrence clustering, and radial layout. No network, no \
                  model downloads, no persistence."
)]
pub struct Cli {
    /// Global config file path (defaults to ~/.config/mindweave/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a mind map from a text file
    Generate {
        /// Path to the extracted document text
        input: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the layout fallback jitter (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Inspect a document without generating a map
    Analyze {
        /// Path to the extracted document text
        input: PathBuf,

        /// Maximum keywords and keyphrases to display
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Validate configuration file
    Validate {
        /// Path to config file (defaults to standard location)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
