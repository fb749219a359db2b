use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::models::CaseStyle;

/// Convert identifiers and text between kebab-case, camelCase, dot.case and snake_case
#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the given inputs, or stdin line by line when none are given
    Convert {
        /// Target case style (overrides the config file)
        #[arg(short, long, value_enum)]
        style: Option<CaseStyle>,

        /// Path to the configuration file [default: recase.toml if present]
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat each input as a JSON value that must be a string
        #[arg(long, default_value = "false")]
        json: bool,

        /// Enable verbose output
        #[arg(short, long, default_value = "false")]
        verbose: bool,

        /// Text to convert
        inputs: Vec<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(short, long, default_value = "false")]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
