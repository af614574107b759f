// crates/powerlink-rs-cli/src/cli.rs

//! Command-line interface definition.

use crate::logging::LogConfig;
use crate::messages::Language;
use crate::registry::DEFAULT_TABLE_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Front-end for POWERLINK network configuration projects
#[derive(Parser, Debug)]
#[command(name = "powerlink-cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report messages in German
    #[arg(short = 'g', long = "german", global = true)]
    pub german: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to this file
    #[arg(short = 'l', long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Error-code table used to translate error codes
    #[arg(long, global = true, default_value = DEFAULT_TABLE_PATH)]
    pub error_table: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Check a project file and its output directory
    Check {
        /// Project XML file
        #[arg(short, long)]
        project: PathBuf,

        /// Output directory for generated configuration files
        #[arg(short, long)]
        output: PathBuf,

        /// Create the output directory if it does not exist
        #[arg(long)]
        create_output: bool,

        /// XSD schema the project is validated against
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },
    /// Show the tool code and description of a component error code
    Explain {
        /// Component name (e.g. "library" or "cli")
        component: String,

        /// Original decimal error code
        code: u32,
    },
    /// List the loaded error-code table
    List {
        /// Only list this component
        component: Option<String>,
    },
}

impl Cli {
    pub fn language(&self) -> Language {
        if self.german {
            Language::German
        } else {
            Language::English
        }
    }

    pub fn log_config(&self) -> LogConfig {
        let config = if self.verbose {
            LogConfig::verbose()
        } else {
            LogConfig::default()
        };
        config.with_file(self.log_file.clone())
    }
}
