//! CLI for the desvg extraction tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use desvg_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_extract, run_scan};

/// Top-level CLI for the desvg extraction tool.
#[derive(Debug, Parser)]
#[command(name = "desvg")]
#[command(about = "desvg: extract and decode SVG images embedded in CSS stylesheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract embedded SVGs from a stylesheet and write each as a standalone file.
    Extract {
        /// Path to the input CSS stylesheet.
        stylesheet: PathBuf,

        /// Write artifacts here instead of the default directory next to the input.
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Base name for artifact stems (default: the input file stem).
        #[arg(long, value_name = "NAME")]
        base_name: Option<String>,

        /// Skip the `.txt` twin normally written next to each `.svg`.
        #[arg(long)]
        no_txt: bool,
    },

    /// List embedded SVG payloads without writing any files.
    Scan {
        /// Path to the input CSS stylesheet.
        stylesheet: PathBuf,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell: bash, elvish, fish, powershell (pwsh), or zsh.
        shell: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract {
                stylesheet,
                out_dir,
                base_name,
                no_txt,
            } => run_extract(&cfg, &stylesheet, out_dir, base_name, no_txt)?,
            CliCommand::Scan { stylesheet } => run_scan(&stylesheet)?,
            CliCommand::Completions { shell } => run_completions(&shell)?,
        }

        Ok(())
    }
}
