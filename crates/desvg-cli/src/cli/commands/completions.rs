//! Shell completion script generation.

use anyhow::Result;
use clap::CommandFactory;

/// Write a completion script for `shell` to stdout.
pub fn run_completions(shell: &str) -> Result<()> {
    let shell = match shell.to_lowercase().as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        other => anyhow::bail!(
            "unknown shell: {other} (supported: bash, elvish, fish, powershell, zsh)"
        ),
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "desvg", &mut std::io::stdout().lock());
    Ok(())
}
