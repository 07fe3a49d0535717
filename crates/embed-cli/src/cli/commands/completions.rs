//! `pretix-embed completions <shell>` – shell completion script.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

pub fn run_completions(shell: Shell) -> Result<()> {
    let mut cmd = crate::cli::Cli::command();
    clap_complete::generate(shell, &mut cmd, "pretix-embed", &mut std::io::stdout());
    Ok(())
}
