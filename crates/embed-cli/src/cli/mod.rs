//! CLI for the pretix-embed widget loader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pretix_embed_core::config;
use pretix_embed_core::widget::ListType;

use commands::{run_completions, run_load, run_resources, run_snippet, run_validate};

/// Top-level CLI for the pretix-embed widget loader.
#[derive(Debug, Parser)]
#[command(name = "pretix-embed")]
#[command(about = "pretix-embed: ticket-shop widget loader and embed generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether an event URL is acceptable for embedding.
    Validate {
        /// Pretix organizer or event URL (HTTPS).
        url: String,
    },

    /// Print the stylesheet/script URLs derived from an event URL.
    Resources {
        /// Pretix organizer or event URL (HTTPS).
        url: String,
        /// Emit JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },

    /// Fetch both widget resources and report the resulting widget state.
    Load {
        /// Pretix organizer or event URL (HTTPS).
        url: String,
        /// Mount N widget instances sharing one loader (exercises
        /// deduplication; resources are still fetched once).
        #[arg(long, default_value = "1", value_name = "N")]
        instances: usize,
    },

    /// Emit embed markup for a page (an error panel when the URL is invalid).
    Snippet {
        /// Pretix organizer or event URL (HTTPS).
        url: String,
        /// Specific sub-event id for event series.
        #[arg(long)]
        subevent: Option<String>,
        /// Display type: list, calendar, or week (default from config).
        #[arg(long, value_name = "TYPE")]
        list_type: Option<ListType>,
        /// Tell the widget to skip SSL verification of the shop.
        #[arg(long)]
        skip_ssl_check: bool,
        /// Always open the ticket shop in a new tab instead of an iframe.
        #[arg(long)]
        disable_iframe: bool,
    },

    /// Generate a shell completion script on stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Validate { url } => run_validate(&url)?,
            CliCommand::Resources { url, json } => run_resources(&url, json)?,
            CliCommand::Load { url, instances } => run_load(&cfg, &url, instances).await?,
            CliCommand::Snippet {
                url,
                subevent,
                list_type,
                skip_ssl_check,
                disable_iframe,
            } => run_snippet(&cfg, &url, subevent, list_type, skip_ssl_check, disable_iframe)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
