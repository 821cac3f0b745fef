//! CLI for urlpeek.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use urlpeek_core::config;

use commands::{run_analyze, run_batch, run_breakdown, run_build, run_compare, run_completions};

/// Top-level CLI for urlpeek.
#[derive(Debug, Parser)]
#[command(name = "urlpeek")]
#[command(about = "urlpeek: unwrap, resolve and inspect URLs and their query parameters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format for commands that can export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Unwrap, follow redirects and list query parameters of a URL.
    Analyze {
        /// URL to analyze (wrapped, shortened or plain).
        url: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Do not follow HTTP redirects (overrides config).
        #[arg(long)]
        no_follow: bool,
    },

    /// Compare two URLs component by component, and their analyzed parameters.
    Compare {
        first: String,
        second: String,
        /// Do not follow HTTP redirects (overrides config).
        #[arg(long)]
        no_follow: bool,
    },

    /// Break a URL into protocol, host, port, path, query and hash.
    Breakdown { url: String },

    /// Assemble a URL from parts.
    Build {
        /// Hostname (required).
        #[arg(long)]
        host: String,
        #[arg(long, default_value = "https")]
        scheme: String,
        #[arg(long)]
        port: Option<u16>,
        #[arg(long, default_value = "")]
        path: String,
        /// Query parameter as key=value; repeatable.
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
        #[arg(long, default_value = "")]
        fragment: String,
    },

    /// Summarize many URLs, one per line (raw parsing only).
    Batch {
        /// File with one URL per line; `-` or omitted reads stdin.
        path: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
    Ok((k.to_string(), v.to_string()))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Analyze {
                url,
                format,
                no_follow,
            } => {
                let cfg = load_config(no_follow)?;
                run_analyze(&cfg, &url, format).await?
            }
            CliCommand::Compare {
                first,
                second,
                no_follow,
            } => {
                let cfg = load_config(no_follow)?;
                run_compare(&cfg, &first, &second).await?
            }
            CliCommand::Breakdown { url } => run_breakdown(&url)?,
            CliCommand::Build {
                host,
                scheme,
                port,
                path,
                params,
                fragment,
            } => run_build(urlpeek_core::url_model::UrlParts {
                scheme,
                host,
                port,
                path,
                params,
                fragment,
            })?,
            CliCommand::Batch { path, format } => run_batch(path.as_deref(), format)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

fn load_config(no_follow: bool) -> Result<config::UrlpeekConfig> {
    let mut cfg = config::load_or_init().context("loading config")?;
    tracing::debug!("loaded config: {:?}", cfg);
    if no_follow {
        cfg.follow_redirects = false;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests;
