use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod config;
mod replay;

#[derive(Parser, Debug)]
#[command(name = "site-tools", about = "Developer tools for the portfolio navigation layer")]
struct Cli {
    /// Settings file; defaults to ./site.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON event script against a headless page and print the result.
    Replay {
        script: PathBuf,
        /// Print a page snapshot after every step.
        #[arg(long)]
        trace: bool,
    },
    /// Print the resolved settings as TOML.
    CheckConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = config::load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Replay { script, trace } => {
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read script '{}'", script.display()))?;
            let parsed = replay::parse_script(&raw)
                .with_context(|| format!("invalid script '{}'", script.display()))?;
            tracing::info!(steps = parsed.steps.len(), "replaying script");

            let mut snapshot_error = None;
            let session = replay::run(settings, parsed, |index, session| {
                if !trace || snapshot_error.is_some() {
                    return;
                }
                match serde_json::to_string(session.page()) {
                    Ok(line) => println!("step {index}: {line}"),
                    Err(err) => snapshot_error = Some(err),
                }
            });
            if let Some(err) = snapshot_error {
                return Err(err).context("failed to encode page snapshot");
            }

            println!("{}", serde_json::to_string_pretty(session.page())?);
        }
        Command::CheckConfig => {
            println!("{}", toml::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
