mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, profiles, Context};
use crate::error::{exit_code_for, report_error};
use roster_cms::{endpoint_url, GraphqlClient, ProfilesApi};
use roster_config as config;

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "roster CLI")]
struct Cli {
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[arg(long, global = true)]
    preview: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    List(profiles::ListArgs),
    Show(profiles::ShowArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        json,
        verbose,
        preview,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load().with_context(|| "load configuration")?;
            let endpoint =
                endpoint_url(&app_config.cms.space_id, &app_config.cms.environment)?;
            if verbose {
                debug!(endpoint = %endpoint, preview, "cms endpoint resolved");
            }
            let token = app_config
                .cms
                .bearer_token(preview)
                .with_context(|| "select access token")?;
            let client = GraphqlClient::new(endpoint, token)?;
            let api = ProfilesApi::new(client);

            let ctx = Context { api: &api, json };

            match command {
                Command::List(args) => profiles::list_profiles(&ctx, args),
                Command::Show(args) => profiles::show_profile(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before client construction")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
