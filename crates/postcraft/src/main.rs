//! Postcraft CLI binary.
//!
//! - `submit` composes a post and sends it to a webhook
//! - `generate` asks the AI endpoint for a caption and hashtags

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate, run_submit};

    // Pick up POSTCRAFT__* variables from a local .env, if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    postcraft::init_logging(cli.verbose, cli.json_logs)?;

    let config = postcraft::PostcraftConfig::load(cli.config.as_deref())?;

    let succeeded = match cli.command {
        Commands::Submit(args) => run_submit(args, &config).await?,
        Commands::Generate { prompt } => run_generate(&prompt, &config).await?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
