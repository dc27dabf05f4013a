//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use postcraft::{Layout, Platform};
use std::path::PathBuf;

/// Postcraft - compose a social media post and hand it to a webhook
#[derive(Parser, Debug)]
#[command(name = "postcraft")]
#[command(about = "Compose a social media post and hand it to a webhook", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, layered above the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a post and send it to a webhook
    Submit(SubmitArgs),

    /// Generate a caption and hashtags from a prompt
    Generate {
        /// What the post should be about
        #[arg(long)]
        prompt: String,
    },
}

/// Post fields for `submit`.
///
/// Every field is optional on the command line so that all validation
/// errors can be reported together.
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// Post title (1-100 characters)
    #[arg(long, default_value = "")]
    pub title: String,

    /// Post caption (1-2200 characters)
    #[arg(long, default_value = "")]
    pub caption: String,

    /// Hashtags, free-form
    #[arg(long, default_value = "")]
    pub hashtags: String,

    /// Target platform (facebook, instagram, linkedin); repeatable
    #[arg(long = "platform")]
    pub platforms: Vec<Platform>,

    /// Publish time, RFC 3339 or YYYY-MM-DDTHH:MM in local time
    #[arg(long, default_value = "")]
    pub schedule: String,

    /// Webhook URL; falls back to submission.webhook_url from configuration
    #[arg(long)]
    pub webhook: Option<String>,

    /// Image to attach (JPEG or PNG, at most 10 MiB, up to 4); repeatable
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,

    /// Fill caption and hashtags from this AI prompt before submitting
    #[arg(long)]
    pub prompt: Option<String>,

    /// Override the configured layout
    #[arg(long)]
    pub layout: Option<Layout>,

    /// Validate and show the request without sending it
    #[arg(long)]
    pub dry_run: bool,
}
