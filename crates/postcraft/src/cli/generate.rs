//! `generate` command handler.

use super::render::render_notification;
use postcraft::{
    AssistOutcome, Composer, ConfigError, PostcraftConfig, PostcraftResult, ReqwestTransport,
};
use std::sync::Arc;
use tracing::instrument;

/// Ask the AI endpoint for a caption and hashtags and print them.
///
/// Returns `false` when nothing was generated.
#[instrument(skip_all)]
pub async fn run_generate(prompt: &str, config: &PostcraftConfig) -> PostcraftResult<bool> {
    if !config.form.ai_assist() {
        return Err(ConfigError::new(
            "AI assist is disabled; set form.ai_assist = true and assist.endpoint",
        )
        .into());
    }

    let composer = Composer::new(
        config.form,
        Arc::new(ReqwestTransport::new()),
        config.assist_endpoint()?,
    )?;

    composer
        .with_form(|form| {
            form.open_assist();
            form.set_prompt(prompt);
        })
        .await;

    let outcome = composer.generate().await;
    if let AssistOutcome::Generated(content) = &outcome {
        println!("Caption:  {}", content.caption());
        println!("Hashtags: {}", content.hashtags());
    } else if let Some(notification) = outcome.notification() {
        eprintln!("{}", render_notification(&notification));
    }

    Ok(outcome.is_generated())
}
