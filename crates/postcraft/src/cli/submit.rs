//! `submit` command handler.

use super::commands::SubmitArgs;
use super::render::{
    render_add_outcome, render_draft, render_field_errors, render_notification, render_payload,
};
use postcraft::{
    AddOutcome, AssistOutcome, CandidateFile, Composer, FormConfig, MultipartPayload,
    NotificationLevel, PostcraftConfig, PostcraftResult, ReqwestTransport, SubmissionOutcome,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Fill a form from `args`, optionally run AI assist, then validate and send.
///
/// Returns `false` when the post was not delivered.
#[instrument(skip_all, fields(images = args.images.len(), dry_run = args.dry_run))]
pub async fn run_submit(args: SubmitArgs, config: &PostcraftConfig) -> PostcraftResult<bool> {
    let form_config = FormConfig::builder()
        .ai_assist(config.form.ai_assist())
        .layout(args.layout.unwrap_or(config.form.layout()))
        .build()
        .map_err(|e| postcraft::ConfigError::new(e.to_string()))?;
    let layout = form_config.layout();

    let composer = Composer::new(
        form_config,
        Arc::new(ReqwestTransport::new()),
        config.assist_endpoint()?,
    )?;

    let webhook = args
        .webhook
        .or_else(|| config.submission.webhook_url.clone())
        .unwrap_or_default();

    let batch = args.images.len();
    let (existing, has_room) = composer
        .with_form(|form| {
            form.set_title(args.title);
            form.set_caption(args.caption);
            form.set_hashtags(args.hashtags);
            form.set_platforms(args.platforms);
            form.set_scheduled_at(args.schedule);
            form.set_webhook_url(webhook);
            let attachments = form.attachments();
            (attachments.len(), attachments.has_room_for(batch))
        })
        .await;

    // Files are only read once the batch is known to fit
    let added = if has_room {
        let candidates = args
            .images
            .iter()
            .map(CandidateFile::read)
            .collect::<Result<Vec<_>, _>>()?;
        composer
            .with_form(|form| form.attachments_mut().add(candidates))
            .await
    } else {
        AddOutcome::TooMany { existing, batch }
    };
    if let Some(warning) = render_add_outcome(&added) {
        eprintln!("warning: {}", warning);
    }

    if let Some(prompt) = args.prompt {
        composer
            .with_form(|form| {
                form.open_assist();
                form.set_prompt(prompt);
            })
            .await;

        let outcome = composer.generate().await;
        if let Some(notification) = outcome.notification() {
            eprintln!("{}", render_notification(&notification));
        }
        if !matches!(outcome, AssistOutcome::Generated(_)) {
            return Ok(false);
        }
    }

    if args.dry_run {
        return Ok(composer
            .with_form(|form| match form.validate() {
                Ok(draft) => {
                    print!("{}", render_draft(form, layout));
                    println!("POST {}", draft.webhook_url());
                    print!("{}", render_payload(&MultipartPayload::from_draft(&draft)));
                    true
                }
                Err(errors) => {
                    eprint!("{}", render_field_errors(&errors));
                    false
                }
            })
            .await);
    }

    let outcome = composer.submit().await;
    debug!(submitted = outcome.is_submitted(), "Submit finished");

    match &outcome {
        SubmissionOutcome::Invalid(errors) => eprint!("{}", render_field_errors(errors)),
        SubmissionOutcome::Failed(error) => debug!("Submission error: {}", error),
        SubmissionOutcome::Submitted | SubmissionOutcome::Busy => {}
    }

    if let Some(notification) = outcome.notification() {
        let line = render_notification(&notification);
        if *notification.level() == NotificationLevel::Success {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }

    Ok(outcome.is_submitted())
}
