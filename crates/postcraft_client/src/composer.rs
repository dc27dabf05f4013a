//! Form controller wiring state to the dispatchers.

use crate::{
    AssistDispatcher, AssistOutcome, AssistState, SubmissionDispatcher, SubmissionOutcome,
    SubmissionState, Transport,
};
use postcraft_core::{FormConfig, PostForm};
use postcraft_error::ConfigError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// One composer instance: its form state plus single-flight dispatchers.
///
/// Submission runs `Idle -> Submitting -> Idle`, resetting the form only on
/// success. Generation runs `Idle -> Generating -> Idle`, writing caption
/// and hashtags only on success. A second call of either kind while one is
/// in flight returns `Busy` without sending anything.
///
/// The form lock is never held across a network call, so edits remain
/// possible while a request is in flight.
#[derive(Debug)]
pub struct Composer<T: Transport> {
    form: Mutex<PostForm>,
    submission: SubmissionDispatcher<T>,
    assist: Option<AssistDispatcher<T>>,
}

impl<T: Transport> Composer<T> {
    /// Create a composer with an empty form.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` enables AI assist but no endpoint is given.
    pub fn new(
        config: FormConfig,
        transport: Arc<T>,
        assist_endpoint: Option<Url>,
    ) -> Result<Self, ConfigError> {
        let assist = match (config.ai_assist(), assist_endpoint) {
            (true, Some(endpoint)) => Some(AssistDispatcher::new(transport.clone(), endpoint)),
            (true, None) => {
                return Err(ConfigError::new(
                    "AI assist is enabled but no assist endpoint is configured",
                ));
            }
            (false, _) => None,
        };

        Ok(Self {
            form: Mutex::new(PostForm::new(config)),
            submission: SubmissionDispatcher::new(transport),
            assist,
        })
    }

    /// Run `edit` against the form state.
    pub async fn with_form<R>(&self, edit: impl FnOnce(&mut PostForm) -> R) -> R {
        let mut form = self.form.lock().await;
        edit(&mut form)
    }

    /// Submission state.
    pub fn submission_state(&self) -> SubmissionState {
        self.submission.state()
    }

    /// Generation state; always `Idle` when AI assist is off.
    pub fn assist_state(&self) -> AssistState {
        self.assist
            .as_ref()
            .map(AssistDispatcher::state)
            .unwrap_or(AssistState::Idle)
    }

    /// Whether this instance offers AI assist.
    pub fn has_assist(&self) -> bool {
        self.assist.is_some()
    }

    /// Validate the form and send it to its webhook.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmissionOutcome {
        let Some(_guard) = self.submission.begin() else {
            debug!("Submission already in flight");
            return SubmissionOutcome::Busy;
        };

        let validated = match self.form.lock().await.validate() {
            Ok(validated) => validated,
            Err(errors) => return SubmissionOutcome::Invalid(errors),
        };

        match self.submission.send(&validated).await {
            Ok(()) => {
                self.form.lock().await.reset();
                info!("Submission succeeded, form reset");
                SubmissionOutcome::Submitted
            }
            Err(e) => {
                warn!("Submission failed, form kept: {}", e);
                SubmissionOutcome::Failed(e)
            }
        }
    }

    /// Send the assist dialog's prompt and fill caption and hashtags.
    #[instrument(skip(self))]
    pub async fn generate(&self) -> AssistOutcome {
        let Some(assist) = self.assist.as_ref() else {
            return AssistOutcome::Unavailable;
        };

        let Some(_guard) = assist.begin() else {
            debug!("Generation already in flight");
            return AssistOutcome::Busy;
        };

        let prompt = {
            let mut form = self.form.lock().await;
            form.open_assist();
            form.assist().prompt().to_string()
        };
        if prompt.trim().is_empty() {
            return AssistOutcome::EmptyPrompt;
        }

        match assist.generate(&prompt).await {
            Ok(content) => {
                self.form
                    .lock()
                    .await
                    .apply_generated(content.caption().as_str(), content.hashtags().as_str());
                AssistOutcome::Generated(content)
            }
            Err(e) => {
                warn!("Generation failed, prompt kept: {}", e);
                AssistOutcome::Failed(e)
            }
        }
    }
}
