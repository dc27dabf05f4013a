//! AI-assisted caption and hashtag generation.

use crate::{FlightFlag, FlightGuard, Notification, Transport};
use postcraft_error::{HttpError, HttpErrorKind};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use url::Url;

/// Whether a generation request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AssistState {
    /// Ready to generate
    Idle,
    /// Waiting on the AI endpoint
    Generating,
}

/// Text returned by the AI endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct GeneratedContent {
    /// Caption text, empty if the response had none
    caption: String,
    /// Hashtags, empty if the response had none
    hashtags: String,
}

impl GeneratedContent {
    /// Create generated content.
    pub fn new(caption: impl Into<String>, hashtags: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            hashtags: hashtags.into(),
        }
    }

    /// Pull caption and hashtags out of a response document.
    ///
    /// The caption is read from `caption`, falling back to `content`.
    /// `hashtags` may be a string or an array of strings (joined with
    /// spaces). Missing or mistyped fields become empty strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_client::GeneratedContent;
    /// use serde_json::json;
    ///
    /// let content = GeneratedContent::from_response(&json!({
    ///     "content": "Big news",
    ///     "hashtags": ["#launch", "#rust"],
    /// }));
    /// assert_eq!(content.caption(), "Big news");
    /// assert_eq!(content.hashtags(), "#launch #rust");
    /// ```
    pub fn from_response(document: &Value) -> Self {
        let caption = ["caption", "content"]
            .iter()
            .find_map(|key| document.get(*key).and_then(Value::as_str));
        if caption.is_none() {
            warn!("AI response has no caption field, using empty caption");
        }

        let hashtags = match document.get("hashtags") {
            Some(Value::String(tags)) => Some(tags.clone()),
            Some(Value::Array(tags)) => Some(
                tags.iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        };
        if hashtags.is_none() {
            warn!("AI response has no hashtags field, using empty hashtags");
        }

        Self {
            caption: caption.unwrap_or_default().to_string(),
            hashtags: hashtags.unwrap_or_default(),
        }
    }
}

/// How a generate attempt ended.
#[derive(Debug, Clone)]
pub enum AssistOutcome {
    /// Caption and hashtags were written into the form.
    Generated(GeneratedContent),
    /// The prompt was blank; nothing was sent.
    EmptyPrompt,
    /// The request failed; the dialog and prompt were left as they were.
    Failed(HttpError),
    /// Another generation was in flight; nothing was sent.
    Busy,
    /// This form instance has AI assist turned off.
    Unavailable,
}

impl AssistOutcome {
    /// Whether content was generated.
    pub fn is_generated(&self) -> bool {
        matches!(self, AssistOutcome::Generated(_))
    }

    /// Toast for this outcome.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            AssistOutcome::Generated(_) => Some(Notification::success(
                "Content Generated!",
                "Caption and hashtags have been filled in",
            )),
            AssistOutcome::EmptyPrompt => Some(Notification::warning(
                "Prompt required",
                "Please enter a prompt to generate content",
            )),
            AssistOutcome::Failed(_) => Some(Notification::failure(
                "Error",
                "Failed to generate content. Please try again.",
            )),
            AssistOutcome::Unavailable => Some(Notification::warning(
                "AI assist disabled",
                "AI assist is not enabled for this form",
            )),
            AssistOutcome::Busy => None,
        }
    }
}

/// Sends prompts to a configured AI endpoint, one at a time.
#[derive(Debug)]
pub struct AssistDispatcher<T: Transport> {
    transport: Arc<T>,
    endpoint: Url,
    flight: FlightFlag,
}

impl<T: Transport> AssistDispatcher<T> {
    /// Create a dispatcher posting to `endpoint`.
    pub fn new(transport: Arc<T>, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
            flight: FlightFlag::new(),
        }
    }

    /// Configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Current state.
    pub fn state(&self) -> AssistState {
        if self.flight.is_busy() {
            AssistState::Generating
        } else {
            AssistState::Idle
        }
    }

    /// Enter the `Generating` state, or `None` if already there.
    pub fn begin(&self) -> Option<FlightGuard<'_>> {
        self.flight.try_begin()
    }

    /// POST `{ "prompt": prompt }` and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that is not JSON.
    #[instrument(skip(self, prompt), fields(endpoint = %self.endpoint, prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedContent, HttpError> {
        let response = self
            .transport
            .post_json(&self.endpoint, &json!({ "prompt": prompt }))
            .await?
            .error_for_status()
            .inspect_err(|e| error!("AI endpoint rejected prompt: {}", e))?;

        let document: Value = serde_json::from_slice(response.body()).map_err(|e| {
            error!("AI response is not JSON: {}", e);
            HttpError::new(HttpErrorKind::Body(e.to_string()))
        })?;

        info!("Content generated");
        Ok(GeneratedContent::from_response(&document))
    }
}
