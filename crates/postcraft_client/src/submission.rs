//! Webhook submission.

use crate::{FlightFlag, FlightGuard, MultipartPayload, Notification, Transport};
use postcraft_core::{FieldErrors, ValidatedDraft};
use postcraft_error::HttpError;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SubmissionState {
    /// Ready to submit
    Idle,
    /// Waiting on the webhook
    Submitting,
}

/// How a submit attempt ended.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    /// The webhook answered 2xx; the form was reset.
    Submitted,
    /// The draft failed validation; nothing was sent.
    Invalid(FieldErrors),
    /// The request failed; the form was left as it was.
    Failed(HttpError),
    /// Another submission was in flight; nothing was sent.
    Busy,
}

impl SubmissionOutcome {
    /// Whether the post reached the webhook.
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted)
    }

    /// Toast for this outcome. Validation errors are shown inline instead.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmissionOutcome::Submitted => Some(Notification::success(
                "Success!",
                "Post submitted successfully",
            )),
            SubmissionOutcome::Failed(_) => Some(Notification::failure(
                "Error",
                "Failed to submit post. Please check your webhook URL and try again.",
            )),
            SubmissionOutcome::Invalid(_) | SubmissionOutcome::Busy => None,
        }
    }
}

/// Sends validated drafts to their webhook, one at a time.
#[derive(Debug)]
pub struct SubmissionDispatcher<T: Transport> {
    transport: Arc<T>,
    flight: FlightFlag,
}

impl<T: Transport> SubmissionDispatcher<T> {
    /// Create a dispatcher over `transport`.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            flight: FlightFlag::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        if self.flight.is_busy() {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    /// Enter the `Submitting` state, or `None` if already there.
    pub fn begin(&self) -> Option<FlightGuard<'_>> {
        self.flight.try_begin()
    }

    /// Send `draft` to its webhook in a single POST.
    ///
    /// Callers hold the guard from [`Self::begin`] for the duration.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, payload assembly failure or a
    /// non-2xx status.
    #[instrument(
        skip(self, draft),
        fields(url = %draft.webhook_url(), attachments = draft.attachments().len())
    )]
    pub async fn send(&self, draft: &ValidatedDraft) -> Result<(), HttpError> {
        let payload = MultipartPayload::from_draft(draft);

        let response = self
            .transport
            .post_multipart(draft.webhook_url(), payload)
            .await?
            .error_for_status()
            .inspect_err(|e| error!("Webhook rejected submission: {}", e))?;

        info!(status = response.status(), "Post submitted");
        Ok(())
    }
}
