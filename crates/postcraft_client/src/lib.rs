//! Outbound side of the Postcraft composer.
//!
//! This crate turns a validated draft into a single multipart request to a
//! user-supplied webhook, and optionally asks an AI endpoint to fill in the
//! caption and hashtags.
//!
//! # Components
//!
//! - [`Transport`] - the HTTP seam; [`ReqwestTransport`] is the real one
//! - [`SubmissionDispatcher`] - builds and sends the webhook request
//! - [`AssistDispatcher`] - sends a prompt, decodes generated text
//! - [`Composer`] - owns the form state and runs both state machines with
//!   single-flight gating
//!
//! Every operation resolves to an outcome value carrying an optional
//! [`Notification`]; nothing is retried.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assist;
mod composer;
mod flight;
mod notification;
mod payload;
mod submission;
mod transport;

pub use assist::{AssistDispatcher, AssistOutcome, AssistState, GeneratedContent};
pub use composer::Composer;
pub use flight::{FlightFlag, FlightGuard};
pub use notification::{Notification, NotificationLevel};
pub use payload::{MultipartPayload, Part, PartBody};
pub use submission::{SubmissionDispatcher, SubmissionOutcome, SubmissionState};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
