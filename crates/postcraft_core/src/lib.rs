//! Core data types for the Postcraft post composer.
//!
//! This crate holds everything that happens before a request leaves the
//! process: the post draft, field validation, the attachment list and the
//! form state that ties them together.
//!
//! # Examples
//!
//! ```
//! use postcraft_core::{Field, FormConfig, Platform, PostForm};
//!
//! let mut form = PostForm::new(FormConfig::default());
//! form.set_title("Launch");
//! form.set_caption("We shipped!");
//! form.toggle_platform(Platform::Facebook);
//! form.set_scheduled_at("2030-01-01T09:00:00Z");
//! form.set_webhook_url("https://example.com/hook");
//!
//! let validated = form.validate().expect("draft is complete");
//! assert_eq!(validated.title(), "Launch");
//!
//! form.set_title("");
//! let errors = form.validate().unwrap_err();
//! assert!(errors.contains(Field::Title));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod draft;
mod form;
mod platform;
mod preview;
mod schedule;
mod validation;

pub use attachment::{
    ACCEPTED_MIME_TYPES, AddOutcome, Attachment, AttachmentSet, CandidateFile,
    MAX_ATTACHMENT_BYTES, MAX_ATTACHMENTS, TOO_MANY_IMAGES_WARNING, is_acceptable, mime_for_path,
};
pub use draft::{PostDraft, ValidatedDraft};
pub use form::{AssistPanel, FormConfig, FormConfigBuilder, Layout, PostForm};
pub use platform::Platform;
pub use preview::PreviewHandle;
pub use schedule::{format_schedule, parse_schedule};
pub use validation::{
    CAPTION_MAX_CHARS, Field, FieldError, FieldErrors, TITLE_MAX_CHARS,
};
