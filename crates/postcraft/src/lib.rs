//! Postcraft - compose social media posts and hand them to a webhook.
//!
//! A post draft (title, caption, hashtags, platforms, schedule, up to four
//! images) is validated locally and sent as one multipart request to a
//! user-supplied webhook, where downstream automation takes over. An
//! optional AI helper can fill in caption and hashtags from a prompt.
//!
//! # Architecture
//!
//! - `postcraft_error` - Error types
//! - `postcraft_core` - Draft, validation, attachments, form state
//! - `postcraft_client` - Transport, dispatchers, composer controller
//!
//! This crate re-exports everything and adds configuration loading and
//! logging setup for the `postcraft` binary.
//!
//! # Example
//!
//! ```rust,no_run
//! use postcraft::{Composer, FormConfig, Platform, ReqwestTransport};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FormConfig::builder().ai_assist(false).build()?;
//!     let composer = Composer::new(config, Arc::new(ReqwestTransport::new()), None)?;
//!
//!     composer
//!         .with_form(|form| {
//!             form.set_title("Launch");
//!             form.set_caption("We shipped!");
//!             form.toggle_platform(Platform::Linkedin);
//!             form.set_scheduled_at("2030-01-01T09:00:00Z");
//!             form.set_webhook_url("https://example.com/hook");
//!         })
//!         .await;
//!
//!     let outcome = composer.submit().await;
//!     if let Some(notification) = outcome.notification() {
//!         println!("{}", notification);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod logging;

pub use config::{AssistSettings, DEFAULT_CONFIG, PostcraftConfig, SubmissionSettings};
pub use logging::init_logging;

pub use postcraft_client::*;
pub use postcraft_core::*;
pub use postcraft_error::*;
