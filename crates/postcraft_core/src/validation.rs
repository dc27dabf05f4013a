//! Field-level validation rules for a post draft.

use crate::PostDraft;
use crate::schedule::parse_schedule;
use std::fmt;
use url::Url;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum caption length in characters.
pub const CAPTION_MAX_CHARS: usize = 2200;

/// Draft fields that carry validation rules.
///
/// Displays with the field's wire name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    /// Post title
    Title,
    /// Post caption
    Caption,
    /// Target platforms
    Platforms,
    /// Schedule timestamp
    ScheduledAt,
    /// Webhook endpoint
    WebhookUrl,
}

/// One violated rule, tied to the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct FieldError {
    field: Field,
    message: String,
}

impl FieldError {
    /// Create an error for `field`.
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule a draft violated, in field order.
///
/// Returned by [`crate::PostForm::validate`]; never empty when returned as
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::Error)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Whether any rule was violated.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violated rules.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether `field` has at least one error.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Message to show next to `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterate over the individual errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) invalid", self.errors.len())?;
        for error in &self.errors {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

/// Fields of a draft that passed every rule, still without attachments.
#[derive(Debug)]
pub(crate) struct CheckedFields {
    pub(crate) scheduled_at: chrono::DateTime<chrono::Utc>,
    pub(crate) webhook_url: Url,
}

/// Apply every rule to `draft`, collecting all violations.
pub(crate) fn check(draft: &PostDraft) -> Result<CheckedFields, FieldErrors> {
    let mut errors = FieldErrors::default();

    let title_len = draft.title().chars().count();
    if title_len == 0 {
        errors.push(Field::Title, "Title is required");
    } else if title_len > TITLE_MAX_CHARS {
        errors.push(
            Field::Title,
            format!("Title must be {} characters or less", TITLE_MAX_CHARS),
        );
    }

    let caption_len = draft.caption().chars().count();
    if caption_len == 0 {
        errors.push(Field::Caption, "Caption is required");
    } else if caption_len > CAPTION_MAX_CHARS {
        errors.push(
            Field::Caption,
            format!("Caption must be {} characters or less", CAPTION_MAX_CHARS),
        );
    }

    if draft.platforms().is_empty() {
        errors.push(Field::Platforms, "Select at least one platform");
    }

    let scheduled_at = if draft.scheduled_at().trim().is_empty() {
        errors.push(Field::ScheduledAt, "Schedule date is required");
        None
    } else {
        let parsed = parse_schedule(draft.scheduled_at());
        if parsed.is_none() {
            errors.push(Field::ScheduledAt, "Schedule date is not a valid date");
        }
        parsed
    };

    let webhook_url = if draft.webhook_url().trim().is_empty() {
        errors.push(Field::WebhookUrl, "Webhook URL is required");
        None
    } else {
        match Url::parse(draft.webhook_url().trim()) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!(error = %e, "Webhook URL rejected");
                errors.push(Field::WebhookUrl, "Please enter a valid URL");
                None
            }
        }
    };

    match (scheduled_at, webhook_url) {
        (Some(scheduled_at), Some(webhook_url)) if errors.is_empty() => Ok(CheckedFields {
            scheduled_at,
            webhook_url,
        }),
        _ => Err(errors),
    }
}
