//! Multipart body sent to the webhook.

use postcraft_core::{ValidatedDraft, format_schedule};

/// Contents of one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    /// Plain text value
    Text(String),
    /// Binary file upload
    File {
        /// Original file name
        file_name: String,
        /// Content type of the part
        mime: String,
        /// File contents
        data: Vec<u8>,
    },
}

/// A named multipart part.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Part {
    /// Form field name
    name: String,
    /// Part contents
    body: PartBody,
}

impl Part {
    /// Text part.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: PartBody::Text(value.into()),
        }
    }

    /// File part.
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            body: PartBody::File {
                file_name: file_name.into(),
                mime: mime.into(),
                data,
            },
        }
    }

    /// Split into name and contents.
    pub fn into_inner(self) -> (String, PartBody) {
        (self.name, self.body)
    }
}

/// Ordered multipart form, independent of any HTTP client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<Part>,
}

impl MultipartPayload {
    /// Build the webhook payload for a validated draft.
    ///
    /// Fields, in order: `postTitle`, `caption`, `hashtags`, `platforms`
    /// (JSON array string), `scheduledDate` (ISO-8601 UTC), then one
    /// `image_N` part per attachment numbered from zero.
    pub fn from_draft(draft: &ValidatedDraft) -> Self {
        let mut parts = vec![
            Part::text("postTitle", draft.title().as_str()),
            Part::text("caption", draft.caption().as_str()),
            Part::text("hashtags", draft.hashtags().as_str()),
            Part::text("platforms", draft.platforms_json()),
            Part::text("scheduledDate", format_schedule(draft.scheduled_at())),
        ];

        parts.extend(draft.attachments().iter().enumerate().map(|(index, attachment)| {
            Part::file(
                format!("image_{}", index),
                attachment.name().as_str(),
                attachment.mime().as_str(),
                attachment.data().clone(),
            )
        }));

        Self { parts }
    }

    /// Append a part.
    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Parts in order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Consume into parts.
    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Field names in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    /// Value of the text part called `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.body {
            PartBody::Text(value) if p.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// The file part called `name`.
    pub fn file(&self, name: &str) -> Option<&PartBody> {
        self.parts
            .iter()
            .find(|p| p.name == name && matches!(p.body, PartBody::File { .. }))
            .map(|p| &p.body)
    }

    /// Number of file parts.
    pub fn file_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|p| matches!(p.body, PartBody::File { .. }))
            .count()
    }
}
