//! Text rendering of form state and results for the terminal.

use postcraft::{
    AddOutcome, FieldErrors, Layout, MultipartPayload, Notification, PartBody, PostForm,
};
use std::fmt::Write;

/// Summarise the current draft in the given layout.
pub fn render_draft(form: &PostForm, layout: Layout) -> String {
    let draft = form.draft();
    let platforms: Vec<&str> = draft.platforms().iter().map(|p| p.label()).collect();
    let images: Vec<&str> = form
        .attachments()
        .items()
        .iter()
        .map(|a| a.name().as_str())
        .collect();

    let mut out = String::new();
    match layout {
        Layout::Compact => {
            let _ = writeln!(out, "{} | {}", draft.title(), platforms.join(", "));
            let _ = writeln!(out, "{} {}", draft.caption(), draft.hashtags());
            let _ = writeln!(
                out,
                "at {} -> {} ({} image(s))",
                draft.scheduled_at(),
                draft.webhook_url(),
                images.len()
            );
        }
        Layout::Expanded => {
            let _ = writeln!(out, "Title:     {}", draft.title());
            let _ = writeln!(out, "Caption:   {}", draft.caption());
            let _ = writeln!(out, "Hashtags:  {}", draft.hashtags());
            let _ = writeln!(out, "Platforms: {}", platforms.join(", "));
            let _ = writeln!(out, "Schedule:  {}", draft.scheduled_at());
            let _ = writeln!(out, "Webhook:   {}", draft.webhook_url());
            let _ = writeln!(out, "Images:    {}", images.join(", "));
        }
    }
    out
}

/// One line per invalid field, as shown next to each input.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|e| format!("  {}: {}\n", e.field(), e.message()))
        .collect()
}

/// Multipart field listing for `--dry-run`.
pub fn render_payload(payload: &MultipartPayload) -> String {
    payload
        .parts()
        .iter()
        .map(|part| match part.body() {
            PartBody::Text(value) => format!("  {} = {}\n", part.name(), value),
            PartBody::File {
                file_name,
                mime,
                data,
            } => format!(
                "  {} = <{}, {}, {} bytes>\n",
                part.name(),
                file_name,
                mime,
                data.len()
            ),
        })
        .collect()
}

/// Single-line toast.
pub fn render_notification(notification: &Notification) -> String {
    format!("{} - {}", notification.title(), notification.message())
}

/// Warning for an attachment batch, if any.
pub fn render_add_outcome(outcome: &AddOutcome) -> Option<String> {
    match outcome {
        AddOutcome::TooMany { .. } => outcome.warning().map(str::to_string),
        AddOutcome::Added { dropped: 0, .. } => None,
        AddOutcome::Added { dropped, .. } => Some(format!(
            "{} file(s) skipped: only JPEG or PNG up to 10 MiB are accepted",
            dropped
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft::{CandidateFile, FormConfig, Platform};

    fn form() -> PostForm {
        let mut form = PostForm::new(FormConfig::default());
        form.set_title("Launch");
        form.set_caption("We shipped!");
        form.set_hashtags("#launch");
        form.set_platforms([Platform::Linkedin, Platform::Facebook]);
        form.set_scheduled_at("2030-01-01T09:00:00Z");
        form.set_webhook_url("https://example.com/hook");
        form.attachments_mut()
            .add(vec![CandidateFile::new("a.png", "image/png", vec![1, 2])]);
        form
    }

    #[test]
    fn compact_layout_is_three_lines() {
        let out = render_draft(&form(), Layout::Compact);
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("Launch | Facebook, LinkedIn"));
        assert!(out.contains("(1 image(s))"));
    }

    #[test]
    fn expanded_layout_labels_every_field() {
        let out = render_draft(&form(), Layout::Expanded);
        for label in ["Title:", "Caption:", "Hashtags:", "Platforms:", "Schedule:", "Webhook:", "Images:"] {
            assert!(out.contains(label), "missing {}", label);
        }
        assert!(out.contains("Images:    a.png"));
    }

    #[test]
    fn field_errors_render_one_per_line() {
        let errors = PostForm::new(FormConfig::default()).validate().unwrap_err();
        let out = render_field_errors(&errors);
        assert_eq!(out.lines().count(), errors.len());
        assert!(out.contains("  platforms: Select at least one platform"));
    }

    #[test]
    fn payload_listing_hides_file_contents() {
        let draft = form().validate().unwrap();
        let out = render_payload(&MultipartPayload::from_draft(&draft));
        assert!(out.contains(r#"  platforms = ["facebook","linkedin"]"#));
        assert!(out.contains("  image_0 = <a.png, image/png, 2 bytes>"));
    }

    #[test]
    fn add_outcome_messages() {
        assert_eq!(
            render_add_outcome(&AddOutcome::Added { accepted: 2, dropped: 0 }),
            None
        );
        assert!(
            render_add_outcome(&AddOutcome::Added { accepted: 1, dropped: 1 })
                .unwrap()
                .contains("1 file(s) skipped")
        );
        assert!(
            render_add_outcome(&AddOutcome::TooMany { existing: 0, batch: 5 })
                .unwrap()
                .contains("maximum of 4 images")
        );
    }
}
