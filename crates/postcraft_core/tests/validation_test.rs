use postcraft_core::{
    CAPTION_MAX_CHARS, Field, FormConfig, Platform, PostForm, TITLE_MAX_CHARS, format_schedule,
};

fn complete_form() -> PostForm {
    let mut form = PostForm::new(FormConfig::default());
    form.set_title("Launch");
    form.set_caption("We shipped!");
    form.set_hashtags("#launch");
    form.toggle_platform(Platform::Facebook);
    form.set_scheduled_at("2030-03-01T09:00:00Z");
    form.set_webhook_url("https://example.com/hook");
    form
}

#[test]
fn complete_draft_validates() {
    let draft = complete_form().validate().unwrap();

    assert_eq!(draft.title(), "Launch");
    assert_eq!(draft.caption(), "We shipped!");
    assert_eq!(draft.hashtags(), "#launch");
    assert_eq!(draft.platforms_json(), r#"["facebook"]"#);
    assert_eq!(format_schedule(draft.scheduled_at()), "2030-03-01T09:00:00.000Z");
    assert_eq!(draft.webhook_url().as_str(), "https://example.com/hook");
}

#[test]
fn empty_draft_reports_every_required_field() {
    let form = PostForm::new(FormConfig::default());
    let errors = form.validate().unwrap_err();

    assert_eq!(errors.len(), 5);
    for field in [
        Field::Title,
        Field::Caption,
        Field::Platforms,
        Field::ScheduledAt,
        Field::WebhookUrl,
    ] {
        assert!(errors.contains(field), "missing error for {}", field);
    }
}

#[test]
fn hashtags_are_optional() {
    let mut form = complete_form();
    form.set_hashtags("");
    let draft = form.validate().unwrap();
    assert_eq!(draft.hashtags(), "");
}

#[test]
fn title_length_bound_is_inclusive() {
    let mut form = complete_form();
    form.set_title("a".repeat(TITLE_MAX_CHARS));
    assert!(form.validate().is_ok());

    form.set_title("a".repeat(TITLE_MAX_CHARS + 1));
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(Field::Title),
        Some("Title must be 100 characters or less")
    );
}

#[test]
fn lengths_count_characters_not_bytes() {
    let mut form = complete_form();
    form.set_title("é".repeat(TITLE_MAX_CHARS));
    assert!(form.validate().is_ok());
}

#[test]
fn caption_length_bound() {
    let mut form = complete_form();
    form.set_caption("x".repeat(CAPTION_MAX_CHARS));
    assert!(form.validate().is_ok());

    form.set_caption("x".repeat(CAPTION_MAX_CHARS + 1));
    let errors = form.validate().unwrap_err();
    assert!(errors.contains(Field::Caption));
    assert!(!errors.contains(Field::Title));
}

#[test]
fn deselecting_last_platform_fails() {
    let mut form = complete_form();
    form.toggle_platform(Platform::Facebook);
    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.message(Field::Platforms),
        Some("Select at least one platform")
    );
}

#[test]
fn invalid_schedule_and_url_are_reported_together() {
    let mut form = complete_form();
    form.set_scheduled_at("tomorrow-ish");
    form.set_webhook_url("example.com/hook");

    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.message(Field::ScheduledAt),
        Some("Schedule date is not a valid date")
    );
    assert_eq!(errors.message(Field::WebhookUrl), Some("Please enter a valid URL"));
}

#[test]
fn past_schedule_is_accepted() {
    let mut form = complete_form();
    form.set_scheduled_at("2001-01-01T00:00:00Z");
    assert!(form.validate().is_ok());
}

#[test]
fn failed_validation_leaves_fields_untouched() {
    let mut form = complete_form();
    form.set_webhook_url("not a url");
    let before = form.draft().clone();

    assert!(form.validate().is_err());
    assert_eq!(form.draft(), &before);
}

#[test]
fn field_errors_display_lists_each_field() {
    let form = PostForm::new(FormConfig::default());
    let rendered = form.validate().unwrap_err().to_string();

    assert!(rendered.starts_with("5 field(s) invalid"));
    assert!(rendered.contains("title: Title is required"));
    assert!(rendered.contains("webhookUrl: Webhook URL is required"));
}
