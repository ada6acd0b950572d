use blogforge_rust::prompt::{DEFAULT_TONE, TONES, build_prompt};
use rstest::rstest;
use std::collections::HashSet;

#[test]
fn prompt_embeds_topic_verbatim() {
    let prompt = build_prompt("The Future of Renewable Energy", "friendly");
    assert!(prompt.contains("topic: \"The Future of Renewable Energy\""));
}

#[rstest]
fn prompt_embeds_each_catalogue_tone(
    #[values("friendly", "professional", "funny", "casual", "academic", "inspirational")]
    tone: &str,
) {
    let prompt = build_prompt("Any topic", tone);
    assert!(prompt.contains(&format!("in a \"{}\" tone", tone)));
}

#[test]
fn prompt_requests_plain_text_output() {
    let prompt = build_prompt("Any topic", "casual");
    assert!(prompt.contains(
        "Use only plain text. Do not use Markdown, HTML, or any formatting symbols."
    ));
}

#[test]
fn prompt_requests_full_blog_shape() {
    let prompt = build_prompt("Any topic", "casual");
    assert!(prompt.contains("A catchy title"));
    assert!(prompt.contains("An introduction paragraph"));
    assert!(prompt.contains("3 to 5 clear sections"));
    assert!(prompt.contains("A strong conclusion"));
}

#[test]
fn prompt_passes_free_text_tones_through() {
    // The tone catalogue is a UI affordance; the template takes any string
    let prompt = build_prompt("Any topic", "wildly sarcastic");
    assert!(prompt.contains("in a \"wildly sarcastic\" tone"));
}

#[test]
fn tone_catalogue_has_six_distinct_options() {
    let values: HashSet<&str> = TONES.iter().map(|t| t.value).collect();
    assert_eq!(values.len(), 6);
}

#[test]
fn default_tone_is_in_the_catalogue() {
    assert!(TONES.iter().any(|t| t.value == DEFAULT_TONE));
}

#[test]
fn tone_labels_and_emojis_are_populated() {
    for tone in TONES.iter() {
        assert!(!tone.label.is_empty());
        assert!(!tone.emoji.is_empty());
    }
}
