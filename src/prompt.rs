//! Instruction template for the generation endpoint and the tone catalogue
//! rendered into the page's style selector.

/// A writing style offered by the page. The endpoint accepts any string as
/// a tone; the catalogue only drives the single-select button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub value: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

pub const TONES: [Tone; 6] = [
    Tone {
        value: "friendly",
        label: "Friendly",
        emoji: "😊",
    },
    Tone {
        value: "professional",
        label: "Professional",
        emoji: "👔",
    },
    Tone {
        value: "funny",
        label: "Humorous",
        emoji: "😂",
    },
    Tone {
        value: "casual",
        label: "Casual",
        emoji: "👕",
    },
    Tone {
        value: "academic",
        label: "Academic",
        emoji: "🎓",
    },
    Tone {
        value: "inspirational",
        label: "Inspirational",
        emoji: "✨",
    },
];

pub const DEFAULT_TONE: &str = "friendly";

/// Builds the instruction sent to the provider. Topic and tone are embedded
/// verbatim; the output shape and the plain-text requirement are fixed.
pub fn build_prompt(topic: &str, tone: &str) -> String {
    format!(
        r#"
You are a professional blog writer.

Write a detailed blog post on the topic: "{topic}" in a "{tone}" tone.

The blog must include:
- A catchy title
- An introduction paragraph
- 3 to 5 clear sections with detailed content
- A strong conclusion

Use only plain text. Do not use Markdown, HTML, or any formatting symbols. Do not explain anything. Return only the blog content.
"#
    )
}
