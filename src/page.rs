use crate::prompt::{DEFAULT_TONE, TONES, Tone};
use askama::Template;
use axum::response::IntoResponse;

/// The generation page: topic form, tone selector, and the script driving
/// the submit/result cycle.
#[derive(Template)]
#[template(path = "write.html")]
pub struct WritePage {
    pub tones: &'static [Tone],
    pub default_tone: &'static str,
}

impl WritePage {
    pub fn new() -> Self {
        Self {
            tones: &TONES,
            default_tone: DEFAULT_TONE,
        }
    }
}

impl Default for WritePage {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn index() -> impl IntoResponse {
    WritePage::new()
}

pub async fn health_check() -> &'static str {
    "OK"
}
