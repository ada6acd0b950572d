mod client;
mod types;

pub use client::{GeminiClient, TextProvider};
