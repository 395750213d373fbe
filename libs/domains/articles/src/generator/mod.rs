//! Model Client Adapter
//!
//! Wraps the external text-generation provider behind [`TextGenerator`].

mod gemini;
mod provider;
mod scripted;

pub use gemini::{GeminiConfig, GeminiGenerator};
pub use provider::TextGenerator;
pub use scripted::ScriptedGenerator;

#[cfg(test)]
pub use provider::MockTextGenerator;
