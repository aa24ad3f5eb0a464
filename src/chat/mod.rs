//! Support chat: a floating panel that sends one question at a time to Gemini.

pub mod credential;
pub mod error;
pub mod gemini;
pub mod state;
pub mod transcript;
pub mod widget;

pub use error::ChatError;
pub use widget::{ChatWidget, MessageView};
