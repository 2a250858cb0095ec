// src/chat/mod.rs
//! Floating chat widget: message log, greeting texts, UI flags and the
//! session controller that drives them.

pub mod controller;
pub mod greeting;
pub mod message;
pub mod render;
pub mod ui_state;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{ChatSession, ChatSessionController, RequestState, SendOutcome, UploadOutcome};
pub use message::{Message, MessageLog, Placeholder, Sender};
pub use ui_state::{ExpandedSections, Section, UiState};
