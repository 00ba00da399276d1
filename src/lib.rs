//! speakclip - speak text and record clips
//!
//! Reads typed text aloud through the platform speech engine and records
//! microphone audio into named clips that can be played back, saved or deleted.

pub mod clips;
pub mod error;
pub mod input;
pub mod page;
pub mod recorder;
pub mod speech;
pub mod state;

pub use error::{Result, SpeakClipError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "speakclip";
