//! Error types for speakclip

use crate::recorder::SessionState;
use std::io;
use thiserror::Error;

/// Main error type for speakclip
#[derive(Error, Debug)]
pub enum SpeakClipError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("No audio input devices found")]
    NoInputDevice,

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Recorder error: {0}")]
    Recorder(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },

    #[error("Cannot start recording until the last clip is saved")]
    ClipPending,

    #[error("No clip at position {0}")]
    ClipNotFound(usize),

    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for speakclip operations
pub type Result<T> = std::result::Result<T, SpeakClipError>;

impl From<String> for SpeakClipError {
    fn from(s: String) -> Self {
        SpeakClipError::Other(s)
    }
}

impl From<&str> for SpeakClipError {
    fn from(s: &str) -> Self {
        SpeakClipError::Other(s.to_string())
    }
}
