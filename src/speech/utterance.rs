//! Pending text-to-speech request

use super::Voice;

/// Text plus the voice to read it with
///
/// A single utterance is reused for every request; both fields are
/// overwritten before each submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,

    /// `None` lets the engine use its current voice
    pub voice: Option<Voice>,
}
