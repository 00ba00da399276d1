//! Speech synthesizer abstraction
//!
//! Provides a unified interface to the platform speech engine. The page
//! uses it to list voices, read text aloud and silence output.

use super::{Utterance, Voice};
use crate::Result;
use crossbeam_channel::Sender;
use log::info;

/// Speech synthesizer trait
///
/// Backends implement this to expose the platform voice catalog and
/// speech queue.
pub trait Synth {
    /// Fetch the current voice catalog, in platform order
    fn voices(&self) -> Result<Vec<Voice>>;

    /// Queue an utterance for playback
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;

    /// Cancel speech in progress and anything queued behind it
    fn cancel(&mut self) -> Result<()>;

    /// Set speech rate (0-100, where 50 is normal)
    fn set_rate(&mut self, rate: u8) -> Result<()>;

    /// Set speech volume (0-100)
    fn set_volume(&mut self, volume: u8) -> Result<()>;

    /// Ask to be notified when the voice catalog changes
    ///
    /// Returns `false` when the platform cannot report catalog changes; the
    /// voice list is then populated once at startup.
    fn watch_voices(&mut self, _notify: Sender<()>) -> bool {
        false
    }
}

/// Create the platform speech synthesizer
pub fn create_synth() -> Result<Box<dyn Synth>> {
    let platform = std::env::consts::OS;
    info!(
        "Creating native speech synthesizer for platform: {}",
        platform
    );

    use super::backends::native::NativeSynth;

    match NativeSynth::new() {
        Ok(synth) => {
            info!("Initialized native TTS backend");
            Ok(Box::new(synth))
        }
        Err(e) => Err(crate::SpeakClipError::Speech(format!(
            "Failed to initialize speech backend for platform '{}': {}",
            platform, e
        ))),
    }
}
