//! Speak button handling

use super::{Synth, Utterance, Voice};
use crate::Result;
use log::{debug, warn};

/// Owns the shared utterance and submits it to the synthesizer
///
/// Both manual speak requests and the speak-on-record behaviour go
/// through here, so there is exactly one utterance per page.
#[derive(Debug, Default)]
pub struct SpeechTrigger {
    utterance: Utterance,
}

impl SpeechTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utterance(&self) -> &Utterance {
        &self.utterance
    }

    /// Speak `text` with the voice at list position `selected`
    ///
    /// The position is resolved against a catalog fetched now, not the one
    /// the list was built from. Empty text is ignored. Returns whether an
    /// utterance was submitted.
    pub fn speak(
        &mut self,
        text: &str,
        selected: Option<usize>,
        synth: &mut dyn Synth,
    ) -> Result<bool> {
        if text.is_empty() {
            debug!("Nothing to speak");
            return Ok(false);
        }

        self.utterance.text = text.to_string();
        self.utterance.voice = resolve_voice(selected, synth);
        synth.speak(&self.utterance)?;

        Ok(true)
    }

    /// Point the utterance at the voice at list position `selected`
    pub fn select_voice(&mut self, selected: Option<usize>, synth: &dyn Synth) {
        self.utterance.voice = resolve_voice(selected, synth);
        debug!(
            "Utterance voice now {:?}",
            self.utterance.voice.as_ref().map(Voice::label)
        );
    }
}

fn resolve_voice(selected: Option<usize>, synth: &dyn Synth) -> Option<Voice> {
    let index = selected?;
    let voices = match synth.voices() {
        Ok(voices) => voices,
        Err(e) => {
            warn!("Could not read voice catalog: {}", e);
            return None;
        }
    };

    let voice = voices.get(index).cloned();
    if voice.is_none() {
        warn!(
            "Voice index {} out of range (have {} voices)",
            index,
            voices.len()
        );
    }
    voice
}
