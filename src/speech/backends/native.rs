//! Native TTS backend using the tts crate
//!
//! The `tts` crate gives a unified interface to:
//! - Speech Dispatcher on Linux
//! - AVFoundation on macOS/iOS
//! - WinRT / SAPI on Windows

use crate::speech::{Synth, Utterance, Voice};
use crate::{Result, SpeakClipError};
use log::{debug, error, warn};
use tts::{Features, Tts as TtsCrate};

/// Native TTS backend using the tts crate
pub struct NativeSynth {
    tts: TtsCrate,

    /// Capabilities reported by the engine at startup
    features: Features,

    /// Id of the voice the engine was using at startup
    default_voice_id: Option<String>,
}

impl NativeSynth {
    /// Create a new native TTS synthesizer
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| SpeakClipError::Speech(format!("Failed to initialize TTS: {}", e)))?;
        let features = tts.supported_features();

        let default_voice_id = if features.get_voice {
            match tts.voice() {
                Ok(voice) => voice.map(|v| v.id()),
                Err(e) => {
                    warn!("Could not query current voice: {}", e);
                    None
                }
            }
        } else {
            None
        };

        debug!(
            "Native TTS backend created (default voice: {:?})",
            default_voice_id
        );

        Ok(Self {
            tts,
            features,
            default_voice_id,
        })
    }

    /// Map 0-100 onto the engine's range, with 50 landing on `normal`
    fn scale(value: u8, min: f32, normal: f32, max: f32) -> f32 {
        let value = value.min(100) as f32;
        if value <= 50.0 {
            min + (normal - min) * value / 50.0
        } else {
            normal + (max - normal) * (value - 50.0) / 50.0
        }
    }

    /// Point the engine at `voice`, matching by id against a fresh catalog
    fn apply_voice(&mut self, voice: &Voice) -> Result<()> {
        if !self.features.voice {
            warn!("Voice selection not supported on this platform");
            return Ok(());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| SpeakClipError::Speech(format!("Failed to get voices: {}", e)))?;

        match voices.iter().find(|v| v.id() == voice.id) {
            Some(found) => {
                debug!("Selecting voice: {}", voice.label());
                self.tts
                    .set_voice(found)
                    .map_err(|e| SpeakClipError::Speech(format!("Failed to set voice: {}", e)))?;
            }
            None => warn!("Voice {} is no longer available", voice.label()),
        }

        Ok(())
    }
}

impl Synth for NativeSynth {
    fn voices(&self) -> Result<Vec<Voice>> {
        if !self.features.voice {
            return Ok(Vec::new());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| SpeakClipError::Speech(format!("Failed to get voices: {}", e)))?;

        Ok(voices
            .into_iter()
            .map(|v| {
                let id = v.id();
                let is_default = self.default_voice_id.as_deref() == Some(id.as_str());
                Voice::new(id, v.name(), v.language().to_string(), is_default)
            })
            .collect())
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        if utterance.text.is_empty() {
            return Ok(());
        }

        if let Some(voice) = &utterance.voice {
            self.apply_voice(voice)?;
        }

        debug!("Speaking: {}", utterance.text);
        self.tts.speak(utterance.text.as_str(), false).map_err(|e| {
            error!("Failed to speak: {}", e);
            SpeakClipError::Speech(format!("Speak failed: {}", e))
        })?;

        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        if !self.features.stop {
            warn!("Stopping speech not supported on this platform");
            return Ok(());
        }

        debug!("Canceling speech");
        self.tts.stop().map_err(|e| {
            error!("Failed to cancel speech: {}", e);
            SpeakClipError::Speech(format!("Cancel failed: {}", e))
        })?;

        Ok(())
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        debug!("Setting rate to {}", rate);

        if !self.features.rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = Self::scale(
            rate,
            self.tts.min_rate(),
            self.tts.normal_rate(),
            self.tts.max_rate(),
        );
        self.tts
            .set_rate(converted)
            .map_err(|e| SpeakClipError::Speech(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Setting volume to {}", volume);

        if !self.features.volume {
            warn!("Volume control not supported on this platform");
            return Ok(());
        }

        let min = self.tts.min_volume();
        let max = self.tts.max_volume();
        let converted = Self::scale(volume, min, (min + max) / 2.0, max);
        self.tts
            .set_volume(converted)
            .map_err(|e| SpeakClipError::Speech(format!("Failed to set volume: {}", e)))?;

        Ok(())
    }
}
