//! Assembled audio data for a clip

use crate::Result;
use std::io::Cursor;

/// Recorded audio plus the mime type the recorder produced it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBlob {
    bytes: Vec<u8>,
    mime_type: String,
}

impl AudioBlob {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Concatenate `chunks` in order
    pub fn from_chunks(chunks: &[Vec<u8>], mime_type: impl Into<String>) -> Self {
        Self::new(chunks.concat(), mime_type)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Sample rate and channel count for raw `audio/L16` data
    pub fn pcm_format(&self) -> Option<(u32, u16)> {
        let mut parts = self.mime_type.split(';').map(str::trim);
        if !parts.next()?.eq_ignore_ascii_case("audio/L16") {
            return None;
        }

        let mut rate = None;
        let mut channels = 1;
        for param in parts {
            match param.split_once('=') {
                Some(("rate", value)) => rate = value.trim().parse().ok(),
                Some(("channels", value)) => channels = value.trim().parse().ok()?,
                _ => {}
            }
        }
        rate.map(|rate| (rate, channels))
    }

    /// File extension matching what [`AudioBlob::playable_bytes`] produces
    pub fn extension(&self) -> &'static str {
        if self.pcm_format().is_some() {
            return "wav";
        }
        let essence = self.mime_type.split(';').next().unwrap_or("").trim();
        match essence {
            "audio/ogg" => "ogg",
            "audio/webm" => "webm",
            "audio/wav" | "audio/wave" | "audio/x-wav" => "wav",
            "audio/mpeg" => "mp3",
            _ => "bin",
        }
    }

    /// Bytes a standard decoder can open
    ///
    /// Raw PCM is wrapped in a WAV header; anything else is already in a
    /// container and is returned untouched.
    pub fn playable_bytes(&self) -> Result<Vec<u8>> {
        let Some((sample_rate, channels)) = self.pcm_format() else {
            return Ok(self.bytes.clone());
        };

        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut wav = Cursor::new(Vec::with_capacity(self.bytes.len() + 44));
        {
            let mut writer = hound::WavWriter::new(&mut wav, spec)?;
            for pair in self.bytes.chunks_exact(2) {
                writer.write_sample(i16::from_le_bytes([pair[0], pair[1]]))?;
            }
            writer.finalize()?;
        }
        Ok(wav.into_inner())
    }
}
