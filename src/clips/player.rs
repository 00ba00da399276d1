//! Clip playback

use crate::{Result, SpeakClipError};
use log::{debug, info};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Plays materialized clips
pub trait ClipPlayer {
    /// Start playing the file at `path`, replacing anything already playing
    fn play(&mut self, path: &Path) -> Result<()>;

    /// Stop playback
    fn stop(&mut self);
}

/// Playback through the default output device
///
/// The output stream is opened on first use so machines without an output
/// device can still record.
#[derive(Default)]
pub struct RodioPlayer {
    output: Option<(OutputStream, Sink)>,
}

impl RodioPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn sink(&mut self) -> Result<&Sink> {
        if self.output.is_none() {
            let stream = OutputStreamBuilder::open_default_stream().map_err(|e| {
                SpeakClipError::Playback(format!("Failed to open audio output: {}", e))
            })?;
            let sink = Sink::connect_new(stream.mixer());
            info!("Audio output opened");
            self.output = Some((stream, sink));
        }

        match &self.output {
            Some((_, sink)) => Ok(sink),
            None => Err(SpeakClipError::Playback("Audio output unavailable".into())),
        }
    }
}

impl ClipPlayer for RodioPlayer {
    fn play(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| SpeakClipError::Playback(format!("Cannot decode {:?}: {}", path, e)))?;

        let sink = self.sink()?;
        sink.stop();
        sink.append(decoder);
        sink.play();
        debug!("Playing {:?}", path);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some((_, sink)) = &self.output {
            sink.stop();
        }
    }
}
