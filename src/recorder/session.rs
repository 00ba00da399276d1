//! Record/stop lifecycle of a capture session

use super::{DeviceKind, MediaDevices, Recorder, RecorderEvent, RecorderOptions};
use crate::clips::{AudioBlob, DEFAULT_CLIP_NAME};
use crate::input::Prompter;
use crate::page::{ButtonStyle, Page};
use crate::{Result, SpeakClipError};
use crossbeam_channel::Sender;
use log::{debug, error, info, warn};
use std::fmt;

/// Question asked when a recording ends
pub const CLIP_NAME_PROMPT: &str = "Enter a name for your sound clip";

/// Where the controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recording,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => f.write_str("idle"),
            SessionState::Recording => f.write_str("recording"),
        }
    }
}

/// A session's audio, named and ready for the clip list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedClip {
    pub name: String,
    pub blob: AudioBlob,
}

/// Drives one recorder through record/stop cycles
///
/// Only one session is open at a time. Chunks are collected in arrival
/// order from the start click until the recorder reports it has stopped,
/// which can be after the stop click.
pub struct RecordingController {
    recorder: Box<dyn Recorder>,
    state: SessionState,
    chunks: Vec<Vec<u8>>,

    /// The stop click happened but the recorder has not reported `Stopped`
    awaiting_stop: bool,
}

impl RecordingController {
    /// Wrap an already opened recorder
    pub fn new(recorder: Box<dyn Recorder>) -> Self {
        Self {
            recorder,
            state: SessionState::Idle,
            chunks: Vec::new(),
            awaiting_stop: false,
        }
    }

    /// Find an input device and open a recorder on it
    ///
    /// Uses the input whose label equals `preferred` when given and present,
    /// otherwise the first input enumerated.
    pub fn setup(
        devices: &dyn MediaDevices,
        events: Sender<RecorderEvent>,
        options: &RecorderOptions,
        preferred: Option<&str>,
    ) -> Result<Self> {
        let inputs: Vec<_> = devices
            .enumerate_devices()?
            .into_iter()
            .filter(|d| d.kind == DeviceKind::AudioInput)
            .collect();

        let device = preferred
            .and_then(|name| inputs.iter().find(|d| d.label == name))
            .or_else(|| inputs.first())
            .ok_or(SpeakClipError::NoInputDevice)?;
        info!("Using input device {:?}", device.label);

        let recorder = devices.open_recorder(device, events, options)?;
        Ok(Self::new(recorder))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Stop was clicked and the recorder has not reported `Stopped` yet
    pub fn is_finishing(&self) -> bool {
        self.awaiting_stop
    }

    /// Chunks collected so far for the open session
    pub fn pending_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Idle -> Recording: start capture and flip the buttons
    ///
    /// Refused until the previous session's clip has been filed.
    pub fn start(&mut self, page: &mut Page) -> Result<()> {
        if self.state != SessionState::Idle {
            return Err(SpeakClipError::InvalidTransition {
                action: "start recording",
                state: self.state,
            });
        }
        if self.awaiting_stop {
            return Err(SpeakClipError::ClipPending);
        }

        self.recorder.start()?;
        self.state = SessionState::Recording;
        info!("recorder started");

        page.record.style = ButtonStyle::Active;
        page.record.enabled = false;
        page.stop.enabled = true;
        Ok(())
    }

    /// Recording -> Idle: end capture and restore the buttons
    pub fn stop(&mut self, page: &mut Page) -> Result<()> {
        if self.state != SessionState::Recording {
            return Err(SpeakClipError::InvalidTransition {
                action: "stop recording",
                state: self.state,
            });
        }

        self.recorder.stop()?;
        self.state = SessionState::Idle;
        self.awaiting_stop = true;
        info!("recorder stopped");

        page.record.style = ButtonStyle::Ready;
        page.record.enabled = true;
        page.stop.enabled = false;
        Ok(())
    }

    /// Consume a recorder notification
    ///
    /// Returns the finished clip once the recorder reports the end of
    /// capture; the user is asked for its name through `prompter`.
    pub fn handle_event(
        &mut self,
        event: RecorderEvent,
        prompter: &mut dyn Prompter,
    ) -> Option<FinishedClip> {
        match event {
            RecorderEvent::DataAvailable(chunk) => {
                if self.state == SessionState::Recording || self.awaiting_stop {
                    debug!("Chunk {} ({} bytes)", self.chunks.len() + 1, chunk.len());
                    self.chunks.push(chunk);
                } else {
                    warn!("Dropping {} bytes captured outside a session", chunk.len());
                }
                None
            }
            RecorderEvent::Stopped => {
                if !self.awaiting_stop {
                    warn!("Recorder stopped without a stop request");
                }
                self.awaiting_stop = false;
                debug!("data available after recorder stop");
                Some(self.finish(prompter))
            }
            RecorderEvent::Error(message) => {
                error!("Recorder error: {}", message);
                None
            }
        }
    }

    fn finish(&mut self, prompter: &mut dyn Prompter) -> FinishedClip {
        let name = prompter
            .prompt(CLIP_NAME_PROMPT)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CLIP_NAME.to_string());

        let blob = AudioBlob::from_chunks(&self.chunks, self.recorder.mime_type());
        self.chunks.clear();

        FinishedClip { name, blob }
    }
}
