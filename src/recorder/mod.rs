//! Microphone recording
//!
//! Device discovery and capture sit behind the [`MediaDevices`] and
//! [`Recorder`] traits; [`RecordingController`] drives one capture session
//! at a time and turns the captured chunks into clips.

pub mod capture;
pub mod session;

use crate::Result;
use crossbeam_channel::Sender;

pub use capture::CpalDevices;
pub use session::{FinishedClip, RecordingController, SessionState};

/// What kind of endpoint a device is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    AudioInput,
    AudioOutput,
}

/// A media device as reported by enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Identifier used to request this exact device
    pub id: String,
    pub label: String,
    pub kind: DeviceKind,
}

/// Capture settings passed when opening a recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderOptions {
    /// Milliseconds of audio per emitted chunk
    pub timeslice_ms: u32,
}

impl Default for RecorderOptions {
    fn default() -> Self {
        Self { timeslice_ms: 1000 }
    }
}

/// Notifications a recorder delivers to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecorderEvent {
    /// A fragment of captured audio, in capture order
    DataAvailable(Vec<u8>),
    /// Capture has ended; no more data follows for this session
    Stopped,
    /// The capture stream reported a failure
    Error(String),
}

/// Enumerates devices and grants capture access
pub trait MediaDevices {
    /// All input and output devices currently present
    fn enumerate_devices(&self) -> Result<Vec<DeviceInfo>>;

    /// Acquire the capture stream of `device` and bind a recorder to it
    ///
    /// The recorder reports through `events` for as long as it lives.
    fn open_recorder(
        &self,
        device: &DeviceInfo,
        events: Sender<RecorderEvent>,
        options: &RecorderOptions,
    ) -> Result<Box<dyn Recorder>>;
}

/// Start/stop control over a capture stream
pub trait Recorder {
    /// Begin delivering `DataAvailable` events
    fn start(&mut self) -> Result<()>;

    /// End capture; pending data is flushed and `Stopped` follows
    fn stop(&mut self) -> Result<()>;

    /// Mime type of the bytes this recorder produces
    fn mime_type(&self) -> &str;
}
