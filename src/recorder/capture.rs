//! Microphone capture using cpal
//!
//! Linux build note: cpal needs the ALSA development headers
//! (`sudo apt install libasound2-dev pkg-config` on Debian/Ubuntu).

use super::{DeviceInfo, DeviceKind, MediaDevices, Recorder, RecorderEvent, RecorderOptions};
use crate::{Result, SpeakClipError};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample, Stream, StreamConfig};
use crossbeam_channel::Sender;
use log::{debug, info, trace, warn};
use std::sync::{Arc, Mutex};

/// Devices of the default cpal host
///
/// cpal has no stable device ids, so the device name doubles as the id.
pub struct CpalDevices {
    host: cpal::Host,
}

impl CpalDevices {
    pub fn new() -> Self {
        Self {
            host: cpal::default_host(),
        }
    }

    fn find_input(&self, id: &str) -> Result<cpal::Device> {
        let devices = self
            .host
            .input_devices()
            .map_err(|e| SpeakClipError::Device(format!("Failed to list input devices: {}", e)))?;

        for device in devices {
            if device.name().map(|name| name == id).unwrap_or(false) {
                return Ok(device);
            }
        }
        Err(SpeakClipError::Device(format!(
            "Input device {:?} is not available",
            id
        )))
    }
}

impl Default for CpalDevices {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaDevices for CpalDevices {
    fn enumerate_devices(&self) -> Result<Vec<DeviceInfo>> {
        let mut found = Vec::new();

        let inputs = self
            .host
            .input_devices()
            .map_err(|e| SpeakClipError::Device(format!("Failed to list input devices: {}", e)))?;
        for device in inputs {
            match device.name() {
                Ok(name) => found.push(DeviceInfo {
                    id: name.clone(),
                    label: name,
                    kind: DeviceKind::AudioInput,
                }),
                Err(e) => warn!("Skipping unnamed input device: {}", e),
            }
        }

        let outputs = self
            .host
            .output_devices()
            .map_err(|e| SpeakClipError::Device(format!("Failed to list output devices: {}", e)))?;
        for device in outputs {
            match device.name() {
                Ok(name) => found.push(DeviceInfo {
                    id: name.clone(),
                    label: name,
                    kind: DeviceKind::AudioOutput,
                }),
                Err(e) => warn!("Skipping unnamed output device: {}", e),
            }
        }

        debug!("Enumerated {} devices", found.len());
        Ok(found)
    }

    fn open_recorder(
        &self,
        device: &DeviceInfo,
        events: Sender<RecorderEvent>,
        options: &RecorderOptions,
    ) -> Result<Box<dyn Recorder>> {
        let input = self.find_input(&device.id)?;
        let recorder = CpalRecorder::open(&input, events, options)?;
        info!("Capture stream opened on {}", device.label);
        Ok(Box::new(recorder))
    }
}

/// Samples waiting to become a chunk, guarded together with the recording flag
struct CaptureBuffer {
    recording: bool,
    pending: Vec<u8>,
}

/// State shared between the recorder and the cpal callback thread
struct CaptureShared {
    buffer: Mutex<CaptureBuffer>,
    chunk_bytes: usize,
    events: Sender<RecorderEvent>,
}

impl CaptureShared {
    fn push<T>(&self, data: &[T])
    where
        T: Sample,
        i16: FromSample<T>,
    {
        let Ok(mut buffer) = self.buffer.lock() else {
            return;
        };
        if !buffer.recording {
            return;
        }

        buffer
            .pending
            .extend(data.iter().flat_map(|&s| s.to_sample::<i16>().to_le_bytes()));

        while buffer.pending.len() >= self.chunk_bytes {
            let rest = buffer.pending.split_off(self.chunk_bytes);
            let chunk = std::mem::replace(&mut buffer.pending, rest);
            trace!("Captured chunk of {} bytes", chunk.len());
            let _ = self.events.send(RecorderEvent::DataAvailable(chunk));
        }
    }
}

/// Recorder bound to one cpal input stream
///
/// Produces 16-bit little-endian interleaved PCM. The stream stays open
/// for the recorder's lifetime and is only paused between sessions.
pub struct CpalRecorder {
    stream: Stream,
    shared: Arc<CaptureShared>,
    mime_type: String,
}

impl CpalRecorder {
    pub fn open(
        device: &cpal::Device,
        events: Sender<RecorderEvent>,
        options: &RecorderOptions,
    ) -> Result<Self> {
        let supported = device.default_input_config().map_err(|e| {
            SpeakClipError::Device(format!("Failed to query input config: {}", e))
        })?;
        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();

        let frame_bytes = config.channels as usize * 2;
        let frames_per_chunk =
            (config.sample_rate.0 as u64 * options.timeslice_ms as u64 / 1000).max(1) as usize;
        let shared = Arc::new(CaptureShared {
            buffer: Mutex::new(CaptureBuffer {
                recording: false,
                pending: Vec::new(),
            }),
            chunk_bytes: frames_per_chunk * frame_bytes,
            events,
        });

        let stream = match sample_format {
            SampleFormat::F32 => build_stream::<f32>(device, &config, &shared)?,
            SampleFormat::I16 => build_stream::<i16>(device, &config, &shared)?,
            SampleFormat::U16 => build_stream::<u16>(device, &config, &shared)?,
            SampleFormat::I32 => build_stream::<i32>(device, &config, &shared)?,
            other => {
                return Err(SpeakClipError::Device(format!(
                    "Unsupported sample format {:?}",
                    other
                )))
            }
        };

        // Some hosts start streams as soon as they are built
        if let Err(e) = stream.pause() {
            debug!("Could not pause new stream: {}", e);
        }

        let mime_type = format!(
            "audio/L16;rate={};channels={}",
            config.sample_rate.0, config.channels
        );
        debug!("Recorder format: {}", mime_type);

        Ok(Self {
            stream,
            shared,
            mime_type,
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, CaptureBuffer>> {
        self.shared
            .buffer
            .lock()
            .map_err(|_| SpeakClipError::Recorder("Capture buffer poisoned".into()))
    }
}

impl Recorder for CpalRecorder {
    fn start(&mut self) -> Result<()> {
        {
            let mut buffer = self.lock()?;
            buffer.pending.clear();
            buffer.recording = true;
        }

        self.stream
            .play()
            .map_err(|e| SpeakClipError::Recorder(format!("Failed to start capture: {}", e)))
    }

    fn stop(&mut self) -> Result<()> {
        if let Err(e) = self.stream.pause() {
            warn!("Failed to pause capture stream: {}", e);
        }

        let mut buffer = self.lock()?;
        buffer.recording = false;

        let rest = std::mem::take(&mut buffer.pending);
        if !rest.is_empty() {
            self.shared
                .events
                .send(RecorderEvent::DataAvailable(rest))
                .map_err(|e| SpeakClipError::Recorder(e.to_string()))?;
        }
        self.shared
            .events
            .send(RecorderEvent::Stopped)
            .map_err(|e| SpeakClipError::Recorder(e.to_string()))
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    shared: &Arc<CaptureShared>,
) -> Result<Stream>
where
    T: SizedSample,
    i16: FromSample<T>,
{
    let data_shared = Arc::clone(shared);
    let error_events = shared.events.clone();

    device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| data_shared.push(data),
            move |err| {
                let _ = error_events.send(RecorderEvent::Error(err.to_string()));
            },
            None,
        )
        .map_err(|e| SpeakClipError::Device(format!("Failed to open capture stream: {}", e)))
}
