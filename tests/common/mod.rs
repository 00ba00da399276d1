//! In-memory stand-ins for the speech engine, audio devices, prompts and playback

#![allow(dead_code)]

use crossbeam_channel::Sender;
use speakclip::clips::{ClipPlayer, ClipRegistry, ObjectUrlStore};
use speakclip::input::Prompter;
use speakclip::page::Page;
use speakclip::recorder::{
    DeviceInfo, DeviceKind, MediaDevices, Recorder, RecorderEvent, RecorderOptions,
};
use speakclip::speech::{Synth, Utterance, Voice};
use speakclip::state::config::Config;
use speakclip::state::App;
use speakclip::{Result, SpeakClipError};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

pub const FAKE_MIME: &str = "audio/ogg; codecs=opus";

/// Everything the fake synthesizer was asked to do
#[derive(Default)]
pub struct SynthLog {
    pub voices: Vec<Voice>,
    pub spoken: Vec<Utterance>,
    pub cancels: usize,
    pub rate: Option<u8>,
    pub volume: Option<u8>,
    pub supports_notifications: bool,
    pub notify: Option<Sender<()>>,
}

pub struct FakeSynth {
    log: Rc<RefCell<SynthLog>>,
}

impl FakeSynth {
    pub fn new(voices: Vec<Voice>) -> (Self, Rc<RefCell<SynthLog>>) {
        let log = Rc::new(RefCell::new(SynthLog {
            voices,
            ..SynthLog::default()
        }));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl Synth for FakeSynth {
    fn voices(&self) -> Result<Vec<Voice>> {
        Ok(self.log.borrow().voices.clone())
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        self.log.borrow_mut().spoken.push(utterance.clone());
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        self.log.borrow_mut().cancels += 1;
        Ok(())
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        self.log.borrow_mut().rate = Some(rate);
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        self.log.borrow_mut().volume = Some(volume);
        Ok(())
    }

    fn watch_voices(&mut self, notify: Sender<()>) -> bool {
        let mut log = self.log.borrow_mut();
        if log.supports_notifications {
            log.notify = Some(notify);
        }
        log.supports_notifications
    }
}

/// What the fake recorder saw
#[derive(Default)]
pub struct RecorderLog {
    pub opened: Option<DeviceInfo>,
    pub starts: usize,
    pub stops: usize,
}

pub struct FakeDevices {
    pub devices: Vec<DeviceInfo>,
    pub enumerate_error: Option<String>,
    pub log: Rc<RefCell<RecorderLog>>,
}

impl FakeDevices {
    pub fn new(devices: Vec<DeviceInfo>) -> Self {
        Self {
            devices,
            enumerate_error: None,
            log: Rc::new(RefCell::new(RecorderLog::default())),
        }
    }

    pub fn with_microphone() -> Self {
        Self::new(vec![
            device("speakers", DeviceKind::AudioOutput),
            device("mic-1", DeviceKind::AudioInput),
            device("mic-2", DeviceKind::AudioInput),
        ])
    }
}

impl MediaDevices for FakeDevices {
    fn enumerate_devices(&self) -> Result<Vec<DeviceInfo>> {
        match &self.enumerate_error {
            Some(message) => Err(SpeakClipError::Device(message.clone())),
            None => Ok(self.devices.clone()),
        }
    }

    fn open_recorder(
        &self,
        device: &DeviceInfo,
        _events: Sender<RecorderEvent>,
        _options: &RecorderOptions,
    ) -> Result<Box<dyn Recorder>> {
        self.log.borrow_mut().opened = Some(device.clone());
        Ok(Box::new(FakeRecorder {
            log: Rc::clone(&self.log),
        }))
    }
}

pub struct FakeRecorder {
    log: Rc<RefCell<RecorderLog>>,
}

impl Recorder for FakeRecorder {
    fn start(&mut self) -> Result<()> {
        self.log.borrow_mut().starts += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.log.borrow_mut().stops += 1;
        Ok(())
    }

    fn mime_type(&self) -> &str {
        FAKE_MIME
    }
}

pub fn device(name: &str, kind: DeviceKind) -> DeviceInfo {
    DeviceInfo {
        id: format!("id-{}", name),
        label: name.to_string(),
        kind,
    }
}

/// Answers prompts from a script and remembers the questions
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[Option<&str>]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front().flatten()
    }
}

pub struct FakePlayer {
    pub played: Rc<RefCell<Vec<PathBuf>>>,
    pub stops: Rc<Cell<usize>>,
}

impl ClipPlayer for FakePlayer {
    fn play(&mut self, path: &Path) -> Result<()> {
        self.played.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn stop(&mut self) {
        self.stops.set(self.stops.get() + 1);
    }
}

/// A running app plus handles for inspecting its fakes
pub struct Harness {
    pub app: App,
    pub synth: Rc<RefCell<SynthLog>>,
    pub played: Rc<RefCell<Vec<PathBuf>>>,
    pub player_stops: Rc<Cell<usize>>,
    pub downloads: TempDir,
}

impl Harness {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self::with_config(voices, Config::default())
    }

    pub fn with_config(voices: Vec<Voice>, config: Config) -> Self {
        let (synth, synth_log) = FakeSynth::new(voices);
        let downloads = tempfile::tempdir().unwrap();
        let registry = ClipRegistry::new(ObjectUrlStore::new().unwrap(), downloads.path());
        let played = Rc::new(RefCell::new(Vec::new()));
        let player_stops = Rc::new(Cell::new(0));
        let player = FakePlayer {
            played: Rc::clone(&played),
            stops: Rc::clone(&player_stops),
        };

        let app = App::new(config, Box::new(synth), Page::new(registry), Box::new(player));
        Self {
            app,
            synth: synth_log,
            played,
            player_stops,
            downloads,
        }
    }

    /// Harness whose recorder opened on a fake microphone
    pub fn recording(voices: Vec<Voice>) -> (Self, FakeDevices) {
        let mut harness = Self::new(voices);
        let devices = FakeDevices::with_microphone();
        let (tx, _rx) = crossbeam_channel::unbounded();
        harness.app.init_recorder(&devices, tx);
        assert!(harness.app.recorder.is_some());
        (harness, devices)
    }

    /// Feed one recorder event, answering any prompt with `answer`
    pub fn deliver(&mut self, event: RecorderEvent, answer: Option<&str>) {
        let mut prompter = ScriptedPrompter::answering(&[answer]);
        self.app
            .handle_recorder_event(event, &mut prompter)
            .unwrap();
    }
}

pub fn voice(name: &str, lang: &str, is_default: bool) -> Voice {
    Voice::new(format!("id-{}", name), name, lang, is_default)
}

pub fn sample_voices() -> Vec<Voice> {
    vec![voice("A", "en-US", true), voice("B", "fr-FR", false)]
}
