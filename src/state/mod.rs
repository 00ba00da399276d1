//! Application state
//!
//! `App` ties the page to the speech engine, the recorder and the clip
//! player. Every user action and platform notification is handled here,
//! one at a time, on the UI thread.

pub mod config;

use crate::clips::ClipPlayer;
use crate::input::{Command, Prompter, HELP};
use crate::page::{render_clips, render_page, render_voices, Page};
use crate::recorder::{MediaDevices, RecorderEvent, RecordingController};
use crate::speech::{populate_voice_list, SpeechTrigger, Synth};
use crate::Result;
use config::Config;
use crossbeam_channel::Sender;
use log::{debug, error, info, warn};
use std::path::PathBuf;

/// What the event loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Print this text and continue
    Show(String),
    Quit,
}

/// Central state of the running program
pub struct App {
    /// Configuration loaded from ~/.speakclip.cfg
    pub config: Config,

    /// Speech synthesizer used for every utterance
    pub synth: Box<dyn Synth>,

    /// All controls and the clip list
    pub page: Page,

    /// Owner of the shared utterance
    pub trigger: SpeechTrigger,

    /// Recording controller; `None` until setup succeeds
    pub recorder: Option<RecordingController>,

    player: Box<dyn ClipPlayer>,
}

impl App {
    /// Build the app, apply speech settings and fill the voice list
    pub fn new(
        config: Config,
        mut synth: Box<dyn Synth>,
        page: Page,
        player: Box<dyn ClipPlayer>,
    ) -> Self {
        if let Some(rate) = config.rate() {
            if let Err(e) = synth.set_rate(rate) {
                warn!("Could not apply rate {}: {}", rate, e);
            }
        }
        if let Some(volume) = config.volume() {
            if let Err(e) = synth.set_volume(volume) {
                warn!("Could not apply volume {}: {}", volume, e);
            }
        }

        let mut app = Self {
            config,
            synth,
            page,
            trigger: SpeechTrigger::new(),
            recorder: None,
            player,
        };
        app.refresh_voices();
        app
    }

    /// Subscribe to voice catalog changes, if the platform reports them
    pub fn watch_voices(&mut self, notify: Sender<()>) -> bool {
        let supported = self.synth.watch_voices(notify);
        if !supported {
            info!("Voice catalog change notifications unavailable");
        }
        supported
    }

    /// Rebuild the voice list from the current catalog
    pub fn refresh_voices(&mut self) -> usize {
        populate_voice_list(self.synth.as_ref(), &mut self.page.voices)
    }

    /// Open the microphone for recording
    ///
    /// Failures are logged and leave recording unavailable; everything else
    /// keeps working.
    pub fn init_recorder(&mut self, devices: &dyn MediaDevices, events: Sender<RecorderEvent>) {
        let options = self.config.recorder_options();
        let preferred = self.config.input_device();

        match RecordingController::setup(devices, events, &options, preferred.as_deref()) {
            Ok(controller) => {
                info!("Recorder ready");
                self.recorder = Some(controller);
            }
            Err(e) => error!("The following error occurred: {}", e),
        }
    }

    /// A stopped session is still waiting for its last recorder events
    pub fn is_finishing(&self) -> bool {
        self.recorder.as_ref().is_some_and(|r| r.is_finishing())
    }

    pub fn download_dir(&self) -> PathBuf {
        self.page.recordings.download_dir().to_path_buf()
    }

    /// Perform one console command
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::SetText(text) => {
                self.page.text.set_value(text);
                Ok(Outcome::Continue)
            }
            Command::Speak => {
                self.click_speak()?;
                Ok(Outcome::Continue)
            }
            Command::ListVoices => Ok(Outcome::Show(render_voices(&self.page.voices))),
            Command::SelectVoice(value) => self.select_voice(value),
            Command::Record => {
                self.click_record()?;
                Ok(Outcome::Continue)
            }
            Command::Stop => {
                self.click_stop()?;
                Ok(Outcome::Continue)
            }
            Command::ListClips => Ok(Outcome::Show(render_clips(&self.page.recordings))),
            Command::Play(position) => {
                self.page.recordings.play(position, self.player.as_mut())?;
                Ok(Outcome::Continue)
            }
            Command::Hush => {
                self.player.stop();
                Ok(Outcome::Continue)
            }
            Command::Download(position) => {
                let path = self.page.recordings.download(position)?;
                Ok(Outcome::Show(format!("Saved {}", path.display())))
            }
            Command::Delete(position) => {
                let entry = self.page.recordings.delete(position)?;
                Ok(Outcome::Show(format!("Deleted {}", entry.name)))
            }
            Command::Show => Ok(Outcome::Show(render_page(&self.page))),
            Command::Help => Ok(Outcome::Show(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
            Command::Empty => Ok(Outcome::Continue),
            Command::Invalid(reason) => Ok(Outcome::Show(reason)),
        }
    }

    /// Speak button: read the text field with the selected voice
    pub fn click_speak(&mut self) -> Result<bool> {
        if !self.page.speak.enabled {
            debug!("Speak button is disabled");
            return Ok(false);
        }
        self.speak_current()
    }

    fn speak_current(&mut self) -> Result<bool> {
        self.trigger.speak(
            self.page.text.value(),
            self.page.voices.selected_value(),
            self.synth.as_mut(),
        )
    }

    /// Voice list change: select `value` and point the utterance at it
    pub fn select_voice(&mut self, value: usize) -> Result<Outcome> {
        if !self.page.voices.select(value) {
            return Ok(Outcome::Show(format!("No voice {}", value)));
        }
        self.trigger
            .select_voice(self.page.voices.selected_value(), self.synth.as_ref());
        Ok(Outcome::Continue)
    }

    /// Record button: start capture and speak the current text
    pub fn click_record(&mut self) -> Result<()> {
        if !self.page.record.enabled {
            debug!("Record button is disabled");
            return Ok(());
        }
        let Some(controller) = self.recorder.as_mut() else {
            warn!("Recording is unavailable");
            return Ok(());
        };

        controller.start(&mut self.page)?;
        self.speak_current()?;
        Ok(())
    }

    /// Stop button: end capture and silence speech
    pub fn click_stop(&mut self) -> Result<()> {
        if !self.page.stop.enabled {
            debug!("Stop button is disabled");
            return Ok(());
        }
        let Some(controller) = self.recorder.as_mut() else {
            warn!("Recording is unavailable");
            return Ok(());
        };

        controller.stop(&mut self.page)?;
        self.synth.cancel()?;
        Ok(())
    }

    /// Recorder notification: collect data, or file the finished clip
    pub fn handle_recorder_event(
        &mut self,
        event: RecorderEvent,
        prompter: &mut dyn Prompter,
    ) -> Result<()> {
        let Some(controller) = self.recorder.as_mut() else {
            warn!("Recorder event without a recorder: {:?}", event);
            return Ok(());
        };

        if let Some(clip) = controller.handle_event(event, prompter) {
            self.page.recordings.add(clip.name, clip.blob)?;
        }
        Ok(())
    }

    /// Voice catalog changed: rebuild the list
    pub fn handle_voices_changed(&mut self) {
        let count = self.refresh_voices();
        info!("Voice catalog changed, {} voices", count);
    }
}
