//! In-memory page: the controls the user interacts with

pub mod render;
pub mod widgets;

use crate::clips::ClipRegistry;

pub use render::{render_clips, render_page, render_voices};
pub use widgets::{Button, ButtonStyle, TextField, VoiceOption, VoiceSelect};

/// Every control on the page
pub struct Page {
    /// Text to read aloud
    pub text: TextField,

    pub speak: Button,
    pub record: Button,
    pub stop: Button,

    /// Available voices
    pub voices: VoiceSelect,

    /// Recorded clips, oldest first
    pub recordings: ClipRegistry,
}

impl Page {
    /// Fresh page: record enabled, stop disabled, no voices or clips
    pub fn new(recordings: ClipRegistry) -> Self {
        Self {
            text: TextField::default(),
            speak: Button::new("Speak", true),
            record: Button::new("Record", true),
            stop: Button::new("Stop", false),
            voices: VoiceSelect::default(),
            recordings,
        }
    }
}
