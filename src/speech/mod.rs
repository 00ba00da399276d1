//! Speech synthesis: voice catalog, shared utterance and the speak trigger

pub mod backends;
pub mod catalog;
pub mod synth;
pub mod trigger;
pub mod utterance;
pub mod voice;

pub use catalog::populate_voice_list;
pub use synth::{create_synth, Synth};
pub use trigger::SpeechTrigger;
pub use utterance::Utterance;
pub use voice::Voice;
