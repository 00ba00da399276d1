//! Voice list population

use super::Synth;
use crate::page::{VoiceOption, VoiceSelect};
use log::{debug, warn};

/// Rebuild `select` from the voices the platform reports right now
///
/// The list is replaced wholesale; each option's value is the voice's
/// position in the fetched catalog. A catalog that cannot be read is
/// treated as empty. Returns the number of options.
pub fn populate_voice_list(synth: &dyn Synth, select: &mut VoiceSelect) -> usize {
    let voices = synth.voices().unwrap_or_else(|e| {
        warn!("Could not read voice catalog: {}", e);
        Vec::new()
    });

    let options: Vec<VoiceOption> = voices
        .iter()
        .enumerate()
        .map(|(index, voice)| VoiceOption {
            label: voice.label(),
            value: index,
            name: voice.name.clone(),
            lang: voice.language.clone(),
        })
        .collect();

    debug!("Populated voice list with {} voices", options.len());
    select.replace_options(options);
    select.len()
}
