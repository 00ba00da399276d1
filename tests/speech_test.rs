//! Speak button and shared utterance tests

mod common;

use common::{sample_voices, voice, Harness};
use speakclip::input::Command;
use speakclip::state::config::Config;

#[test]
fn test_speak_uses_text_and_selected_voice() {
    let mut harness = Harness::new(sample_voices());
    harness.app.page.text.set_value("Hello there");
    harness.app.select_voice(1).unwrap();

    assert!(harness.app.click_speak().unwrap());

    let log = harness.synth.borrow();
    assert_eq!(log.spoken.len(), 1);
    assert_eq!(log.spoken[0].text, "Hello there");
    assert_eq!(log.spoken[0].voice.as_ref().unwrap().name, "B");
}

#[test]
fn test_voice_resolved_against_fresh_catalog() {
    let mut harness = Harness::new(sample_voices());
    harness.app.page.text.set_value("hi");
    harness.app.select_voice(1).unwrap();

    // Catalog reordered after the list was built
    harness.synth.borrow_mut().voices = vec![
        voice("B", "fr-FR", false),
        voice("Z", "ja-JP", false),
    ];
    harness.app.click_speak().unwrap();

    let log = harness.synth.borrow();
    assert_eq!(log.spoken[0].voice.as_ref().unwrap().name, "Z");
}

#[test]
fn test_empty_text_is_not_spoken() {
    let mut harness = Harness::new(sample_voices());
    assert!(!harness.app.click_speak().unwrap());
    assert!(harness.synth.borrow().spoken.is_empty());
}

#[test]
fn test_whitespace_text_is_spoken() {
    let mut harness = Harness::new(sample_voices());
    harness.app.page.text.set_value(" ");
    assert!(harness.app.click_speak().unwrap());
    assert_eq!(harness.synth.borrow().spoken[0].text, " ");
}

#[test]
fn test_utterance_overwritten_on_each_request() {
    let mut harness = Harness::new(sample_voices());
    harness.app.page.text.set_value("first");
    harness.app.select_voice(1).unwrap();
    harness.app.click_speak().unwrap();

    // Selected position no longer exists in the catalog
    harness.synth.borrow_mut().voices.truncate(1);
    harness.app.page.text.set_value("second");
    harness.app.click_speak().unwrap();

    let utterance = harness.app.trigger.utterance();
    assert_eq!(utterance.text, "second");
    assert!(utterance.voice.is_none());

    let log = harness.synth.borrow();
    assert_eq!(log.spoken.len(), 2);
    assert_eq!(log.spoken[0].text, "first");
}

#[test]
fn test_voice_selection_updates_utterance() {
    let mut harness = Harness::new(sample_voices());
    harness.app.select_voice(1).unwrap();
    assert_eq!(
        harness.app.trigger.utterance().voice.as_ref().unwrap().name,
        "B"
    );
    assert!(harness.synth.borrow().spoken.is_empty());
}

#[test]
fn test_unknown_voice_value() {
    let mut harness = Harness::new(sample_voices());
    let outcome = harness.app.dispatch(Command::SelectVoice(7)).unwrap();
    assert!(matches!(outcome, speakclip::state::Outcome::Show(_)));
    assert_eq!(harness.app.page.voices.selected_value(), Some(0));
}

#[test]
fn test_speech_settings_applied_from_config() {
    let mut config = Config::default();
    config.set("speech", "rate", "70");
    config.set("speech", "volume", "40");

    let harness = Harness::with_config(sample_voices(), config);
    let log = harness.synth.borrow();
    assert_eq!(log.rate, Some(70));
    assert_eq!(log.volume, Some(40));
}

#[test]
fn test_default_speech_settings_left_alone() {
    let harness = Harness::new(sample_voices());
    let log = harness.synth.borrow();
    assert_eq!(log.rate, None);
    assert_eq!(log.volume, None);
}
