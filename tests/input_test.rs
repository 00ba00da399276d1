//! Console command tests

mod common;

use common::{sample_voices, Harness};
use speakclip::input::{Command, HELP};
use speakclip::state::Outcome;

#[test]
fn test_command_parsing() {
    let cases = [
        ("speak", Command::Speak),
        ("  record", Command::Record),
        ("stop\r\n", Command::Stop),
        ("voices", Command::ListVoices),
        ("voice 1", Command::SelectVoice(1)),
        ("clips", Command::ListClips),
        ("play 2", Command::Play(2)),
        ("hush", Command::Hush),
        ("download 3", Command::Download(3)),
        ("delete 4", Command::Delete(4)),
        ("show", Command::Show),
        ("help", Command::Help),
        ("quit", Command::Quit),
        ("exit", Command::Quit),
        ("", Command::Empty),
        ("   ", Command::Empty),
        ("text Hello, world", Command::SetText("Hello, world".to_string())),
    ];

    for (line, expected) in cases {
        assert_eq!(Command::parse(line), expected, "parsing {:?}", line);
    }
}

#[test]
fn test_unknown_command() {
    match Command::parse("dance") {
        Command::Invalid(reason) => assert!(reason.contains("dance")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_dispatch_text_then_speak() {
    let mut harness = Harness::new(sample_voices());
    harness
        .app
        .dispatch(Command::parse("text good morning"))
        .unwrap();
    assert_eq!(harness.app.page.text.value(), "good morning");

    assert_eq!(
        harness.app.dispatch(Command::Speak).unwrap(),
        Outcome::Continue
    );
    assert_eq!(harness.synth.borrow().spoken[0].text, "good morning");
}

#[test]
fn test_dispatch_display_commands() {
    let mut harness = Harness::new(sample_voices());

    match harness.app.dispatch(Command::ListVoices).unwrap() {
        Outcome::Show(text) => assert!(text.contains("A (en-US) -- DEFAULT")),
        other => panic!("unexpected {:?}", other),
    }
    match harness.app.dispatch(Command::ListClips).unwrap() {
        Outcome::Show(text) => assert!(text.contains("no clips")),
        other => panic!("unexpected {:?}", other),
    }
    match harness.app.dispatch(Command::Show).unwrap() {
        Outcome::Show(text) => {
            assert!(text.contains("[Record] (ready, enabled)"));
            assert!(text.contains("[Stop] (ready, disabled)"));
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        harness.app.dispatch(Command::Help).unwrap(),
        Outcome::Show(HELP.to_string())
    );
    assert_eq!(harness.app.dispatch(Command::Quit).unwrap(), Outcome::Quit);
}
