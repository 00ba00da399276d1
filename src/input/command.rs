//! Console commands
//!
//! Each command stands for one interaction with the page: typing into the
//! text box, clicking a button or picking from a list.

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  text <words>    set the text to speak
  speak           read the text aloud
  voices          list available voices
  voice <n>       select voice n
  record          start recording (and speak the text)
  stop            stop recording and name the clip
  clips           list recorded clips
  play <n>        play clip n
  hush            stop clip playback
  download <n>    save clip n as <name>.ogg
  delete <n>      remove clip n
  show            show the whole page
  help            show this help
  quit            exit";

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetText(String),
    Speak,
    ListVoices,
    SelectVoice(usize),
    Record,
    Stop,
    ListClips,
    Play(usize),
    /// Stop whatever clip is playing
    Hush,
    Download(usize),
    Delete(usize),
    Show,
    Help,
    Quit,
    /// Blank line
    Empty,
    /// Anything that does not parse, with the reason
    Invalid(String),
}

impl Command {
    /// Parse one line of input
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Command::Empty;
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            // Keep the text exactly as typed after the separating space
            "text" => Command::SetText(rest.to_string()),
            "speak" => Command::Speak,
            "voices" => Command::ListVoices,
            "voice" => number(rest).map_or_else(Command::Invalid, Command::SelectVoice),
            "record" => Command::Record,
            "stop" => Command::Stop,
            "clips" => Command::ListClips,
            "play" => number(rest).map_or_else(Command::Invalid, Command::Play),
            "hush" => Command::Hush,
            "download" => number(rest).map_or_else(Command::Invalid, Command::Download),
            "delete" => number(rest).map_or_else(Command::Invalid, Command::Delete),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Invalid(format!("Unknown command '{}' (try 'help')", other)),
        }
    }
}

fn number(arg: &str) -> Result<usize, String> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err("Missing number".to_string());
    }
    arg.parse()
        .map_err(|_| format!("'{}' is not a number", arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keeps_inner_spacing() {
        assert_eq!(
            Command::parse("text hello  world \n"),
            Command::SetText("hello  world ".to_string())
        );
        assert_eq!(Command::parse("text"), Command::SetText(String::new()));
    }

    #[test]
    fn test_numeric_args() {
        assert_eq!(Command::parse("voice 3"), Command::SelectVoice(3));
        assert_eq!(Command::parse("DELETE 2"), Command::Delete(2));
        assert!(matches!(Command::parse("play x"), Command::Invalid(_)));
        assert!(matches!(Command::parse("download"), Command::Invalid(_)));
    }
}
