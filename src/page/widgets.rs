//! Page controls: text field, buttons and the voice list

/// Visual state of a button
///
/// `Ready` is the green "go" styling, `Active` the red one shown while a
/// recording is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Ready,
    Active,
}

/// A clickable control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub enabled: bool,
    pub style: ButtonStyle,
}

impl Button {
    pub fn new(label: &'static str, enabled: bool) -> Self {
        Self {
            label,
            enabled,
            style: ButtonStyle::Ready,
        }
    }
}

/// Single line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// One entry of the voice list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOption {
    /// Text shown to the user
    pub label: String,

    /// Position of the voice in the catalog fetched when the list was built
    pub value: usize,

    pub name: String,
    pub lang: String,
}

/// Drop-down style list of voices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceSelect {
    options: Vec<VoiceOption>,
    selected: Option<usize>,
}

impl VoiceSelect {
    pub fn options(&self) -> &[VoiceOption] {
        &self.options
    }

    /// Discard every option and install `options`; the first one becomes selected
    pub fn replace_options(&mut self, options: Vec<VoiceOption>) {
        self.selected = if options.is_empty() { None } else { Some(0) };
        self.options = options;
    }

    /// Select the option whose value is `value`; false when there is none
    pub fn select(&mut self, value: usize) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(pos) => {
                self.selected = Some(pos);
                true
            }
            None => false,
        }
    }

    /// Value of the selected option
    pub fn selected_value(&self) -> Option<usize> {
        self.selected
            .and_then(|pos| self.options.get(pos))
            .map(|o| o.value)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: usize) -> VoiceOption {
        VoiceOption {
            label: format!("V{} (en)", value),
            value,
            name: format!("V{}", value),
            lang: "en".to_string(),
        }
    }

    #[test]
    fn test_replace_selects_first() {
        let mut select = VoiceSelect::default();
        assert_eq!(select.selected_value(), None);

        select.replace_options(vec![option(0), option(1)]);
        assert_eq!(select.selected_value(), Some(0));

        assert!(select.select(1));
        assert_eq!(select.selected_value(), Some(1));

        select.replace_options(vec![option(0)]);
        assert_eq!(select.selected_value(), Some(0));

        select.replace_options(Vec::new());
        assert_eq!(select.selected_value(), None);
    }

    #[test]
    fn test_select_unknown_value() {
        let mut select = VoiceSelect::default();
        select.replace_options(vec![option(0)]);
        assert!(!select.select(5));
        assert_eq!(select.selected_value(), Some(0));
    }
}
