//! Voice descriptors reported by the speech platform

/// A synthesis voice as reported by the platform
///
/// Owned by the platform; callers keep positions into a freshly fetched
/// list rather than long-lived copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Backend-specific identifier used to select the voice again
    pub id: String,

    /// Human readable name
    pub name: String,

    /// Language tag, e.g. "en-US"
    pub language: String,

    /// Whether the platform marks this voice as its default
    pub is_default: bool,
}

impl Voice {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
        is_default: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language: language.into(),
            is_default,
        }
    }

    /// Label shown in the voice list: `"<name> (<language>)"`, with
    /// `" -- DEFAULT"` appended for the platform default
    pub fn label(&self) -> String {
        let mut label = format!("{} ({})", self.name, self.language);
        if self.is_default {
            label.push_str(" -- DEFAULT");
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_plain() {
        let voice = Voice::new("b", "B", "fr-FR", false);
        assert_eq!(voice.label(), "B (fr-FR)");
    }

    #[test]
    fn test_label_default() {
        let voice = Voice::new("a", "A", "en-US", true);
        assert_eq!(voice.label(), "A (en-US) -- DEFAULT");
    }
}
