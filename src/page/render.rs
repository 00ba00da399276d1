//! Text rendering of the page for the console

use super::{Button, ButtonStyle, Page, VoiceSelect};
use crate::clips::registry::{DELETE_LABEL, DOWNLOAD_LABEL};
use crate::clips::ClipRegistry;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Pad `text` with spaces to `width` display columns
fn pad(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(text.width())));
    padded
}

fn render_button(button: &Button) -> String {
    let style = match button.style {
        ButtonStyle::Ready => "ready",
        ButtonStyle::Active => "active",
    };
    let state = if button.enabled { "enabled" } else { "disabled" };
    format!("[{}] ({}, {})", button.label, style, state)
}

/// Voice list, one option per line, the selected one marked with `*`
pub fn render_voices(select: &VoiceSelect) -> String {
    if select.is_empty() {
        return "  (no voices available)\n".to_string();
    }

    let selected = select.selected_value();
    let mut out = String::new();
    for option in select.options() {
        let marker = if Some(option.value) == selected { '*' } else { ' ' };
        let _ = writeln!(out, " {} {:>3}  {}", marker, option.value, option.label);
    }
    out
}

/// Clip list, numbered from 1 in creation order
pub fn render_clips(registry: &ClipRegistry) -> String {
    if registry.is_empty() {
        return "  (no clips recorded)\n".to_string();
    }

    let width = registry
        .entries()
        .iter()
        .map(|e| e.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, entry) in registry.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            " {:>3}. {}  {}  {}  {}",
            i + 1,
            pad(&entry.name, width),
            entry.url,
            DELETE_LABEL,
            DOWNLOAD_LABEL
        );
    }
    out
}

/// Whole page snapshot
pub fn render_page(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Text: {:?}", page.text.value());
    let _ = writeln!(out, "Voices:");
    out.push_str(&render_voices(&page.voices));
    let _ = writeln!(
        out,
        "{}  {}  {}",
        render_button(&page.speak),
        render_button(&page.record),
        render_button(&page.stop)
    );
    let _ = writeln!(out, "Recordings:");
    out.push_str(&render_clips(&page.recordings));
    out
}
