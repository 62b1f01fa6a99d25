//! Typed input events delivered by the host page
//!
//! The host maps its own event objects (clipboard events, keyboard events,
//! button clicks) onto [`InputEvent`] before handing them to a session.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    /// Clipboard text pasted into the outline field
    Paste { text: String },

    /// Key pressed while the outline field has focus
    KeyPress {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },

    /// One of the form buttons was clicked
    Click { target: ClickTarget },
}

impl InputEvent {
    pub fn paste(text: impl Into<String>) -> Self {
        InputEvent::Paste { text: text.into() }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::KeyPress {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn key_with(key: Key, modifiers: Modifiers) -> Self {
        InputEvent::KeyPress { key, modifiers }
    }

    pub fn click(target: ClickTarget) -> Self {
        InputEvent::Click { target }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Key {
    Tab,
    Space,
    Enter,
    Char(char),
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Tab" => Key::Tab,
            " " | "Spacebar" => Key::Space,
            "Enter" => Key::Enter,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(key.to_string()),
                }
            }
        }
    }

    /// Whether this is the given letter, ignoring case
    pub fn is_letter(&self, letter: char) -> bool {
        matches!(self, Key::Char(c) if c.eq_ignore_ascii_case(&letter))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::NONE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClickTarget {
    Reset,
    LoadExample,
    Submit,
}

impl std::str::FromStr for ClickTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset" => Ok(ClickTarget::Reset),
            "loadExample" | "load-example" => Ok(ClickTarget::LoadExample),
            "submit" => Ok(ClickTarget::Submit),
            other => Err(format!("unknown click target: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("Tab"), Key::Tab);
        assert_eq!(Key::from_dom_key(" "), Key::Space);
        assert_eq!(Key::from_dom_key("Enter"), Key::Enter);
        assert_eq!(Key::from_dom_key("z"), Key::Char('z'));
        assert_eq!(Key::from_dom_key("ArrowUp"), Key::Other("ArrowUp".to_string()));
        assert!(Key::from_dom_key("Z").is_letter('z'));
    }

    #[test]
    fn test_event_json() {
        let event: InputEvent = serde_json::from_str(
            r#"{ "type": "keyPress", "key": "tab", "modifiers": { "shift": true } }"#,
        )
        .unwrap();
        assert_eq!(event, InputEvent::key_with(Key::Tab, Modifiers::shift()));

        let event: InputEvent =
            serde_json::from_str(r#"{ "type": "paste", "text": "a\n\tb" }"#).unwrap();
        assert_eq!(event, InputEvent::paste("a\n\tb"));

        let event: InputEvent =
            serde_json::from_str(r#"{ "type": "click", "target": "loadExample" }"#).unwrap();
        assert_eq!(event, InputEvent::click(ClickTarget::LoadExample));
    }
}
