use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-facing commands that keys can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    NextTab,
    PrevTab,
    ShowHome,
    ShowDiscover,
    ShowMoments,
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
    Today,
    RefreshWeather,
    RefreshRecommendations,
    ClearStatus,
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

impl KeyBindings {
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        self.get(&vec![key]).copied()
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("empty key: {raw}"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Parses `<a><Ctrl-b>`-style sequences into key events.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        let raw = raw.strip_suffix('>').unwrap_or(raw);
        raw
    } else {
        raw
    };
    let sequences = raw
        .split("><")
        .map(|seq| {
            if let Some(s) = seq.strip_prefix('<') {
                s
            } else if let Some(s) = seq.strip_suffix('>') {
                s
            } else {
                seq
            }
        })
        .collect::<Vec<_>>();

    sequences.into_iter().map(parse_key_event).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("<q>", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()))]
    #[case("<Ctrl-c>", KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    #[case("<Tab>", KeyEvent::new(KeyCode::Tab, KeyModifiers::empty()))]
    #[case("<BackTab>", KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))]
    #[case("<Left>", KeyEvent::new(KeyCode::Left, KeyModifiers::empty()))]
    #[case("<1>", KeyEvent::new(KeyCode::Char('1'), KeyModifiers::empty()))]
    #[case("<Esc>", KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()))]
    #[case(
        "<Ctrl-Alt-x>",
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT)
    )]
    fn test_parse_single_key(#[case] raw: &str, #[case] expected: KeyEvent) {
        assert_eq!(parse_key_sequence(raw), Ok(vec![expected]));
    }

    #[test]
    fn test_parse_multiple_keys() {
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
            ])
        );
    }

    #[rstest]
    #[case("<unknown>")]
    #[case("<q")]
    fn test_parse_invalid(#[case] raw: &str) {
        assert!(parse_key_sequence(raw).is_err());
    }

    #[test]
    fn test_deserialize_keybindings() -> Result<(), json5::Error> {
        let bindings: KeyBindings = json5::from_str(r#"{ "<r>": "RefreshWeather", "<q>": "Quit" }"#)?;
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty())),
            Some(Action::RefreshWeather)
        );
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty())),
            None
        );
        Ok(())
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::RefreshWeather.to_string(), "RefreshWeather");
    }
}
