use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| {
                parse_style(&raw)
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Named style, or the terminal default when it is not configured.
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parses `"bold light_magenta on black"`-style descriptions.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let lowered = line.to_lowercase();
    let (foreground, background) = match lowered.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None if lowered.starts_with("on ") => ("", lowered.strip_prefix("on ")),
        None => (lowered.as_str(), None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => style = style.fg(parse_color(word)?),
        }
    }
    if let Some(background) = background {
        style = style.bg(parse_color(background.trim())?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    Color::from_str(word).map_err(|_| format!("unknown color: {word}"))
}
