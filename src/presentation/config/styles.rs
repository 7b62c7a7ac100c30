use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use crate::presentation::style::Emphasis;

/// Style entry as written in the configuration file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct StyleSpec {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
}

impl StyleSpec {
    fn into_style(self) -> Result<Style, String> {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(parse_color(&fg)?);
        }
        if let Some(bg) = self.bg {
            style = style.bg(parse_color(&bg)?);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        Ok(style)
    }
}

fn parse_color(raw: &str) -> Result<Color, String> {
    Color::from_str(raw.trim()).map_err(|_| format!("Unknown color: {raw}"))
}

/// Named styles: one per emphasis (`primary`, `success`, `danger`) plus `status`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, StyleSpec>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, spec)| {
                spec.into_style()
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    pub fn emphasis(&self, emphasis: Emphasis) -> Style {
        self.get(&emphasis.to_string())
            .copied()
            .unwrap_or_else(|| fallback(emphasis))
    }

    pub fn status(&self) -> Style {
        self.get("status")
            .copied()
            .unwrap_or_else(|| Style::default().fg(Color::Gray))
    }
}

fn fallback(emphasis: Emphasis) -> Style {
    let color = match emphasis {
        Emphasis::Primary => Color::Blue,
        Emphasis::Success => Color::Green,
        Emphasis::Danger => Color::Red,
    };
    Style::default().fg(color)
}
