use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::core::state::{Control, ControlState};

/// Button emphasis, named after the framework's semantic classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Primary,
    Success,
    Danger,
}

impl Emphasis {
    pub const ALL: [Emphasis; 3] = [Emphasis::Primary, Emphasis::Success, Emphasis::Danger];

    pub fn class_name(self) -> &'static str {
        match self {
            Emphasis::Primary => "btn-primary",
            Emphasis::Success => "btn-success",
            Emphasis::Danger => "btn-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    ThumbsUp,
    ThumbsDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconVariant {
    Outline,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Icon {
    pub glyph: Glyph,
    pub variant: IconVariant,
}

impl Icon {
    pub fn class_name(self) -> &'static str {
        match (self.glyph, self.variant) {
            (Glyph::ThumbsUp, IconVariant::Outline) => "bi-hand-thumbs-up",
            (Glyph::ThumbsUp, IconVariant::Fill) => "bi-hand-thumbs-up-fill",
            (Glyph::ThumbsDown, IconVariant::Outline) => "bi-hand-thumbs-down",
            (Glyph::ThumbsDown, IconVariant::Fill) => "bi-hand-thumbs-down-fill",
        }
    }

    /// Both variants of this icon's glyph
    pub fn variants(self) -> [Icon; 2] {
        [IconVariant::Outline, IconVariant::Fill].map(|variant| Icon {
            glyph: self.glyph,
            variant,
        })
    }

    /// Terminal rendering of the icon
    pub fn symbol(self) -> &'static str {
        match (self.glyph, self.variant) {
            (Glyph::ThumbsUp, IconVariant::Outline) => "△",
            (Glyph::ThumbsUp, IconVariant::Fill) => "▲",
            (Glyph::ThumbsDown, IconVariant::Outline) => "▽",
            (Glyph::ThumbsDown, IconVariant::Fill) => "▼",
        }
    }
}

/// Declarative style of one control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlPresentation {
    pub emphasis: Emphasis,
    pub icon: Icon,
}

impl ControlPresentation {
    pub fn is_emphasized(&self) -> bool {
        self.emphasis != Emphasis::Primary
    }
}

pub fn accent(control: Control) -> Emphasis {
    match control {
        Control::Like => Emphasis::Success,
        Control::Dislike => Emphasis::Danger,
    }
}

pub fn glyph(control: Control) -> Glyph {
    match control {
        Control::Like => Glyph::ThumbsUp,
        Control::Dislike => Glyph::ThumbsDown,
    }
}

/// Map a control's state to its presentation.
///
/// A committed control always shows its accent with a filled icon. A neutral
/// control shows the same while hovered and falls back to the primary
/// emphasis with an outline icon otherwise.
pub fn present(control: Control, state: &ControlState) -> ControlPresentation {
    let emphasized = state.is_committed() || state.is_hovered();
    let (emphasis, variant) = if emphasized {
        (accent(control), IconVariant::Fill)
    } else {
        (Emphasis::Primary, IconVariant::Outline)
    };
    ControlPresentation {
        emphasis,
        icon: Icon {
            glyph: glyph(control),
            variant,
        },
    }
}
