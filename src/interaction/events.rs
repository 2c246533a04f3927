use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::tooling::{EditMode, Tool};

/// Which of the two side-by-side heatmaps an event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    #[default]
    Primary,
    Secondary,
}

impl ViewId {
    pub const ALL: [ViewId; 2] = [ViewId::Primary, ViewId::Secondary];

    pub const fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Ctrl on most platforms, cmd on macOS.
    pub const fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Shift,
    Control,
    Meta,
    Alt,
}

impl Key {
    pub const fn is_command(self) -> bool {
        matches!(self, Self::Control | Self::Meta)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Enter => f.write_str("enter"),
            Self::Escape => f.write_str("escape"),
            Self::Shift => f.write_str("shift"),
            Self::Control => f.write_str("control"),
            Self::Meta => f.write_str("meta"),
            Self::Alt => f.write_str("alt"),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c));
        }
        match text.to_ascii_lowercase().as_str() {
            "enter" | "return" => Ok(Self::Enter),
            "escape" | "esc" => Ok(Self::Escape),
            "shift" => Ok(Self::Shift),
            "control" | "ctrl" => Ok(Self::Control),
            "meta" | "cmd" | "command" => Ok(Self::Meta),
            "alt" | "option" => Ok(Self::Alt),
            other => Err(format!("unknown key `{other}`")),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

/// Typed pointer, keyboard and menu input, in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        #[serde(default)]
        view: ViewId,
        position: Point,
        #[serde(default)]
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        #[serde(default)]
        view: ViewId,
        position: Point,
        #[serde(default)]
        primary_held: bool,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        #[serde(default)]
        view: ViewId,
        position: Point,
        #[serde(default)]
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Wheel {
        #[serde(default)]
        view: ViewId,
        position: Point,
        delta_y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyUp {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    SelectTool {
        tool: Tool,
    },
    SelectMode {
        mode: EditMode,
    },
}

impl InputEvent {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp { .. } => "pointer_up",
            Self::Wheel { .. } => "wheel",
            Self::KeyDown { .. } => "key_down",
            Self::KeyUp { .. } => "key_up",
            Self::SelectTool { .. } => "select_tool",
            Self::SelectMode { .. } => "select_mode",
        }
    }
}
