use serde::{Deserialize, Serialize};

use crate::model::MaskOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    #[default]
    Hand,
    Point,
    Select,
    Shape,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Hand, Tool::Point, Tool::Select, Tool::Shape];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hand => "Hand",
            Self::Point => "Point",
            Self::Select => "Select",
            Self::Shape => "Shape",
        }
    }

    pub const fn shortcut(self) -> char {
        match self {
            Self::Hand => '1',
            Self::Point => '2',
            Self::Select => '3',
            Self::Shape => '4',
        }
    }

    pub const fn cursor(self) -> Cursor {
        match self {
            Self::Hand => Cursor::Grab,
            Self::Point => Cursor::Pointer,
            Self::Select | Self::Shape => Cursor::Crosshair,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Mask,
    Erase,
    View,
}

impl EditMode {
    pub const ALL: [EditMode; 3] = [EditMode::Mask, EditMode::Erase, EditMode::View];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mask => "Mask",
            Self::Erase => "Erase",
            Self::View => "View",
        }
    }

    pub const fn shortcut(self) -> char {
        match self {
            Self::Mask => 'm',
            Self::Erase => 'e',
            Self::View => 'v',
        }
    }

    /// What a committed batch does to the mask; `None` in view mode.
    pub const fn mask_op(self) -> Option<MaskOp> {
        match self {
            Self::Mask => Some(MaskOp::Add),
            Self::Erase => Some(MaskOp::Remove),
            Self::View => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Default,
    Pointer,
    Crosshair,
    Grab,
    Grabbing,
}

/// Snapshot of the process-wide mode and tool, handed to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pub mode: EditMode,
    pub tool: Tool,
}

impl InteractionState {
    pub const fn new(mode: EditMode, tool: Tool) -> Self {
        Self { mode, tool }
    }

    /// The hand tool never edits, whatever the mode.
    pub const fn mask_op(self) -> Option<MaskOp> {
        match self.tool {
            Tool::Hand => None,
            _ => self.mode.mask_op(),
        }
    }

    pub const fn cursor(self) -> Cursor {
        match (self.mode, self.tool) {
            (EditMode::View, Tool::Point | Tool::Select | Tool::Shape) => Cursor::Default,
            (_, tool) => tool.cursor(),
        }
    }
}

pub fn tool_shortcut(text: char) -> Option<Tool> {
    Tool::ALL.into_iter().find(|tool| tool.shortcut() == text)
}

pub fn mode_shortcut(text: char) -> Option<EditMode> {
    let text = text.to_ascii_lowercase();
    EditMode::ALL.into_iter().find(|mode| mode.shortcut() == text)
}
