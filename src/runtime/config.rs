use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::interaction::{DEFAULT_WHEEL_ZOOM_RATE, GridLayout, Rect, ViewId, ViewLayouts};
use crate::model::GridDims;

use super::view::DEFAULT_REPAINT_THRESHOLD;
use super::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side of one rendered cell in pixels, before zoom.
    pub cell_size: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Horizontal space between the two heatmaps.
    pub view_gap: f64,
    /// Change batches larger than this repaint the whole view.
    pub repaint_threshold: usize,
    pub wheel_zoom_rate: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cell_size: 6.0,
            viewport_width: 600.0,
            viewport_height: 400.0,
            view_gap: 20.0,
            repaint_threshold: DEFAULT_REPAINT_THRESHOLD,
            wheel_zoom_rate: DEFAULT_WHEEL_ZOOM_RATE,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("cell_size", self.cell_size),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AppError::Config(format!("`{name}` must be positive, got {value}")));
            }
        }
        if !(self.view_gap.is_finite() && self.view_gap >= 0.0) {
            return Err(AppError::Config(format!(
                "`view_gap` must be non-negative, got {}",
                self.view_gap
            )));
        }
        if !(self.wheel_zoom_rate.is_finite() && self.wheel_zoom_rate >= 0.0) {
            return Err(AppError::Config(format!(
                "`wheel_zoom_rate` must be non-negative, got {}",
                self.wheel_zoom_rate
            )));
        }
        Ok(())
    }

    /// Views sit side by side, primary on the left.
    pub fn viewport(&self, view: ViewId) -> Rect {
        let x = view.index() as f64 * (self.viewport_width + self.view_gap);
        Rect::new(x, 0.0, self.viewport_width, self.viewport_height)
    }

    pub fn layouts(&self, primary: GridDims, secondary: GridDims) -> ViewLayouts {
        ViewLayouts {
            primary: GridLayout::new(self.viewport(ViewId::Primary), primary, self.cell_size),
            secondary: GridLayout::new(self.viewport(ViewId::Secondary), secondary, self.cell_size),
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<SessionConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|error| AppError::Config(format!("{}: {error}", path.display())))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let parsed = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<SessionConfig>(&raw).map_err(|error| error.to_string())
    } else {
        serde_json::from_str::<SessionConfig>(&raw).map_err(|error| error.to_string())
    };
    let config =
        parsed.map_err(|message| AppError::Config(format!("{}: {message}", path.display())))?;
    config.validate()?;
    Ok(config)
}
