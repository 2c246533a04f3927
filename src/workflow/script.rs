use serde::{Deserialize, Serialize};

use crate::interaction::{InputEvent, Point};

use super::{ReplayError, Result};

/// A recorded input stream, replayed against a workbench in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplayScript {
    pub name: Option<String>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl ReplayScript {
    pub fn validate(&self) -> Result<()> {
        if self.events.is_empty() {
            return Err(ReplayError::Parse(
                "replay script must include at least one event".to_string(),
            ));
        }
        for (index, event) in self.events.iter().enumerate() {
            let finite = match event {
                InputEvent::PointerDown { position, .. }
                | InputEvent::PointerMove { position, .. }
                | InputEvent::PointerUp { position, .. } => is_finite(position),
                InputEvent::Wheel {
                    position, delta_y, ..
                } => is_finite(position) && delta_y.is_finite(),
                _ => true,
            };
            if !finite {
                return Err(ReplayError::Parse(format!(
                    "event `{}` at index {index} has a non-finite coordinate",
                    event.kind()
                )));
            }
        }
        Ok(())
    }
}

fn is_finite(point: &Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
