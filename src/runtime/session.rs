use tracing::{debug, info, trace};

use crate::interaction::{
    Cursor, Effect, EventContext, GestureMachine, InputEvent, InteractionState, OverlayUpdate,
    ViewLayouts, ViewTransform,
};
use crate::model::{GridCoord, Mask, MaskChange};

/// What observers of the session must react to after an input.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Only cells whose membership actually changed.
    Mask(MaskChange),
    /// Shared by both views.
    Transform(ViewTransform),
    Overlay(OverlayUpdate),
    Interaction(InteractionState),
    Cursor(Cursor),
}

/// Owns the authoritative mask and the shared view state; translates gestures into
/// mask mutations.
#[derive(Debug, Clone)]
pub struct EditSession {
    interaction: InteractionState,
    transform: ViewTransform,
    layouts: ViewLayouts,
    mask: Mask,
    machine: GestureMachine,
    cursor: Cursor,
    wheel_zoom_rate: f64,
}

impl EditSession {
    pub fn new(layouts: ViewLayouts, wheel_zoom_rate: f64) -> Self {
        let interaction = InteractionState::default();
        Self {
            interaction,
            transform: ViewTransform::IDENTITY,
            layouts,
            mask: Mask::new(),
            machine: GestureMachine::new(),
            cursor: interaction.cursor(),
            wheel_zoom_rate,
        }
    }

    pub fn with_interaction(mut self, interaction: InteractionState) -> Self {
        self.interaction = interaction;
        self.cursor = interaction.cursor();
        self
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn layouts(&self) -> &ViewLayouts {
        &self.layouts
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn pending_vertices(&self) -> &[GridCoord] {
        self.machine.pending_vertices()
    }

    pub fn is_idle(&self) -> bool {
        self.machine.is_idle()
    }

    pub fn dispatch(&mut self, event: &InputEvent) -> Vec<Notification> {
        // Built field by field so `machine` can be borrowed mutably alongside it.
        let ctx = EventContext {
            interaction: self.interaction,
            transform: self.transform,
            layouts: &self.layouts,
            wheel_zoom_rate: self.wheel_zoom_rate,
        };
        let effects = self.machine.handle(&ctx, event);
        self.apply_effects(effects)
    }

    /// Swaps in a mask loaded from elsewhere, notifying with the delta.
    pub fn replace_mask(&mut self, mask: Mask) -> Vec<Notification> {
        let diff = mask.diff(&self.mask);
        self.mask = mask;
        info!(
            added = diff.to_add.len(),
            removed = diff.to_remove.len(),
            "mask replaced"
        );
        [
            MaskChange {
                coordinates: diff.to_remove,
                added: false,
            },
            MaskChange {
                coordinates: diff.to_add,
                added: true,
            },
        ]
        .into_iter()
        .filter(|change| !change.is_empty())
        .map(Notification::Mask)
        .collect()
    }

    pub fn clear_mask(&mut self) -> Option<Notification> {
        let removed = self.mask.clear();
        if removed.is_empty() {
            return None;
        }
        info!(removed = removed.len(), "mask cleared");
        Some(Notification::Mask(MaskChange {
            coordinates: removed,
            added: false,
        }))
    }

    /// Scale is clamped; a pending overlay follows the new transform.
    pub fn set_transform(&mut self, transform: ViewTransform) -> Vec<Notification> {
        let transform = ViewTransform::new(transform.x, transform.y, transform.k);
        let effects = self.machine.set_transform(&self.context(), transform);
        self.apply_effects(effects)
    }

    pub fn reset_view(&mut self) -> Vec<Notification> {
        self.set_transform(ViewTransform::IDENTITY)
    }

    /// New grid geometry invalidates any gesture in progress.
    pub fn set_layouts(&mut self, layouts: ViewLayouts) -> Vec<Notification> {
        if layouts == self.layouts {
            return Vec::new();
        }
        self.layouts = layouts;
        let effects = self.machine.reset();
        self.apply_effects(effects)
    }

    fn context(&self) -> EventContext<'_> {
        EventContext {
            interaction: self.interaction,
            transform: self.transform,
            layouts: &self.layouts,
            wheel_zoom_rate: self.wheel_zoom_rate,
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> Vec<Notification> {
        effects
            .into_iter()
            .filter_map(|effect| self.apply(effect))
            .collect()
    }

    fn apply(&mut self, effect: Effect) -> Option<Notification> {
        match effect {
            Effect::Commit { op, cells } => {
                let requested = cells.len();
                let change = self.mask.apply(op, cells);
                if change.is_empty() {
                    trace!(?op, requested, "commit changed nothing");
                    return None;
                }
                debug!(?op, requested, changed = change.len(), "mask updated");
                Some(Notification::Mask(change))
            }
            Effect::Transform(transform) => {
                let transform = ViewTransform::new(transform.x, transform.y, transform.k);
                if transform == self.transform {
                    return None;
                }
                self.transform = transform;
                trace!(x = transform.x, y = transform.y, k = transform.k, "transform updated");
                Some(Notification::Transform(transform))
            }
            Effect::Overlay(update) => Some(Notification::Overlay(update)),
            Effect::Tool(tool) => {
                self.interaction.tool = tool;
                debug!(tool = tool.label(), "tool selected");
                Some(Notification::Interaction(self.interaction))
            }
            Effect::Mode(mode) => {
                self.interaction.mode = mode;
                debug!(mode = mode.label(), "mode selected");
                Some(Notification::Interaction(self.interaction))
            }
            Effect::Cursor(cursor) => {
                if cursor == self.cursor {
                    return None;
                }
                self.cursor = cursor;
                Some(Notification::Cursor(cursor))
            }
        }
    }
}
