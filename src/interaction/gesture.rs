use std::mem;

use tracing::{debug, trace};

use crate::model::{GridCoord, MaskOp};

use super::events::{InputEvent, Key, Modifiers, PointerButton, ViewId};
use super::geometry::Point;
use super::overlay::{Overlay, OverlayUpdate};
use super::selection::{DragStroke, PolygonSelection, RectSelection, VertexOutcome};
use super::tooling::{Cursor, EditMode, InteractionState, Tool, mode_shortcut, tool_shortcut};
use super::transform::{GridLayout, ViewTransform};

pub const DEFAULT_WHEEL_ZOOM_RATE: f64 = 0.002;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLayouts {
    pub primary: GridLayout,
    pub secondary: GridLayout,
}

impl ViewLayouts {
    pub fn get(&self, view: ViewId) -> &GridLayout {
        match view {
            ViewId::Primary => &self.primary,
            ViewId::Secondary => &self.secondary,
        }
    }
}

/// Read-only inputs to one transition.
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    pub interaction: InteractionState,
    pub transform: ViewTransform,
    pub layouts: &'a ViewLayouts,
    pub wheel_zoom_rate: f64,
}

impl EventContext<'_> {
    /// Pan/zoom needs ctrl/cmd unless the hand tool is active.
    fn pans(&self, modifiers: Modifiers) -> bool {
        self.interaction.tool == Tool::Hand || modifiers.command()
    }

    fn cell_at(&self, view: ViewId, position: Point) -> Option<GridCoord> {
        self.layouts
            .get(view)
            .device_to_grid(&self.transform, position)
    }
}

/// Output of a transition. `Commit` carries the raw batch; the session decides which
/// cells actually changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Commit { op: MaskOp, cells: Vec<GridCoord> },
    Transform(ViewTransform),
    Overlay(OverlayUpdate),
    Tool(Tool),
    Mode(EditMode),
    Cursor(Cursor),
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Gesture {
    #[default]
    Idle,
    Stroke {
        view: ViewId,
        stroke: DragStroke,
    },
    Rect {
        view: ViewId,
        selection: RectSelection,
    },
    Polygon {
        view: ViewId,
        selection: PolygonSelection,
    },
}

impl Gesture {
    fn overlay(&self, layouts: &ViewLayouts, transform: &ViewTransform) -> Option<Overlay> {
        match self {
            Self::Rect { view, selection } => Some(Overlay::rectangle(
                *view,
                layouts.get(*view),
                transform,
                selection,
            )),
            Self::Polygon { view, selection } if !selection.is_empty() => Some(Overlay::polygon(
                *view,
                layouts.get(*view),
                transform,
                selection.vertices(),
            )),
            _ => None,
        }
    }

    fn owns_overlay(&self) -> bool {
        matches!(self, Self::Rect { .. } | Self::Polygon { .. })
    }
}

/// Gesture state for the selection tools plus an optional pan in progress.
#[derive(Debug, Clone, Default)]
pub struct GestureMachine {
    gesture: Gesture,
    pan_from: Option<Point>,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle && self.pan_from.is_none()
    }

    pub fn is_panning(&self) -> bool {
        self.pan_from.is_some()
    }

    /// Drops any gesture and pan in progress, e.g. after the grid changed underneath.
    pub fn reset(&mut self) -> Vec<Effect> {
        self.pan_from = None;
        self.end_gesture()
    }

    /// Externally driven transform change; pending overlays are redrawn to match.
    pub fn set_transform(&self, ctx: &EventContext<'_>, transform: ViewTransform) -> Vec<Effect> {
        if transform == ctx.transform {
            return Vec::new();
        }
        self.transform_changed(ctx, transform)
    }

    pub fn pending_vertices(&self) -> &[GridCoord] {
        match &self.gesture {
            Gesture::Polygon { selection, .. } => selection.vertices(),
            _ => &[],
        }
    }

    pub fn handle(&mut self, ctx: &EventContext<'_>, event: &InputEvent) -> Vec<Effect> {
        let effects = match *event {
            InputEvent::PointerDown {
                view,
                position,
                button,
                modifiers,
            } => self.pointer_down(ctx, view, position, button, modifiers),
            InputEvent::PointerMove {
                view,
                position,
                primary_held,
                modifiers,
            } => self.pointer_move(ctx, view, position, primary_held, modifiers),
            InputEvent::PointerUp {
                position, button, ..
            } => self.pointer_up(ctx, position, button),
            InputEvent::Wheel {
                view,
                position,
                delta_y,
                modifiers,
            } => self.wheel(ctx, view, position, delta_y, modifiers),
            InputEvent::KeyDown { key, modifiers } => self.key_down(ctx, key, modifiers),
            InputEvent::KeyUp { key, .. } => self.key_up(ctx, key),
            InputEvent::SelectTool { tool } => self.select_tool(ctx, tool),
            InputEvent::SelectMode { mode } => select_mode(ctx, mode),
        };
        trace!(event = event.kind(), effects = effects.len(), "gesture transition");
        effects
    }

    fn pointer_down(
        &mut self,
        ctx: &EventContext<'_>,
        view: ViewId,
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> Vec<Effect> {
        if button != PointerButton::Primary {
            return Vec::new();
        }
        if ctx.pans(modifiers) {
            self.pan_from = Some(position);
            return vec![Effect::Cursor(Cursor::Grabbing)];
        }
        if ctx.interaction.mask_op().is_none() {
            return Vec::new();
        }

        let cell = ctx.cell_at(view, position);
        match ctx.interaction.tool {
            Tool::Hand => Vec::new(),
            Tool::Point => {
                let mut effects = self.end_gesture();
                let mut stroke = DragStroke::new();
                let emitted = cell.and_then(|cell| stroke.visit(cell));
                self.gesture = Gesture::Stroke { view, stroke };
                effects.extend(emitted.and_then(|cell| commit(ctx, vec![cell])));
                effects
            }
            Tool::Select => {
                let Some(cell) = cell else {
                    return Vec::new();
                };
                let mut effects = self.end_gesture();
                self.gesture = Gesture::Rect {
                    view,
                    selection: RectSelection::new(cell),
                };
                effects.extend(self.overlay_effect(ctx, &ctx.transform));
                effects
            }
            Tool::Shape => match cell {
                Some(cell) => self.add_vertex(ctx, view, cell),
                None => Vec::new(),
            },
        }
    }

    fn pointer_move(
        &mut self,
        ctx: &EventContext<'_>,
        view: ViewId,
        position: Point,
        primary_held: bool,
        modifiers: Modifiers,
    ) -> Vec<Effect> {
        if let Some(from) = self.pan_from {
            if !primary_held {
                // The release happened outside of our event stream.
                self.pan_from = None;
                return vec![Effect::Cursor(ctx.interaction.cursor())];
            }
            self.pan_from = Some(position);
            let transform = ctx
                .transform
                .translated(position.x - from.x, position.y - from.y);
            return self.transform_changed(ctx, transform);
        }

        match &mut self.gesture {
            Gesture::Stroke {
                view: stroke_view,
                stroke,
            } if *stroke_view == view && primary_held && modifiers.shift => ctx
                .cell_at(view, position)
                .and_then(|cell| stroke.visit(cell))
                .and_then(|cell| commit(ctx, vec![cell]))
                .into_iter()
                .collect(),
            Gesture::Rect {
                view: rect_view,
                selection,
            } if *rect_view == view && primary_held => match ctx.cell_at(view, position) {
                Some(cell) if selection.update(cell) => {
                    let overlay =
                        Overlay::rectangle(view, ctx.layouts.get(view), &ctx.transform, selection);
                    vec![Effect::Overlay(OverlayUpdate::Draw { overlay })]
                }
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn pointer_up(
        &mut self,
        ctx: &EventContext<'_>,
        position: Point,
        button: PointerButton,
    ) -> Vec<Effect> {
        if button != PointerButton::Primary {
            return Vec::new();
        }
        if self.pan_from.take().is_some() {
            return vec![Effect::Cursor(ctx.interaction.cursor())];
        }

        match mem::take(&mut self.gesture) {
            Gesture::Rect {
                view,
                mut selection,
            } => {
                if let Some(cell) = ctx.cell_at(view, position) {
                    selection.update(cell);
                }
                let cells = selection.cells(ctx.layouts.get(view).dims);
                let mut effects = vec![Effect::Overlay(OverlayUpdate::Clear)];
                effects.extend(commit(ctx, cells));
                effects
            }
            polygon @ Gesture::Polygon { .. } => {
                self.gesture = polygon;
                Vec::new()
            }
            Gesture::Stroke { .. } | Gesture::Idle => Vec::new(),
        }
    }

    fn wheel(
        &mut self,
        ctx: &EventContext<'_>,
        view: ViewId,
        position: Point,
        delta_y: f64,
        modifiers: Modifiers,
    ) -> Vec<Effect> {
        if !ctx.pans(modifiers) {
            return Vec::new();
        }
        let anchor = ctx.layouts.get(view).to_local(position);
        let factor = (-delta_y * ctx.wheel_zoom_rate).exp();
        let transform = ctx.transform.zoomed_at(anchor, factor);
        if transform == ctx.transform {
            return Vec::new();
        }
        self.transform_changed(ctx, transform)
    }

    fn key_down(&mut self, ctx: &EventContext<'_>, key: Key, modifiers: Modifiers) -> Vec<Effect> {
        match key {
            Key::Char(text) if !modifiers.command() => {
                if let Some(tool) = tool_shortcut(text) {
                    self.select_tool(ctx, tool)
                } else if let Some(mode) = mode_shortcut(text) {
                    select_mode(ctx, mode)
                } else {
                    Vec::new()
                }
            }
            Key::Enter => self.commit_polygon(ctx),
            Key::Escape => self.cancel(),
            Key::Control | Key::Meta if ctx.interaction.tool != Tool::Hand => {
                vec![Effect::Cursor(Cursor::Grab)]
            }
            _ => Vec::new(),
        }
    }

    fn key_up(&mut self, ctx: &EventContext<'_>, key: Key) -> Vec<Effect> {
        if key.is_command() && !self.is_panning() {
            vec![Effect::Cursor(ctx.interaction.cursor())]
        } else {
            Vec::new()
        }
    }

    fn select_tool(&mut self, ctx: &EventContext<'_>, tool: Tool) -> Vec<Effect> {
        if tool == ctx.interaction.tool {
            return Vec::new();
        }
        let mut effects = self.end_gesture();
        self.pan_from = None;
        let next = InteractionState::new(ctx.interaction.mode, tool);
        effects.push(Effect::Tool(tool));
        effects.push(Effect::Cursor(next.cursor()));
        effects
    }

    fn add_vertex(&mut self, ctx: &EventContext<'_>, view: ViewId, cell: GridCoord) -> Vec<Effect> {
        let (mut selection, mut effects) = match mem::take(&mut self.gesture) {
            Gesture::Polygon {
                view: current,
                selection,
            } if current == view => (selection, Vec::new()),
            previous => (PolygonSelection::new(), release(previous)),
        };

        match selection.push(cell) {
            VertexOutcome::Appended => {
                self.gesture = Gesture::Polygon { view, selection };
                effects.extend(self.overlay_effect(ctx, &ctx.transform));
            }
            VertexOutcome::Closed => effects.extend(finish_polygon(ctx, view, &selection)),
        }
        effects
    }

    fn commit_polygon(&mut self, ctx: &EventContext<'_>) -> Vec<Effect> {
        match mem::take(&mut self.gesture) {
            Gesture::Polygon { view, selection } => finish_polygon(ctx, view, &selection),
            other => {
                self.gesture = other;
                Vec::new()
            }
        }
    }

    fn cancel(&mut self) -> Vec<Effect> {
        let pending = self.pending_vertices().len();
        if pending > 0 {
            debug!(vertices = pending, "cancelled polygon");
        }
        self.end_gesture()
    }

    fn end_gesture(&mut self) -> Vec<Effect> {
        release(mem::take(&mut self.gesture))
    }

    fn overlay_effect(&self, ctx: &EventContext<'_>, transform: &ViewTransform) -> Option<Effect> {
        self.gesture
            .overlay(ctx.layouts, transform)
            .map(|overlay| Effect::Overlay(OverlayUpdate::Draw { overlay }))
    }

    /// Pending overlays follow the new transform in the same batch.
    fn transform_changed(&self, ctx: &EventContext<'_>, transform: ViewTransform) -> Vec<Effect> {
        let mut effects = vec![Effect::Transform(transform)];
        effects.extend(self.overlay_effect(ctx, &transform));
        effects
    }
}

fn select_mode(ctx: &EventContext<'_>, mode: EditMode) -> Vec<Effect> {
    if mode == ctx.interaction.mode {
        return Vec::new();
    }
    let next = InteractionState::new(mode, ctx.interaction.tool);
    vec![Effect::Mode(mode), Effect::Cursor(next.cursor())]
}

fn release(gesture: Gesture) -> Vec<Effect> {
    if gesture.owns_overlay() {
        vec![Effect::Overlay(OverlayUpdate::Clear)]
    } else {
        Vec::new()
    }
}

fn commit(ctx: &EventContext<'_>, cells: Vec<GridCoord>) -> Option<Effect> {
    let op = ctx.interaction.mask_op()?;
    if cells.is_empty() {
        return None;
    }
    debug!(?op, cells = cells.len(), "committing selection");
    Some(Effect::Commit { op, cells })
}

fn finish_polygon(
    ctx: &EventContext<'_>,
    view: ViewId,
    selection: &PolygonSelection,
) -> Vec<Effect> {
    let cells = selection.rasterize(ctx.layouts.get(view).dims);
    if cells.is_empty() {
        debug!(vertices = selection.len(), "discarding degenerate polygon");
    }
    let mut effects = vec![Effect::Overlay(OverlayUpdate::Clear)];
    effects.extend(commit(ctx, cells));
    effects
}
