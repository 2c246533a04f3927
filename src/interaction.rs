mod events;
mod geometry;
mod gesture;
mod overlay;
mod selection;
mod tooling;
mod transform;

#[cfg(test)]
mod tests;

pub use events::{InputEvent, Key, Modifiers, PointerButton, ViewId};
pub use geometry::{
    Point, Rect, orientation, point_in_polygon, point_on_segment, polygon_edges,
    segment_touches_rect, segments_intersect,
};
pub use gesture::{DEFAULT_WHEEL_ZOOM_RATE, Effect, EventContext, GestureMachine, ViewLayouts};
pub use overlay::{Overlay, OverlayUpdate};
pub use selection::{
    DragStroke, MIN_POLYGON_VERTICES, PolygonSelection, RectSelection, VertexOutcome,
    rasterize_polygon, rect_cells,
};
pub use tooling::{Cursor, EditMode, InteractionState, Tool, mode_shortcut, tool_shortcut};
pub use transform::{GridLayout, MAX_SCALE, MIN_SCALE, ViewTransform, clamp_scale};
