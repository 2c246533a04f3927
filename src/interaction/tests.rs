use crate::model::{GridCoord, GridDims, MaskOp};

use super::{
    Effect, EditMode, EventContext, GestureMachine, GridLayout, InputEvent, InteractionState, Key,
    MAX_SCALE, MIN_SCALE, Modifiers, Overlay, OverlayUpdate, Point, PointerButton, Rect, Tool,
    ViewId, ViewLayouts, ViewTransform, point_in_polygon, point_on_segment, rasterize_polygon,
    rect_cells, segment_touches_rect, segments_intersect,
};

const CELL: f64 = 6.0;

fn layouts() -> ViewLayouts {
    ViewLayouts {
        primary: GridLayout::new(
            Rect::new(0.0, 0.0, 600.0, 400.0),
            GridDims::new(10, 10),
            CELL,
        ),
        secondary: GridLayout::new(
            Rect::new(620.0, 0.0, 600.0, 400.0),
            GridDims::new(10, 10),
            CELL,
        ),
    }
}

/// Device position of the centre of a primary-view cell under the identity transform.
fn at(row: usize, col: usize) -> Point {
    Point::new(
        270.0 + col as f64 * CELL + CELL / 2.0,
        170.0 + row as f64 * CELL + CELL / 2.0,
    )
}

fn cells(pairs: &[(usize, usize)]) -> Vec<GridCoord> {
    pairs
        .iter()
        .map(|(row, col)| GridCoord::new(*row, *col))
        .collect()
}

struct Harness {
    machine: GestureMachine,
    interaction: InteractionState,
    transform: ViewTransform,
    layouts: ViewLayouts,
}

impl Harness {
    fn new(mode: EditMode, tool: Tool) -> Self {
        Self {
            machine: GestureMachine::new(),
            interaction: InteractionState::new(mode, tool),
            transform: ViewTransform::IDENTITY,
            layouts: layouts(),
        }
    }

    fn send(&mut self, event: InputEvent) -> Vec<Effect> {
        let ctx = EventContext {
            interaction: self.interaction,
            transform: self.transform,
            layouts: &self.layouts,
            wheel_zoom_rate: 0.002,
        };
        let effects = self.machine.handle(&ctx, &event);
        for effect in &effects {
            match effect {
                Effect::Tool(tool) => self.interaction.tool = *tool,
                Effect::Mode(mode) => self.interaction.mode = *mode,
                Effect::Transform(transform) => self.transform = *transform,
                _ => {}
            }
        }
        effects
    }

    fn down(&mut self, position: Point, modifiers: Modifiers) -> Vec<Effect> {
        self.send(InputEvent::PointerDown {
            view: ViewId::Primary,
            position,
            button: PointerButton::Primary,
            modifiers,
        })
    }

    fn drag(&mut self, position: Point, modifiers: Modifiers) -> Vec<Effect> {
        self.send(InputEvent::PointerMove {
            view: ViewId::Primary,
            position,
            primary_held: true,
            modifiers,
        })
    }

    fn up(&mut self, position: Point) -> Vec<Effect> {
        self.send(InputEvent::PointerUp {
            view: ViewId::Primary,
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        })
    }

    fn click(&mut self, position: Point) -> Vec<Effect> {
        let mut effects = self.down(position, Modifiers::NONE);
        effects.extend(self.up(position));
        effects
    }

    fn key(&mut self, key: Key) -> Vec<Effect> {
        self.send(InputEvent::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        })
    }
}

fn commits(effects: &[Effect]) -> Vec<(MaskOp, Vec<GridCoord>)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Commit { op, cells } => Some((*op, cells.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn rectangle_corners_in_either_order_give_nine_cells() {
    let expected = cells(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ]);
    let dims = GridDims::new(10, 10);
    assert_eq!(
        rect_cells(GridCoord::new(2, 2), GridCoord::new(0, 0), dims),
        expected
    );
    assert_eq!(
        rect_cells(GridCoord::new(0, 0), GridCoord::new(2, 2), dims),
        expected
    );
}

#[test]
fn rectangle_is_clipped_to_grid() {
    let selected = rect_cells(GridCoord::new(1, 1), GridCoord::new(8, 8), GridDims::new(3, 2));
    assert_eq!(selected, cells(&[(1, 1), (2, 1)]));
    assert!(rect_cells(GridCoord::new(0, 0), GridCoord::new(1, 1), GridDims::new(0, 5)).is_empty());
}

#[test]
fn triangle_includes_interior_and_excludes_outside() {
    let triangle = cells(&[(0, 0), (0, 4), (4, 0)]);
    let covered = rasterize_polygon(&triangle, GridDims::new(10, 10));
    assert!(covered.contains(&GridCoord::new(1, 1)));
    assert!(!covered.contains(&GridCoord::new(3, 3)));
    // Vertices and cells centred on the hypotenuse are part of the shape.
    assert!(covered.contains(&GridCoord::new(0, 4)));
    assert!(covered.contains(&GridCoord::new(1, 3)));
    assert!(!covered.contains(&GridCoord::new(2, 3)));
}

#[test]
fn degenerate_polygons_rasterize_to_nothing() {
    let dims = GridDims::new(10, 10);
    assert!(rasterize_polygon(&cells(&[(0, 0), (5, 5)]), dims).is_empty());
    assert!(rasterize_polygon(&[], dims).is_empty());
}

#[test]
fn rasterization_stays_inside_grid() {
    let square = cells(&[(5, 5), (5, 20), (20, 20), (20, 5)]);
    let covered = rasterize_polygon(&square, GridDims::new(8, 8));
    assert_eq!(covered.len(), 9);
    assert!(covered.iter().all(|cell| cell.row < 8 && cell.col < 8));
}

#[test]
fn ray_cast_uses_even_odd_rule() {
    let square = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
    ];
    assert!(point_in_polygon(Point::new(2.0, 2.0), &square));
    assert!(!point_in_polygon(Point::new(5.0, 2.0), &square));
    assert!(!point_in_polygon(Point::new(1.0, 1.0), &square[..2]));
}

#[test]
fn segment_tests_require_proper_crossing() {
    let (a, b) = (Point::new(0.0, 0.0), Point::new(4.0, 4.0));
    assert!(segments_intersect(a, b, Point::new(0.0, 4.0), Point::new(4.0, 0.0)));
    assert!(!segments_intersect(a, b, Point::new(1.0, 0.0), Point::new(5.0, 4.0)));
    // Touching at an endpoint is not a crossing.
    assert!(!segments_intersect(a, b, Point::new(4.0, 4.0), Point::new(6.0, 0.0)));

    let cell = Rect::from_center(Point::new(3.0, 1.0), 0.5);
    assert!(segment_touches_rect(Point::new(0.0, 1.2), Point::new(9.0, 1.2), &cell));
    assert!(!segment_touches_rect(Point::new(0.0, 3.0), Point::new(9.0, 3.0), &cell));
}

#[test]
fn drag_within_one_cell_emits_once() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Point);
    let first = harness.down(at(2, 2), Modifiers::NONE);
    assert_eq!(commits(&first), vec![(MaskOp::Add, cells(&[(2, 2)]))]);

    let nudge = Point::new(at(2, 2).x + 1.5, at(2, 2).y - 1.0);
    for position in [nudge, at(2, 2), nudge] {
        assert!(commits(&harness.drag(position, Modifiers::SHIFT)).is_empty());
    }
    let next = harness.drag(at(2, 3), Modifiers::SHIFT);
    assert_eq!(commits(&next), vec![(MaskOp::Add, cells(&[(2, 3)]))]);
    harness.up(at(2, 3));
}

#[test]
fn drag_without_shift_does_not_paint() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Point);
    harness.down(at(0, 0), Modifiers::NONE);
    assert!(harness.drag(at(0, 1), Modifiers::NONE).is_empty());
}

#[test]
fn hand_tool_never_commits() {
    for mode in [EditMode::Mask, EditMode::Erase, EditMode::View] {
        let mut harness = Harness::new(mode, Tool::Hand);
        let mut effects = harness.down(at(1, 1), Modifiers::NONE);
        effects.extend(harness.drag(at(3, 3), Modifiers::SHIFT));
        effects.extend(harness.up(at(3, 3)));
        assert!(commits(&effects).is_empty());
        assert!(effects.iter().any(|effect| matches!(effect, Effect::Transform(_))));
    }
}

#[test]
fn ctrl_drag_pans_instead_of_painting() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Point);
    let mut effects = harness.down(Point::new(100.0, 100.0), Modifiers::CTRL);
    effects.extend(harness.drag(Point::new(130.0, 90.0), Modifiers::CTRL));
    assert!(commits(&effects).is_empty());
    assert_eq!(harness.transform, ViewTransform::new(30.0, -10.0, 1.0));
}

#[test]
fn select_tool_commits_box_on_release() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Select);
    let start = harness.down(at(2, 2), Modifiers::NONE);
    assert!(matches!(
        start.as_slice(),
        [Effect::Overlay(OverlayUpdate::Draw { overlay: Overlay::Rectangle { .. } })]
    ));
    harness.drag(at(1, 1), Modifiers::NONE);
    let end = harness.up(at(0, 0));
    assert_eq!(end.first(), Some(&Effect::Overlay(OverlayUpdate::Clear)));
    let committed = commits(&end);
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].1.len(), 9);
    assert!(harness.machine.is_idle());
}

#[test]
fn clicking_first_vertex_commits_polygon() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Shape);
    for (row, col) in [(0, 0), (0, 4), (4, 0)] {
        assert!(commits(&harness.click(at(row, col))).is_empty());
    }
    assert_eq!(harness.machine.pending_vertices().len(), 3);

    let closing = harness.click(at(0, 0));
    let committed = commits(&closing);
    assert_eq!(committed.len(), 1);
    assert!(committed[0].1.contains(&GridCoord::new(1, 1)));
    assert!(!committed[0].1.contains(&GridCoord::new(3, 3)));
    assert!(closing.contains(&Effect::Overlay(OverlayUpdate::Clear)));
    assert!(harness.machine.pending_vertices().is_empty());
}

#[test]
fn two_vertex_polygon_commit_is_discarded() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Shape);
    harness.click(at(0, 0));
    harness.click(at(3, 3));
    let effects = harness.key(Key::Enter);
    assert_eq!(effects, vec![Effect::Overlay(OverlayUpdate::Clear)]);
    assert!(harness.machine.pending_vertices().is_empty());
}

#[test]
fn escape_cancels_pending_polygon() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Shape);
    for (row, col) in [(0, 0), (0, 4), (4, 4)] {
        harness.click(at(row, col));
    }
    let effects = harness.key(Key::Escape);
    assert_eq!(effects, vec![Effect::Overlay(OverlayUpdate::Clear)]);
    assert!(commits(&harness.key(Key::Enter)).is_empty());
}

#[test]
fn switching_tool_discards_vertices() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Shape);
    harness.click(at(0, 0));
    harness.click(at(0, 4));
    let effects = harness.key(Key::Char('2'));
    assert!(effects.contains(&Effect::Overlay(OverlayUpdate::Clear)));
    assert!(effects.contains(&Effect::Tool(Tool::Point)));
    assert_eq!(harness.interaction.tool, Tool::Point);
    assert!(harness.machine.pending_vertices().is_empty());
}

#[test]
fn view_mode_never_commits() {
    let mut harness = Harness::new(EditMode::View, Tool::Point);
    assert!(harness.click(at(1, 1)).is_empty());
    harness.interaction.tool = Tool::Select;
    assert!(harness.click(at(1, 1)).is_empty());
}

#[test]
fn erase_mode_commits_removals() {
    let mut harness = Harness::new(EditMode::Erase, Tool::Point);
    let effects = harness.down(at(4, 4), Modifiers::NONE);
    assert_eq!(commits(&effects), vec![(MaskOp::Remove, cells(&[(4, 4)]))]);
}

#[test]
fn shortcuts_switch_tool_and_mode() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Hand);
    harness.key(Key::Char('3'));
    assert_eq!(harness.interaction.tool, Tool::Select);
    harness.key(Key::Char('E'));
    assert_eq!(harness.interaction.mode, EditMode::Erase);
    harness.key(Key::Char('4'));
    assert_eq!(harness.interaction.tool, Tool::Shape);
}

#[test]
fn zoom_redraws_pending_polygon() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Shape);
    harness.click(at(1, 1));
    harness.click(at(1, 5));
    let effects = harness.send(InputEvent::Wheel {
        view: ViewId::Primary,
        position: Point::new(300.0, 200.0),
        delta_y: -200.0,
        modifiers: Modifiers::CTRL,
    });
    assert!(harness.transform.k > 1.0);
    let redrawn = effects.iter().find_map(|effect| match effect {
        Effect::Overlay(OverlayUpdate::Draw {
            overlay: Overlay::Polygon { vertices, .. },
        }) => Some(vertices.clone()),
        _ => None,
    });
    let vertices = redrawn.expect("polygon overlay redrawn");
    let expected = harness
        .layouts
        .primary
        .cell_center_to_device(&harness.transform, GridCoord::new(1, 5));
    assert_eq!(vertices.len(), 2);
    assert!((vertices[1].x - expected.x).abs() < 1e-9);
    assert!((vertices[1].y - expected.y).abs() < 1e-9);
}

#[test]
fn wheel_without_modifier_is_ignored_for_editing_tools() {
    let mut harness = Harness::new(EditMode::Mask, Tool::Point);
    let effects = harness.send(InputEvent::Wheel {
        view: ViewId::Primary,
        position: Point::new(300.0, 200.0),
        delta_y: -120.0,
        modifiers: Modifiers::NONE,
    });
    assert!(effects.is_empty());
    assert_eq!(harness.transform, ViewTransform::IDENTITY);
}

#[test]
fn events_deserialize_from_yaml() {
    let yaml = r#"
- type: pointer_down
  position: { x: 10.0, y: 20.0 }
- type: key_down
  key: enter
- type: key_down
  key: "3"
- type: select_mode
  mode: erase
"#;
    let events: Vec<InputEvent> = serde_yaml::from_str(yaml).expect("parse events");
    assert_eq!(events.len(), 4);
    assert!(matches!(
        events[0],
        InputEvent::PointerDown {
            view: ViewId::Primary,
            button: PointerButton::Primary,
            ..
        }
    ));
    assert!(matches!(events[1], InputEvent::KeyDown { key: Key::Enter, .. }));
    assert!(matches!(events[2], InputEvent::KeyDown { key: Key::Char('3'), .. }));
}

#[test]
fn thin_sliver_cells_are_caught_by_the_edge_test() {
    let vertices = [
        GridCoord::new(0, 0),
        GridCoord::new(1, 8),
        GridCoord::new(0, 8),
    ];
    let cells = rasterize_polygon(&vertices, GridDims::new(10, 10));

    // Cell (1, 4): centre (x=4, y=1) sits above the long edge, which only
    // clips the bottom of its box.
    let points = [
        Point::new(0.0, 0.0),
        Point::new(8.0, 1.0),
        Point::new(8.0, 0.0),
    ];
    let centre = Point::new(4.0, 1.0);
    assert!(!point_in_polygon(centre, &points));
    assert!(!point_on_segment(centre, points[0], points[1]));
    assert!(segment_touches_rect(
        points[0],
        points[1],
        &Rect::from_center(centre, 0.5)
    ));
    assert!(cells.contains(&GridCoord::new(1, 4)));

    // Row 1 to the left of the sliver stays out: the edge is below y = 0.5 there.
    assert!(!cells.contains(&GridCoord::new(1, 2)));
}

#[test]
fn deserialised_transforms_are_clamped() {
    let low: ViewTransform = serde_json::from_str(r#"{"x": 1.0, "y": 2.0, "k": 0.0}"#)
        .expect("transform");
    assert_eq!(low, ViewTransform::new(1.0, 2.0, MIN_SCALE));
    let high: ViewTransform = serde_yaml::from_str("x: 0.0\ny: 0.0\nk: 50.0\n").expect("transform");
    assert_eq!(high.k, MAX_SCALE);
}
