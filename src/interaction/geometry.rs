use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in device or grid space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_center(center: Point, half_extent: f64) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }

    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn contains(&self, point: Point) -> bool {
        let max = self.max();
        point.x >= self.x && point.x <= max.x && point.y >= self.y && point.y <= max.y
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max = self.max();
        let other_max = other.max();
        Rect::new(
            min_x,
            min_y,
            max.x.max(other_max.x) - min_x,
            max.y.max(other_max.y) - min_y,
        )
    }

    /// Corners in winding order, starting at the minimum corner.
    pub fn corners(&self) -> [Point; 4] {
        let max = self.max();
        [
            Point::new(self.x, self.y),
            Point::new(max.x, self.y),
            Point::new(max.x, max.y),
            Point::new(self.x, max.y),
        ]
    }
}

/// Signed area of the triangle `a, b, c` (twice over). Positive when `c` lies to the
/// left of `a -> b`.
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn opposite_sides(first: f64, second: f64) -> bool {
    (first > 0.0 && second < 0.0) || (first < 0.0 && second > 0.0)
}

/// Proper crossing test: each segment's endpoints lie strictly on opposite sides of the
/// other segment's line. Touching and collinear overlap do not count.
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    opposite_sides(orientation(q1, q2, p1), orientation(q1, q2, p2))
        && opposite_sides(orientation(p1, p2, q1), orientation(p1, p2, q2))
}

/// True when `point` lies on the closed segment `a -> b`.
pub fn point_on_segment(point: Point, a: Point, b: Point) -> bool {
    orientation(a, b, point) == 0.0
        && point.x >= a.x.min(b.x)
        && point.x <= a.x.max(b.x)
        && point.y >= a.y.min(b.y)
        && point.y <= a.y.max(b.y)
}

/// Even-odd ray cast along +x. Fewer than three vertices never contain anything.
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// True when segment `a -> b` has an endpoint inside `rect` or crosses one of its sides.
pub fn segment_touches_rect(a: Point, b: Point, rect: &Rect) -> bool {
    if rect.contains(a) || rect.contains(b) {
        return true;
    }
    let corners = rect.corners();
    (0..corners.len()).any(|index| {
        let next = corners[(index + 1) % corners.len()];
        segments_intersect(a, b, corners[index], next)
    })
}

/// Closed-ring edges: the last vertex connects back to the first.
pub fn polygon_edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let count = vertices.len();
    (0..count).map(move |index| (vertices[index], vertices[(index + 1) % count]))
}
