//! Polygon figure.

use super::{FigureId, FigureKind, FigureStyle, FigureTrait};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-form polygon built one vertex at a time.
///
/// While under construction the outline is an open polyline. Once committed
/// the polygon is closed and the last vertex connects back to the first.
/// Fewer than three vertices are allowed and render as a point or a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonData")]
pub struct Polygon {
    pub(crate) id: FigureId,
    /// Vertices in insertion order (never empty).
    vertices: Vec<Point>,
    /// Whether the outline wraps around.
    closed: bool,
    /// Style properties.
    pub style: FigureStyle,
}

impl Polygon {
    /// Create a single-vertex, open polygon.
    pub fn new(first: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            vertices: vec![first],
            closed: false,
            style: FigureStyle::default(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Last vertex placed.
    pub fn last_vertex(&self) -> Option<Point> {
        self.vertices.last().copied()
    }

    pub(crate) fn push_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }
}

/// Unchecked serialized form of a [`Polygon`].
#[derive(Deserialize)]
struct PolygonData {
    id: FigureId,
    vertices: Vec<Point>,
    closed: bool,
    style: FigureStyle,
}

impl TryFrom<PolygonData> for Polygon {
    type Error = &'static str;

    fn try_from(data: PolygonData) -> Result<Self, Self::Error> {
        if data.vertices.is_empty() {
            return Err("polygon has no vertices");
        }
        Ok(Self {
            id: data.id,
            vertices: data.vertices,
            closed: data.closed,
            style: data.style,
        })
    }
}

impl FigureTrait for Polygon {
    fn id(&self) -> FigureId {
        self.id
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Polygon
    }

    fn bounds(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::ZERO;
        };
        self.vertices
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.vertices.iter();
        if let Some(first) = points.next() {
            path.move_to(*first);
            if self.vertices.len() == 1 {
                // Zero-length segment so round caps still show a dot
                path.line_to(*first);
            }
            for p in points {
                path.line_to(*p);
            }
            if self.closed && self.vertices.len() >= 3 {
                path.close_path();
            }
        }
        path
    }

    fn style(&self) -> &FigureStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut FigureStyle {
        &mut self.style
    }
}
