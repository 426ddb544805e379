//! Figure definitions for the editor.

mod circle;
mod ellipse;
mod kind;
mod polygon;
mod rectangle;
mod rounded_rectangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use kind::{Arity, FigureKind, FigureKindError};
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use rounded_rectangle::RoundedRectangle;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable paint (RGBA8). `Option<Paint>::None` means "no paint".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Paint {
    pub const BLACK: Paint = Paint::rgb(0, 0, 0);
    pub const WHITE: Paint = Paint::rgb(255, 255, 255);
    pub const RED: Paint = Paint::rgb(255, 0, 0);
    pub const ORANGE: Paint = Paint::rgb(255, 200, 0);
    pub const YELLOW: Paint = Paint::rgb(255, 255, 0);
    pub const GREEN: Paint = Paint::rgb(0, 255, 0);
    pub const CYAN: Paint = Paint::rgb(0, 255, 255);
    pub const BLUE: Paint = Paint::rgb(0, 0, 255);
    pub const MAGENTA: Paint = Paint::rgb(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Paint> for Color {
    fn from(paint: Paint) -> Self {
        Color::from_rgba8(paint.r, paint.g, paint.b, paint.a)
    }
}

/// Line pattern used for figure outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineType {
    /// No outline at all, whatever the edge paint.
    None,
    #[default]
    Solid,
    Dashed,
}

/// Style properties shared by every figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureStyle {
    /// Stroke width (0 = no stroke).
    pub stroke_width: f64,
    /// Outline pattern.
    #[serde(default)]
    pub line_type: LineType,
    /// Edge paint (None = no stroke rendered).
    pub edge: Option<Paint>,
    /// Fill paint (None = no fill rendered).
    pub fill: Option<Paint>,
}

impl FigureStyle {
    /// Whether an outline should be painted at all.
    pub fn has_stroke(&self) -> bool {
        self.edge.is_some() && self.stroke_width > 0.0 && self.line_type != LineType::None
    }

    /// Edge paint as a peniko Color.
    pub fn edge_color(&self) -> Option<Color> {
        self.edge.map(Color::from)
    }

    /// Fill paint as a peniko Color.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill.map(Color::from)
    }
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            stroke_width: 4.0,
            line_type: LineType::Solid,
            edge: Some(Paint::BLUE),
            fill: Some(Paint::BLACK),
        }
    }
}

/// Unique identifier for figures.
pub type FigureId = Uuid;

/// Capabilities common to every figure variant.
pub trait FigureTrait {
    /// Get the unique identifier.
    fn id(&self) -> FigureId;

    /// Which of the five kinds this is.
    fn kind(&self) -> FigureKind;

    /// Get the bounding box (geometry only, stroke not included).
    fn bounds(&self) -> Rect;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &FigureStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut FigureStyle;
}

/// Closed sum over the five figure kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Figure {
    Circle(Circle),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    RoundedRectangle(RoundedRectangle),
    Polygon(Polygon),
}

impl Figure {
    pub fn id(&self) -> FigureId {
        match self {
            Figure::Circle(f) => f.id(),
            Figure::Ellipse(f) => f.id(),
            Figure::Rectangle(f) => f.id(),
            Figure::RoundedRectangle(f) => f.id(),
            Figure::Polygon(f) => f.id(),
        }
    }

    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Circle(f) => f.kind(),
            Figure::Ellipse(f) => f.kind(),
            Figure::Rectangle(f) => f.kind(),
            Figure::RoundedRectangle(f) => f.kind(),
            Figure::Polygon(f) => f.kind(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Figure::Circle(f) => f.bounds(),
            Figure::Ellipse(f) => f.bounds(),
            Figure::Rectangle(f) => f.bounds(),
            Figure::RoundedRectangle(f) => f.bounds(),
            Figure::Polygon(f) => f.bounds(),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Figure::Circle(f) => f.to_path(),
            Figure::Ellipse(f) => f.to_path(),
            Figure::Rectangle(f) => f.to_path(),
            Figure::RoundedRectangle(f) => f.to_path(),
            Figure::Polygon(f) => f.to_path(),
        }
    }

    pub fn style(&self) -> &FigureStyle {
        match self {
            Figure::Circle(f) => f.style(),
            Figure::Ellipse(f) => f.style(),
            Figure::Rectangle(f) => f.style(),
            Figure::RoundedRectangle(f) => f.style(),
            Figure::Polygon(f) => f.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut FigureStyle {
        match self {
            Figure::Circle(f) => f.style_mut(),
            Figure::Ellipse(f) => f.style_mut(),
            Figure::Rectangle(f) => f.style_mut(),
            Figure::RoundedRectangle(f) => f.style_mut(),
            Figure::Polygon(f) => f.style_mut(),
        }
    }

    /// Regenerate the figure's ID with a new unique identifier.
    pub(crate) fn regenerate_id(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Figure::Circle(f) => f.id = new_id,
            Figure::Ellipse(f) => f.id = new_id,
            Figure::Rectangle(f) => f.id = new_id,
            Figure::RoundedRectangle(f) => f.id = new_id,
            Figure::Polygon(f) => f.id = new_id,
        }
    }

    /// Recompute a two-point extent from the gesture anchor and the pointer.
    /// Polygons grow vertex by vertex and are left untouched.
    pub(crate) fn drag_to(&mut self, anchor: Point, pointer: Point) {
        match self {
            Figure::Circle(c) => c.set_radius_to(pointer),
            Figure::Ellipse(e) => e.set_extent_to(pointer),
            Figure::Rectangle(r) => r.set_corners(anchor, pointer),
            Figure::RoundedRectangle(r) => r.set_corners(anchor, pointer),
            Figure::Polygon(_) => {}
        }
    }

    /// Freeze the geometry before the figure is handed to the drawing.
    pub(crate) fn finalize(&mut self) {
        if let Figure::Polygon(p) = self {
            p.close();
        }
    }

    /// Get the polygon if this figure is a polygon.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Figure::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match self {
            Figure::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Get the rounded rectangle if this figure is one.
    pub fn as_rounded_rectangle(&self) -> Option<&RoundedRectangle> {
        match self {
            Figure::RoundedRectangle(r) => Some(r),
            _ => None,
        }
    }

    pub(crate) fn as_rounded_rectangle_mut(&mut self) -> Option<&mut RoundedRectangle> {
        match self {
            Figure::RoundedRectangle(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_color_conversion() {
        let color: Color = Paint::ORANGE.into();
        let back: Paint = color.into();
        assert_eq!(back, Paint::ORANGE);
    }

    #[test]
    fn test_style_has_stroke() {
        let mut style = FigureStyle::default();
        assert!(style.has_stroke());

        style.line_type = LineType::None;
        assert!(!style.has_stroke());

        style.line_type = LineType::Dashed;
        style.stroke_width = 0.0;
        assert!(!style.has_stroke());

        style.stroke_width = 2.0;
        style.edge = None;
        assert!(!style.has_stroke());
    }

    #[test]
    fn test_drag_to_leaves_polygon_alone() {
        let mut fig = FigureKind::Polygon.create(&FigureStyle::default(), Point::new(1.0, 1.0));
        fig.drag_to(Point::new(1.0, 1.0), Point::new(50.0, 50.0));
        assert_eq!(fig.as_polygon().map(|p| p.len()), Some(1));
    }

    #[test]
    fn test_regenerate_id() {
        let mut fig = FigureKind::Circle.create(&FigureStyle::default(), Point::ZERO);
        let before = fig.id();
        fig.regenerate_id();
        assert_ne!(before, fig.id());
    }

    #[test]
    fn test_line_type_default() {
        assert_eq!(LineType::default(), LineType::Solid);
    }
}
