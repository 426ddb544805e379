//! Rounded rectangle figure.

use super::rectangle::normalized;
use super::{FigureId, FigureKind, FigureStyle, FigureTrait};
use kurbo::{BezPath, Point, Rect, RoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle whose corners are arcs of a shared radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundedRectangle {
    pub(crate) id: FigureId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle (never negative).
    pub width: f64,
    /// Height of the rectangle (never negative).
    pub height: f64,
    /// Corner arc radius, kept within `[0, min(width, height) / 2]`.
    pub corner_radius: f64,
    /// Style properties.
    pub style: FigureStyle,
}

impl RoundedRectangle {
    /// Create a new rounded rectangle. The radius is clamped to fit.
    pub fn new(position: Point, width: f64, height: f64, corner_radius: f64) -> Self {
        let mut rect = Self {
            id: Uuid::new_v4(),
            position,
            width: width.max(0.0),
            height: height.max(0.0),
            corner_radius: 0.0,
            style: FigureStyle::default(),
        };
        rect.set_corner_radius(corner_radius);
        rect
    }

    /// Replace the style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    /// Largest radius the current extent allows.
    pub fn max_corner_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    /// Set the corner radius, clamped to `[0, min(width, height) / 2]`.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = radius.clamp(0.0, self.max_corner_radius());
    }

    /// Span the rectangle between two corners and re-clamp the radius.
    pub(crate) fn set_corners(&mut self, p1: Point, p2: Point) {
        let rect = normalized(p1, p2);
        self.position = rect.origin();
        self.width = rect.width();
        self.height = rect.height();
        self.set_corner_radius(self.corner_radius);
    }

    /// Get the outer rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl FigureTrait for RoundedRectangle {
    fn id(&self) -> FigureId {
        self.id
    }

    fn kind(&self) -> FigureKind {
        FigureKind::RoundedRectangle
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn to_path(&self) -> BezPath {
        if self.corner_radius > 0.0 {
            RoundedRect::from_rect(self.as_rect(), self.corner_radius).to_path(0.1)
        } else {
            self.as_rect().to_path(0.1)
        }
    }

    fn style(&self) -> &FigureStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut FigureStyle {
        &mut self.style
    }
}
