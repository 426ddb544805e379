//! Ellipse figure.

use super::{FigureId, FigureKind, FigureStyle, FigureTrait};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned ellipse centered on the gesture anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: FigureId,
    /// Center point.
    pub center: Point,
    /// Horizontal semi-axis.
    pub semi_major: f64,
    /// Vertical semi-axis.
    pub semi_minor: f64,
    /// Style properties.
    pub style: FigureStyle,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Point, semi_major: f64, semi_minor: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            semi_major: semi_major.max(0.0),
            semi_minor: semi_minor.max(0.0),
            style: FigureStyle::default(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    /// Semi-axes become the absolute deltas between the center and `point`.
    pub(crate) fn set_extent_to(&mut self, point: Point) {
        self.semi_major = (point.x - self.center.x).abs();
        self.semi_minor = (point.y - self.center.y).abs();
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::new(self.center, (self.semi_major, self.semi_minor), 0.0)
    }
}

impl FigureTrait for Ellipse {
    fn id(&self) -> FigureId {
        self.id
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Ellipse
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.semi_major,
            self.center.y - self.semi_minor,
            self.center.x + self.semi_major,
            self.center.y + self.semi_minor,
        )
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn style(&self) -> &FigureStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut FigureStyle {
        &mut self.style
    }
}
