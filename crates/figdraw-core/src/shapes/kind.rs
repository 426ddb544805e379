//! Figure kinds and the figure factory.

use super::{Circle, Ellipse, Figure, FigureStyle, Polygon, Rectangle, RoundedRectangle};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when decoding a figure kind coming from the presentation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FigureKindError {
    #[error("Unknown figure kind index: {0}")]
    UnknownIndex(usize),
    #[error("Unknown figure kind name: {0}")]
    UnknownName(String),
}

/// How many defining points a kind needs before it can be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Anchor plus one dragged point (circle, ellipse, rectangle).
    TwoPoint,
    /// Two corners plus a corner-radius point (rounded rectangle).
    ThreePoint,
    /// Open-ended vertex list closed by an explicit gesture (polygon).
    Open,
}

/// The five kinds of figure the editor can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FigureKind {
    #[default]
    Circle,
    Ellipse,
    Rectangle,
    RoundedRectangle,
    Polygon,
}

impl FigureKind {
    /// All kinds in presentation order.
    pub const ALL: [FigureKind; 5] = [
        FigureKind::Circle,
        FigureKind::Ellipse,
        FigureKind::Rectangle,
        FigureKind::RoundedRectangle,
        FigureKind::Polygon,
    ];

    /// Create a zero-extent figure of this kind anchored at `anchor`.
    pub fn create(self, style: &FigureStyle, anchor: Point) -> Figure {
        let style = style.clone();
        match self {
            FigureKind::Circle => Figure::Circle(Circle::new(anchor, 0.0).with_style(style)),
            FigureKind::Ellipse => {
                Figure::Ellipse(Ellipse::new(anchor, 0.0, 0.0).with_style(style))
            }
            FigureKind::Rectangle => {
                Figure::Rectangle(Rectangle::new(anchor, 0.0, 0.0).with_style(style))
            }
            FigureKind::RoundedRectangle => Figure::RoundedRectangle(
                RoundedRectangle::new(anchor, 0.0, 0.0, 0.0).with_style(style),
            ),
            FigureKind::Polygon => Figure::Polygon(Polygon::new(anchor).with_style(style)),
        }
    }

    /// Interaction arity for this kind.
    pub fn arity(self) -> Arity {
        match self {
            FigureKind::Circle | FigureKind::Ellipse | FigureKind::Rectangle => Arity::TwoPoint,
            FigureKind::RoundedRectangle => Arity::ThreePoint,
            FigureKind::Polygon => Arity::Open,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Circle => "Circle",
            FigureKind::Ellipse => "Ellipse",
            FigureKind::Rectangle => "Rectangle",
            FigureKind::RoundedRectangle => "Rounded Rectangle",
            FigureKind::Polygon => "Polygon",
        }
    }

    /// Position in [`FigureKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            FigureKind::Circle => 0,
            FigureKind::Ellipse => 1,
            FigureKind::Rectangle => 2,
            FigureKind::RoundedRectangle => 3,
            FigureKind::Polygon => 4,
        }
    }

    /// Decode a combo-box index.
    pub fn from_index(index: usize) -> Result<Self, FigureKindError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(FigureKindError::UnknownIndex(index))
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FigureKind {
    type Err = FigureKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FigureKindError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_degenerate() {
        let anchor = Point::new(12.0, 7.0);
        for kind in FigureKind::ALL {
            let fig = kind.create(&FigureStyle::default(), anchor);
            assert_eq!(fig.kind(), kind);
            let bounds = fig.bounds();
            assert!(bounds.width().abs() < f64::EPSILON);
            assert!(bounds.height().abs() < f64::EPSILON);
            assert!((bounds.x0 - anchor.x).abs() < f64::EPSILON);
            assert!((bounds.y0 - anchor.y).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_create_copies_style() {
        let style = FigureStyle {
            stroke_width: 9.0,
            line_type: super::super::LineType::Dashed,
            edge: None,
            fill: Some(super::super::Paint::GREEN),
        };
        let fig = FigureKind::Rectangle.create(&style, Point::ZERO);
        assert_eq!(fig.style(), &style);
    }

    #[test]
    fn test_polygon_starts_with_one_vertex() {
        let fig = FigureKind::Polygon.create(&FigureStyle::default(), Point::new(3.0, 4.0));
        let poly = fig.as_polygon().unwrap();
        assert_eq!(poly.vertices(), &[Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_arity() {
        assert_eq!(FigureKind::Circle.arity(), Arity::TwoPoint);
        assert_eq!(FigureKind::Ellipse.arity(), Arity::TwoPoint);
        assert_eq!(FigureKind::Rectangle.arity(), Arity::TwoPoint);
        assert_eq!(FigureKind::RoundedRectangle.arity(), Arity::ThreePoint);
        assert_eq!(FigureKind::Polygon.arity(), Arity::Open);
    }

    #[test]
    fn test_index_round_trip() {
        for kind in FigureKind::ALL {
            assert_eq!(FigureKind::from_index(kind.index()), Ok(kind));
        }
        assert_eq!(FigureKind::from_index(5), Err(FigureKindError::UnknownIndex(5)));
    }

    #[test]
    fn test_parse_name() {
        assert_eq!("rounded rectangle".parse(), Ok(FigureKind::RoundedRectangle));
        assert_eq!(FigureKind::Polygon.to_string(), "Polygon");
        assert!("hexagon".parse::<FigureKind>().is_err());
    }
}
