//! Style selection state.

use crate::config::EditorConfig;
use crate::drawing::{Drawing, RestyleTarget, StyleChange};
use crate::shapes::{FigureKind, FigureStyle, LineType, Paint};

/// Current kind and creation style, as shown by the presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSnapshot {
    pub kind: FigureKind,
    pub style: FigureStyle,
}

/// Figure kind selection plus the rules for applying style changes.
///
/// The creation defaults themselves live in the [`Drawing`]. Every setter
/// rewrites them, and also rewrites the existing figures unless
/// `restyle_existing` is off.
#[derive(Debug, Clone)]
pub struct StyleState {
    kind: FigureKind,
    min_stroke_width: i64,
    max_stroke_width: i64,
    restyle_existing: bool,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl StyleState {
    pub fn from_config(config: &EditorConfig) -> Self {
        let (min_stroke_width, max_stroke_width) = config.stroke_width_bounds();
        Self {
            kind: config.default_kind,
            min_stroke_width,
            max_stroke_width,
            restyle_existing: config.restyle_existing,
        }
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: FigureKind) {
        self.kind = kind;
    }

    /// Allowed stroke widths, inclusive.
    pub fn stroke_width_bounds(&self) -> (i64, i64) {
        (self.min_stroke_width, self.max_stroke_width)
    }

    pub fn restyle_existing(&self) -> bool {
        self.restyle_existing
    }

    pub fn set_restyle_existing(&mut self, enabled: bool) {
        self.restyle_existing = enabled;
    }

    /// Clamp a requested stroke width to the configured bounds.
    pub fn clamp_stroke_width(&self, width: i64) -> i64 {
        width.clamp(self.min_stroke_width, self.max_stroke_width)
    }

    /// Set the stroke width, clamped to the configured bounds.
    /// Returns the width actually applied.
    pub fn set_stroke_width(&self, drawing: &mut Drawing, width: i64) -> i64 {
        let clamped = self.clamp_stroke_width(width);
        if clamped != width {
            log::debug!("Stroke width {} clamped to {}", width, clamped);
        }
        self.apply(drawing, StyleChange::StrokeWidth(clamped as f64));
        clamped
    }

    pub fn set_edge_paint(&self, drawing: &mut Drawing, paint: Option<Paint>) {
        self.apply(drawing, StyleChange::EdgePaint(paint));
    }

    pub fn set_fill_paint(&self, drawing: &mut Drawing, paint: Option<Paint>) {
        self.apply(drawing, StyleChange::FillPaint(paint));
    }

    pub fn set_line_type(&self, drawing: &mut Drawing, line_type: LineType) {
        self.apply(drawing, StyleChange::LineType(line_type));
    }

    pub fn snapshot(&self, drawing: &Drawing) -> StyleSnapshot {
        StyleSnapshot {
            kind: self.kind,
            style: drawing.defaults().clone(),
        }
    }

    fn apply(&self, drawing: &mut Drawing, change: StyleChange) {
        drawing.restyle(RestyleTarget::Defaults, change);
        if self.restyle_existing {
            drawing.restyle(RestyleTarget::Existing, change);
        }
    }
}
