//! Vello-based renderer implementation.

use crate::renderer::{FigureRenderer, RenderContext, Renderer};
use figdraw_core::{Figure, FigureStyle, LineType};
use kurbo::{Affine, BezPath, Join, Point, Rect, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Dash and gap lengths, in multiples of the stroke width.
const DASH_PATTERN: [f64; 2] = [3.0, 2.0];

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Render a figure path with the given style.
    fn render_path(&mut self, path: &BezPath, style: &FigureStyle, join: Join, transform: Affine) {
        if let Some(fill_color) = style.fill_color() {
            self.scene.fill(Fill::NonZero, transform, fill_color, None, path);
        }

        if !style.has_stroke() {
            return;
        }
        let Some(edge_color) = style.edge_color() else {
            return;
        };
        let stroke = outline(style).with_join(join);
        self.scene.stroke(&stroke, transform, edge_color, None, path);
    }
}

/// Stroke for a figure outline, dashed according to its line type.
fn outline(style: &FigureStyle) -> Stroke {
    let width = style.stroke_width;
    let stroke = Stroke::new(width);
    match style.line_type {
        LineType::Dashed => {
            stroke.with_dashes(0.0, &[DASH_PATTERN[0] * width, DASH_PATTERN[1] * width])
        }
        LineType::Solid | LineType::None => stroke,
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        let transform = ctx.transform();

        let viewport = Rect::from_origin_size(Point::ZERO, ctx.viewport_size);
        self.scene
            .fill(Fill::NonZero, transform, ctx.background_color, None, &viewport);

        for figure in ctx.drawing.iter() {
            self.render_figure(figure, transform);
        }

        if let Some(preview) = ctx.preview {
            self.render_figure(preview, transform);
        }

        if let Some((from, to)) = ctx.rubber_band {
            self.render_guide(from, to, ctx.guide_color, transform);
        }
    }
}

impl FigureRenderer for VelloRenderer {
    fn render_figure(&mut self, figure: &Figure, transform: Affine) {
        let path = figure.to_path();
        let join = match figure {
            Figure::Polygon(_) => Join::Round,
            _ => Join::Miter,
        };
        self.render_path(&path, figure.style(), join, transform);
    }

    fn render_guide(&mut self, from: Point, to: Point, color: Color, transform: Affine) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        let stroke = Stroke::new(1.0).with_dashes(0.0, &[4.0, 4.0]);
        self.scene.stroke(&stroke, transform, color, None, &path);
    }
}
