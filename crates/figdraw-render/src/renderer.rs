//! Renderer trait abstraction.

use figdraw_core::{Drawing, Editor, Figure};
use kurbo::{Affine, Point, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The committed figures.
    pub drawing: &'a Drawing,
    /// Figure under construction, drawn on top.
    pub preview: Option<&'a Figure>,
    /// Guide from the last polygon vertex to the pointer.
    pub rubber_band: Option<(Point, Point)>,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Color of the rubber band.
    pub guide_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(drawing: &'a Drawing, viewport_size: Size) -> Self {
        Self {
            drawing,
            preview: None,
            rubber_band: None,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::WHITE,
            guide_color: Color::from_rgba8(128, 128, 128, 255),
        }
    }

    /// Context showing an editor's drawing and its gesture feedback.
    pub fn from_editor(editor: &'a Editor, viewport_size: Size) -> Self {
        Self::new(editor.drawing(), viewport_size)
            .with_preview(editor.preview())
            .with_rubber_band(editor.rubber_band())
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_guide_color(mut self, color: Color) -> Self {
        self.guide_color = color;
        self
    }

    pub fn with_preview(mut self, preview: Option<&'a Figure>) -> Self {
        self.preview = preview;
        self
    }

    pub fn with_rubber_band(mut self, segment: Option<(Point, Point)>) -> Self {
        self.rubber_band = segment;
        self
    }

    /// Logical to device pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// Check the viewport before building a frame.
    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(RendererError::InvalidViewport(format!("{width}x{height}")));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(RendererError::InvalidViewport(format!(
                "scale factor {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Validate the context, then build the scene.
    fn try_build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.build_scene(ctx);
        Ok(())
    }

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Per-figure drawing.
pub trait FigureRenderer {
    /// Render a figure with its own style.
    fn render_figure(&mut self, figure: &Figure, transform: Affine);

    /// Render a guide segment.
    fn render_guide(&mut self, from: Point, to: Point, color: Color, transform: Affine);
}

#[cfg(test)]
mod tests {
    use super::*;
    use figdraw_core::PointerEvent;

    #[test]
    fn test_context_from_editor() {
        let mut editor = Editor::new();
        editor.handle_pointer(PointerEvent::Down(Point::new(5.0, 5.0)));
        editor.handle_pointer(PointerEvent::Move(Point::new(8.0, 9.0)));

        let ctx = RenderContext::from_editor(&editor, Size::new(640.0, 480.0));
        assert!(ctx.preview.is_some());
        assert!(ctx.rubber_band.is_none());
        assert!(ctx.drawing.is_empty());
    }

    #[test]
    fn test_validate_viewport() {
        let drawing = Drawing::new();
        assert!(RenderContext::new(&drawing, Size::new(10.0, 10.0)).validate().is_ok());
        assert!(RenderContext::new(&drawing, Size::new(-1.0, 10.0)).validate().is_err());
        assert!(RenderContext::new(&drawing, Size::new(f64::NAN, 10.0)).validate().is_err());
        assert!(
            RenderContext::new(&drawing, Size::new(10.0, 10.0))
                .with_scale_factor(0.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_builders() {
        let drawing = Drawing::new();
        let segment = (Point::ZERO, Point::new(1.0, 1.0));
        let ctx = RenderContext::new(&drawing, Size::new(1.0, 1.0))
            .with_background(Color::BLACK)
            .with_rubber_band(Some(segment))
            .with_scale_factor(2.0);
        assert_eq!(ctx.rubber_band, Some(segment));
        assert_eq!(ctx.transform(), Affine::scale(2.0));
    }
}
