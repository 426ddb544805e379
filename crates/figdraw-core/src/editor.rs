//! Editor session: the glue between presentation events and the drawing.

use crate::commands::{Command, CommandOutcome, ShortcutRegistry};
use crate::config::{ConfigResult, EditorConfig};
use crate::creation::{BuilderProgress, CreationController};
use crate::drawing::{Drawing, StyleChange};
use crate::input::PointerEvent;
use crate::palette::{ColorSelector, PaintTarget, PaletteError, SelectionOutcome};
use crate::shapes::{Figure, FigureKind, FigureStyle, LineType, Paint};
use crate::style::{StyleSnapshot, StyleState};
use kurbo::Point;

/// One drawing plus the interaction state around it.
#[derive(Debug)]
pub struct Editor {
    drawing: Drawing,
    style: StyleState,
    controller: CreationController,
    fill: ColorSelector,
    edge: ColorSelector,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        let config = EditorConfig::default();
        let fill = ColorSelector::new(PaintTarget::Fill);
        let edge = ColorSelector::new(PaintTarget::Edge);
        Self::assemble(&config, fill, edge)
    }

    /// Start a session from a configuration, validating it first.
    pub fn with_config(config: EditorConfig) -> ConfigResult<Self> {
        config.validate()?;
        let fill = selector(PaintTarget::Fill, config.default_fill_index)?;
        let edge = selector(PaintTarget::Edge, config.default_edge_index)?;
        Ok(Self::assemble(&config, fill, edge))
    }

    fn assemble(config: &EditorConfig, fill: ColorSelector, edge: ColorSelector) -> Self {
        let defaults = FigureStyle {
            stroke_width: config.default_stroke_width as f64,
            line_type: config.default_line_type,
            edge: edge.current_paint(),
            fill: fill.current_paint(),
        };
        Self {
            drawing: Drawing::with_defaults(defaults),
            style: StyleState::from_config(config),
            controller: CreationController::for_kind(config.default_kind),
            fill,
            edge,
        }
    }

    /// Route a pointer event to the active controller. A finished figure is
    /// added to the drawing before this returns.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> BuilderProgress {
        let progress = self.controller.handle_event(event, self.drawing.defaults());
        if let BuilderProgress::Finished(figure) = &progress {
            self.drawing.add(figure.clone());
        }
        progress
    }

    /// Switch the figure kind. Any figure under construction is discarded.
    pub fn select_kind(&mut self, kind: FigureKind) {
        if self.controller.cancel() {
            log::info!("Discarded unfinished {} on switching to {}", self.controller.kind(), kind);
        }
        self.style.set_kind(kind);
        self.controller = CreationController::for_kind(kind);
    }

    /// Returns the width actually applied after clamping.
    pub fn set_stroke_width(&mut self, width: i64) -> i64 {
        let applied = self.style.set_stroke_width(&mut self.drawing, width);
        self.restyle_pending(StyleChange::StrokeWidth(applied as f64));
        applied
    }

    pub fn set_line_type(&mut self, line_type: LineType) {
        self.style.set_line_type(&mut self.drawing, line_type);
        self.restyle_pending(StyleChange::LineType(line_type));
    }

    pub fn set_fill_paint(&mut self, paint: Option<Paint>) {
        self.style.set_fill_paint(&mut self.drawing, paint);
        self.restyle_pending(StyleChange::FillPaint(paint));
    }

    pub fn set_edge_paint(&mut self, paint: Option<Paint>) {
        self.style.set_edge_paint(&mut self.drawing, paint);
        self.restyle_pending(StyleChange::EdgePaint(paint));
    }

    /// The figure under construction follows style changes the same way the
    /// committed figures do.
    fn restyle_pending(&mut self, change: StyleChange) {
        if self.style.restyle_existing() {
            self.controller.restyle_pending(&change);
        }
    }

    /// Pick a fill palette entry; see [`ColorSelector::select`].
    pub fn select_fill(
        &mut self,
        index: usize,
        picker: impl FnOnce(Paint) -> Option<Paint>,
    ) -> Result<SelectionOutcome, PaletteError> {
        let outcome = self.fill.select(index, picker)?;
        if let SelectionOutcome::Applied(paint) = outcome {
            self.set_fill_paint(paint);
        }
        Ok(outcome)
    }

    /// Pick an edge palette entry; see [`ColorSelector::select`].
    pub fn select_edge(
        &mut self,
        index: usize,
        picker: impl FnOnce(Paint) -> Option<Paint>,
    ) -> Result<SelectionOutcome, PaletteError> {
        let outcome = self.edge.select(index, picker)?;
        if let SelectionOutcome::Applied(paint) = outcome {
            self.set_edge_paint(paint);
        }
        Ok(outcome)
    }

    /// Drop the figure under construction. Returns false if there was none.
    pub fn cancel_gesture(&mut self) -> bool {
        self.controller.cancel()
    }

    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        log::debug!("Executing {:?}", command);
        match command {
            Command::Undo => {
                self.drawing.undo_last();
                CommandOutcome::Continue
            }
            Command::Clear => {
                self.drawing.clear();
                CommandOutcome::Continue
            }
            Command::Quit => CommandOutcome::Quit,
            Command::CancelGesture => {
                self.cancel_gesture();
                CommandOutcome::Continue
            }
            Command::About => CommandOutcome::Info(format!(
                "{} {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )),
        }
    }

    /// Run the command bound to a key press, if any.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool) -> Option<CommandOutcome> {
        ShortcutRegistry::lookup(key, ctrl, shift).map(|command| self.execute(command))
    }

    /// Advisory text for the current gesture stage.
    pub fn tip(&self) -> &'static str {
        self.controller.tip()
    }

    /// Figure under construction.
    pub fn preview(&self) -> Option<&Figure> {
        self.controller.pending_figure()
    }

    pub fn rubber_band(&self) -> Option<(Point, Point)> {
        self.controller.rubber_band()
    }

    pub fn kind(&self) -> FigureKind {
        self.style.kind()
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Mutable access, for subscriptions and programmatic edits.
    pub fn drawing_mut(&mut self) -> &mut Drawing {
        &mut self.drawing
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    pub fn snapshot(&self) -> StyleSnapshot {
        self.style.snapshot(&self.drawing)
    }

    pub fn fill_selector(&self) -> &ColorSelector {
        &self.fill
    }

    pub fn edge_selector(&self) -> &ColorSelector {
        &self.edge
    }
}

fn selector(target: PaintTarget, index: usize) -> ConfigResult<ColorSelector> {
    ColorSelector::with_index(target, index)
        .map_err(|e| crate::config::ConfigError::InvalidRange(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(editor: &mut Editor, x: f64, y: f64) {
        editor.handle_pointer(PointerEvent::Down(Point::new(x, y)));
        editor.handle_pointer(PointerEvent::Up(Point::new(x, y)));
    }

    #[test]
    fn test_new_editor_defaults() {
        let editor = Editor::new();
        assert_eq!(editor.kind(), FigureKind::Circle);
        assert!(editor.drawing().is_empty());
        assert_eq!(editor.snapshot().style, FigureStyle::default());
        assert!(editor.preview().is_none());
    }

    #[test]
    fn test_with_config() {
        let config = EditorConfig {
            default_kind: FigureKind::Rectangle,
            default_fill_index: 9,
            default_stroke_width: 10,
            ..Default::default()
        };
        let editor = Editor::with_config(config).unwrap();
        assert_eq!(editor.kind(), FigureKind::Rectangle);
        assert_eq!(editor.drawing().defaults().fill, None);
        assert!((editor.drawing().defaults().stroke_width - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_invalid_config() {
        let config = EditorConfig {
            default_stroke_width: 0,
            ..Default::default()
        };
        assert!(Editor::with_config(config).is_err());
    }

    #[test]
    fn test_commit_lands_in_drawing() {
        let mut editor = Editor::new();
        editor.handle_pointer(PointerEvent::Down(Point::ZERO));
        assert!(editor.preview().is_some());
        assert!(editor.drawing().is_empty());

        let progress = editor.handle_pointer(PointerEvent::Up(Point::new(3.0, 4.0)));
        assert!(progress.is_finished());
        assert_eq!(editor.drawing().len(), 1);
        assert!(editor.preview().is_none());
    }

    #[test]
    fn test_select_kind_discards_pending() {
        let mut editor = Editor::new();
        editor.select_kind(FigureKind::Polygon);
        click(&mut editor, 0.0, 0.0);
        click(&mut editor, 5.0, 0.0);
        assert!(editor.preview().is_some());

        editor.select_kind(FigureKind::Ellipse);
        assert!(editor.preview().is_none());
        assert!(editor.drawing().is_empty());
        assert_eq!(editor.kind(), FigureKind::Ellipse);
    }

    #[test]
    fn test_commands() {
        let mut editor = Editor::new();
        click(&mut editor, 1.0, 1.0);
        click(&mut editor, 2.0, 2.0);
        assert_eq!(editor.drawing().len(), 2);

        assert_eq!(editor.execute(Command::Undo), CommandOutcome::Continue);
        assert_eq!(editor.drawing().len(), 1);
        assert_eq!(editor.handle_key("d", true, false), Some(CommandOutcome::Continue));
        assert!(editor.drawing().is_empty());
        assert_eq!(editor.handle_key("q", true, false), Some(CommandOutcome::Quit));
        assert_eq!(editor.handle_key("x", false, false), None);

        let CommandOutcome::Info(text) = editor.execute(Command::About) else {
            panic!("about should return text");
        };
        assert!(text.starts_with("figdraw-core"));
    }

    #[test]
    fn test_palette_selection_restyles() {
        let mut editor = Editor::new();
        click(&mut editor, 1.0, 1.0);

        editor.select_fill(2, |_| None).unwrap();
        assert_eq!(editor.drawing().figures()[0].style().fill, Some(Paint::ORANGE));
        assert_eq!(editor.drawing().defaults().fill, Some(Paint::ORANGE));

        // Cancelled picker changes nothing
        let outcome = editor.select_edge(8, |_| None).unwrap();
        assert_eq!(outcome, SelectionOutcome::Unchanged);
        assert_eq!(editor.drawing().defaults().edge, Some(Paint::BLUE));
        assert_eq!(editor.edge_selector().selected_index(), 6);
    }

    #[test]
    fn test_style_change_reaches_figure_in_progress() {
        let mut editor = Editor::new();
        click(&mut editor, 50.0, 50.0);
        editor.select_kind(FigureKind::Polygon);
        click(&mut editor, 0.0, 0.0);
        click(&mut editor, 10.0, 0.0);

        editor.set_fill_paint(Some(Paint::RED));
        click(&mut editor, 10.0, 10.0);
        let progress = editor.handle_pointer(PointerEvent::DoubleClick(Point::new(10.0, 10.0)));
        assert!(progress.is_finished());

        let fills: Vec<_> = editor.drawing().iter().map(|f| f.style().fill).collect();
        assert_eq!(fills, vec![Some(Paint::RED), Some(Paint::RED)]);
    }

    #[test]
    fn test_pending_figure_keeps_style_when_defaults_only() {
        let mut editor = Editor::new();
        editor.style_mut().set_restyle_existing(false);
        editor.handle_pointer(PointerEvent::Down(Point::ZERO));

        editor.set_stroke_width(20);
        let width = editor.preview().map(|f| f.style().stroke_width).unwrap();
        assert!((width - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_escape_cancels_gesture() {
        let mut editor = Editor::new();
        editor.handle_pointer(PointerEvent::Down(Point::ZERO));
        assert!(editor.handle_key("Escape", false, false).is_some());
        assert!(editor.preview().is_none());
        assert!(!editor.cancel_gesture());
    }
}
