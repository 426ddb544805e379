//! Figure creation state machines.
//!
//! A controller turns the pointer events of one gesture into a finished
//! [`Figure`]. There is one controller shape per interaction arity:
//! two-point drags (circle, ellipse, rectangle), the three-point rounded
//! rectangle, and the open-ended polygon.

mod polygon;
mod rounded;
mod two_point;

pub use polygon::PolygonBuilder;
pub use rounded::RoundedRectangleBuilder;
pub use two_point::TwoPointBuilder;

use crate::drawing::StyleChange;
use crate::input::PointerEvent;
use crate::shapes::{Arity, Figure, FigureKind, FigureStyle};
use kurbo::Point;

/// Outcome of feeding one event to a controller.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderProgress {
    /// Nothing in progress and the event did not start a gesture.
    Idle,
    /// A gesture is in progress.
    InProgress,
    /// The gesture committed this figure; the controller is idle again.
    Finished(Figure),
    /// The gesture was discarded; the controller is idle again.
    Cancelled,
}

impl BuilderProgress {
    pub fn is_finished(&self) -> bool {
        matches!(self, BuilderProgress::Finished(_))
    }
}

/// The creation controller for the currently selected figure kind.
#[derive(Debug, Clone)]
pub enum CreationController {
    TwoPoint(TwoPointBuilder),
    ThreePoint(RoundedRectangleBuilder),
    Open(PolygonBuilder),
}

impl CreationController {
    /// Build an idle controller for `kind`.
    pub fn for_kind(kind: FigureKind) -> Self {
        match kind.arity() {
            Arity::TwoPoint => CreationController::TwoPoint(TwoPointBuilder::new(kind)),
            Arity::ThreePoint => CreationController::ThreePoint(RoundedRectangleBuilder::new()),
            Arity::Open => CreationController::Open(PolygonBuilder::new()),
        }
    }

    /// Kind of figure this controller creates.
    pub fn kind(&self) -> FigureKind {
        match self {
            CreationController::TwoPoint(b) => b.kind(),
            CreationController::ThreePoint(_) => FigureKind::RoundedRectangle,
            CreationController::Open(_) => FigureKind::Polygon,
        }
    }

    /// Feed one pointer event. `style` is applied when the event starts a gesture.
    ///
    /// Only polygons close on a double-click; the other kinds take it as a
    /// plain press so a quick re-press still starts a figure.
    pub fn handle_event(&mut self, event: PointerEvent, style: &FigureStyle) -> BuilderProgress {
        let event = match event {
            PointerEvent::DoubleClick(p) if !matches!(self, CreationController::Open(_)) => {
                PointerEvent::Down(p)
            }
            other => other,
        };
        let progress = match self {
            CreationController::TwoPoint(b) => b.handle_event(event, style),
            CreationController::ThreePoint(b) => b.handle_event(event, style),
            CreationController::Open(b) => b.handle_event(event, style),
        };
        match &progress {
            BuilderProgress::Finished(figure) => {
                log::debug!("{} gesture finished ({})", self.kind(), figure.id());
            }
            BuilderProgress::Cancelled => log::debug!("{} gesture cancelled", self.kind()),
            BuilderProgress::Idle => log::trace!("ignored {:?} with no gesture", event),
            BuilderProgress::InProgress => {}
        }
        progress
    }

    /// Discard any figure under construction. Returns true if one was dropped.
    pub fn cancel(&mut self) -> bool {
        let dropped = match self {
            CreationController::TwoPoint(b) => b.cancel(),
            CreationController::ThreePoint(b) => b.cancel(),
            CreationController::Open(b) => b.cancel(),
        };
        if dropped {
            log::debug!("{} gesture cancelled", self.kind());
        }
        dropped
    }

    /// Apply a style change to the figure under construction.
    /// Returns false when no gesture is in progress.
    pub fn restyle_pending(&mut self, change: &StyleChange) -> bool {
        let pending = match self {
            CreationController::TwoPoint(b) => b.pending_figure_mut(),
            CreationController::ThreePoint(b) => b.pending_figure_mut(),
            CreationController::Open(b) => b.pending_figure_mut(),
        };
        match pending {
            Some(figure) => {
                change.apply(figure.style_mut());
                true
            }
            None => false,
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.pending_figure().is_some()
    }

    /// The figure under construction, for live preview.
    pub fn pending_figure(&self) -> Option<&Figure> {
        match self {
            CreationController::TwoPoint(b) => b.pending_figure(),
            CreationController::ThreePoint(b) => b.pending_figure(),
            CreationController::Open(b) => b.pending_figure(),
        }
    }

    /// Guide segment from the last polygon vertex to the pointer.
    pub fn rubber_band(&self) -> Option<(Point, Point)> {
        match self {
            CreationController::Open(b) => b.rubber_band(),
            _ => None,
        }
    }

    /// Advisory text for the status bar.
    pub fn tip(&self) -> &'static str {
        match self {
            CreationController::TwoPoint(b) => b.tip(),
            CreationController::ThreePoint(b) => b.tip(),
            CreationController::Open(b) => b.tip(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_per_arity() {
        assert!(matches!(
            CreationController::for_kind(FigureKind::Ellipse),
            CreationController::TwoPoint(_)
        ));
        assert!(matches!(
            CreationController::for_kind(FigureKind::RoundedRectangle),
            CreationController::ThreePoint(_)
        ));
        assert!(matches!(
            CreationController::for_kind(FigureKind::Polygon),
            CreationController::Open(_)
        ));
        for kind in FigureKind::ALL {
            assert_eq!(CreationController::for_kind(kind).kind(), kind);
        }
    }

    #[test]
    fn test_events_without_gesture_are_ignored() {
        let style = FigureStyle::default();
        for kind in FigureKind::ALL {
            let mut controller = CreationController::for_kind(kind);
            let p = Point::new(5.0, 5.0);
            assert_eq!(controller.handle_event(PointerEvent::Move(p), &style), BuilderProgress::Idle);
            assert_eq!(controller.handle_event(PointerEvent::Up(p), &style), BuilderProgress::Idle);
            assert_eq!(
                controller.handle_event(PointerEvent::RightClick(p), &style),
                BuilderProgress::Idle
            );
            assert!(!controller.is_active());
        }
        let mut polygon = CreationController::for_kind(FigureKind::Polygon);
        assert_eq!(
            polygon.handle_event(PointerEvent::DoubleClick(Point::ZERO), &style),
            BuilderProgress::Idle
        );
    }

    #[test]
    fn test_double_click_starts_non_polygon_gesture() {
        let style = FigureStyle::default();
        for kind in [FigureKind::Circle, FigureKind::Rectangle, FigureKind::RoundedRectangle] {
            let mut controller = CreationController::for_kind(kind);
            let p = Point::new(2.0, 2.0);
            assert_eq!(
                controller.handle_event(PointerEvent::DoubleClick(p), &style),
                BuilderProgress::InProgress
            );
            assert!(controller.is_active());
        }
    }

    #[test]
    fn test_restyle_pending() {
        let style = FigureStyle::default();
        let mut controller = CreationController::for_kind(FigureKind::Polygon);
        let change = StyleChange::FillPaint(Some(crate::shapes::Paint::RED));
        assert!(!controller.restyle_pending(&change));

        controller.handle_event(PointerEvent::Down(Point::ZERO), &style);
        assert!(controller.restyle_pending(&change));
        let fill = controller.pending_figure().and_then(|f| f.style().fill);
        assert_eq!(fill, Some(crate::shapes::Paint::RED));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let style = FigureStyle::default();
        let mut controller = CreationController::for_kind(FigureKind::Rectangle);
        controller.handle_event(PointerEvent::Down(Point::ZERO), &style);
        assert!(controller.is_active());
        assert!(controller.cancel());
        assert!(!controller.is_active());
        assert!(!controller.cancel());
    }

    #[test]
    fn test_tip_changes_with_state() {
        let style = FigureStyle::default();
        let mut controller = CreationController::for_kind(FigureKind::Circle);
        let idle_tip = controller.tip();
        controller.handle_event(PointerEvent::Down(Point::ZERO), &style);
        assert_ne!(controller.tip(), idle_tip);
    }
}
