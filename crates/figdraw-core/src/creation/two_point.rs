//! Press, drag, release: circles, ellipses and rectangles.

use super::BuilderProgress;
use crate::input::PointerEvent;
use crate::shapes::{Arity, Figure, FigureKind, FigureStyle};
use kurbo::Point;

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    AwaitingFirstPoint,
    Collecting { anchor: Point, figure: Figure },
}

/// Controller for kinds defined by an anchor and one dragged point.
#[derive(Debug, Clone)]
pub struct TwoPointBuilder {
    kind: FigureKind,
    state: State,
}

impl TwoPointBuilder {
    /// # Panics
    ///
    /// Panics if `kind` is not a two-point kind.
    pub fn new(kind: FigureKind) -> Self {
        assert_eq!(
            kind.arity(),
            Arity::TwoPoint,
            "{kind} is not created with a two-point gesture"
        );
        Self {
            kind,
            state: State::AwaitingFirstPoint,
        }
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn handle_event(&mut self, event: PointerEvent, style: &FigureStyle) -> BuilderProgress {
        let (next, progress) = match (std::mem::take(&mut self.state), event) {
            (State::AwaitingFirstPoint, PointerEvent::Down(p)) => {
                let figure = self.kind.create(style, p);
                (State::Collecting { anchor: p, figure }, BuilderProgress::InProgress)
            }
            (State::AwaitingFirstPoint, _) => (State::AwaitingFirstPoint, BuilderProgress::Idle),
            (State::Collecting { anchor, mut figure }, PointerEvent::Move(p)) => {
                figure.drag_to(anchor, p);
                (State::Collecting { anchor, figure }, BuilderProgress::InProgress)
            }
            (State::Collecting { anchor, mut figure }, PointerEvent::Up(p)) => {
                figure.drag_to(anchor, p);
                figure.finalize();
                (State::AwaitingFirstPoint, BuilderProgress::Finished(figure))
            }
            (State::Collecting { .. }, PointerEvent::RightClick(_)) => {
                (State::AwaitingFirstPoint, BuilderProgress::Cancelled)
            }
            // A stray press while dragging keeps the current gesture
            (collecting @ State::Collecting { .. }, _) => (collecting, BuilderProgress::InProgress),
        };
        self.state = next;
        progress
    }

    pub fn cancel(&mut self) -> bool {
        matches!(std::mem::take(&mut self.state), State::Collecting { .. })
    }

    pub fn pending_figure(&self) -> Option<&Figure> {
        match &self.state {
            State::Collecting { figure, .. } => Some(figure),
            State::AwaitingFirstPoint => None,
        }
    }

    pub(crate) fn pending_figure_mut(&mut self) -> Option<&mut Figure> {
        match &mut self.state {
            State::Collecting { figure, .. } => Some(figure),
            State::AwaitingFirstPoint => None,
        }
    }

    pub fn tip(&self) -> &'static str {
        match (&self.state, self.kind) {
            (State::Collecting { .. }, _) => "Drag to resize, release to fix the size",
            (State::AwaitingFirstPoint, FigureKind::Circle) => {
                "Press to set the circle center, then drag to set the radius"
            }
            (State::AwaitingFirstPoint, FigureKind::Ellipse) => {
                "Press to set the ellipse center, then drag to set its axes"
            }
            (State::AwaitingFirstPoint, _) => {
                "Press to place a corner, then drag to the opposite corner"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::FigureTrait;

    fn drag(kind: FigureKind, from: Point, to: Point) -> Figure {
        let style = FigureStyle::default();
        let mut builder = TwoPointBuilder::new(kind);
        assert_eq!(builder.handle_event(PointerEvent::Down(from), &style), BuilderProgress::InProgress);
        builder.handle_event(PointerEvent::Move(Point::new(to.x / 2.0, to.y / 2.0)), &style);
        match builder.handle_event(PointerEvent::Up(to), &style) {
            BuilderProgress::Finished(figure) => figure,
            other => panic!("expected a finished figure, got {other:?}"),
        }
    }

    #[test]
    fn test_circle_radius() {
        let Figure::Circle(circle) = drag(FigureKind::Circle, Point::ZERO, Point::new(3.0, 4.0)) else {
            panic!("not a circle");
        };
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(circle.center, Point::ZERO);
    }

    #[test]
    fn test_rectangle_normalization() {
        let Figure::Rectangle(rect) =
            drag(FigureKind::Rectangle, Point::new(10.0, 10.0), Point::new(2.0, 2.0))
        else {
            panic!("not a rectangle");
        };
        assert_eq!(rect.position, Point::new(2.0, 2.0));
        assert!((rect.width - 8.0).abs() < f64::EPSILON);
        assert!((rect.height - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ellipse_axes() {
        let Figure::Ellipse(ellipse) =
            drag(FigureKind::Ellipse, Point::new(10.0, 10.0), Point::new(16.0, 2.0))
        else {
            panic!("not an ellipse");
        };
        assert!((ellipse.semi_major - 6.0).abs() < f64::EPSILON);
        assert!((ellipse.semi_minor - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_updates_preview() {
        let style = FigureStyle::default();
        let mut builder = TwoPointBuilder::new(FigureKind::Rectangle);
        builder.handle_event(PointerEvent::Down(Point::ZERO), &style);
        builder.handle_event(PointerEvent::Move(Point::new(4.0, 3.0)), &style);
        let bounds = builder.pending_figure().map(|f| f.bounds()).unwrap();
        assert!((bounds.width() - 4.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_commit_allowed() {
        let figure = drag(FigureKind::Circle, Point::new(1.0, 1.0), Point::new(1.0, 1.0));
        assert!(figure.bounds().area().abs() < f64::EPSILON);
    }

    #[test]
    fn test_right_click_cancels() {
        let style = FigureStyle::default();
        let mut builder = TwoPointBuilder::new(FigureKind::Ellipse);
        builder.handle_event(PointerEvent::Down(Point::ZERO), &style);
        assert_eq!(
            builder.handle_event(PointerEvent::RightClick(Point::ZERO), &style),
            BuilderProgress::Cancelled
        );
        assert!(builder.pending_figure().is_none());
    }

    #[test]
    fn test_style_captured_at_press() {
        let mut style = FigureStyle::default();
        style.stroke_width = 11.0;
        let mut builder = TwoPointBuilder::new(FigureKind::Rectangle);
        builder.handle_event(PointerEvent::Down(Point::ZERO), &style);

        let other = FigureStyle::default();
        let BuilderProgress::Finished(figure) =
            builder.handle_event(PointerEvent::Up(Point::new(1.0, 1.0)), &other)
        else {
            panic!("expected commit");
        };
        assert!((figure.style().stroke_width - 11.0).abs() < f64::EPSILON);
        if let Figure::Rectangle(r) = &figure {
            assert!((r.style().stroke_width - 11.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    #[should_panic(expected = "two-point")]
    fn test_wrong_arity_panics() {
        let _ = TwoPointBuilder::new(FigureKind::Polygon);
    }
}
