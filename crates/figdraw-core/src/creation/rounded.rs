//! Rounded rectangles: a rectangle drag followed by a corner-radius gesture.

use super::BuilderProgress;
use crate::input::PointerEvent;
use crate::shapes::{Figure, FigureKind, FigureStyle};
use kurbo::Point;

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    AwaitingFirstPoint,
    /// Dragging the opposite corner.
    Sizing { anchor: Point, figure: Figure },
    /// Extent fixed, waiting for the radius press.
    AwaitingRadius { figure: Figure },
    /// Dragging the radius.
    Rounding { figure: Figure },
}

/// Three-point controller for [`FigureKind::RoundedRectangle`].
///
/// The requested radius is the distance from the rectangle's top-left corner
/// to the pointer, clamped to half the shorter side.
#[derive(Debug, Clone, Default)]
pub struct RoundedRectangleBuilder {
    state: State,
}

impl RoundedRectangleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: PointerEvent, style: &FigureStyle) -> BuilderProgress {
        use BuilderProgress::{Cancelled, Finished, Idle, InProgress};

        let (next, progress) = match (std::mem::take(&mut self.state), event) {
            (State::AwaitingFirstPoint, PointerEvent::Down(p)) => {
                let figure = FigureKind::RoundedRectangle.create(style, p);
                (State::Sizing { anchor: p, figure }, InProgress)
            }
            (State::AwaitingFirstPoint, _) => (State::AwaitingFirstPoint, Idle),
            (_, PointerEvent::RightClick(_)) => (State::AwaitingFirstPoint, Cancelled),

            (State::Sizing { anchor, mut figure }, PointerEvent::Move(p)) => {
                figure.drag_to(anchor, p);
                (State::Sizing { anchor, figure }, InProgress)
            }
            (State::Sizing { anchor, mut figure }, PointerEvent::Up(p)) => {
                figure.drag_to(anchor, p);
                (State::AwaitingRadius { figure }, InProgress)
            }
            (sizing @ State::Sizing { .. }, _) => (sizing, InProgress),

            (State::AwaitingRadius { mut figure }, PointerEvent::Move(p)) => {
                round_to(&mut figure, p);
                (State::AwaitingRadius { figure }, InProgress)
            }
            (State::AwaitingRadius { mut figure }, PointerEvent::Down(p)) => {
                round_to(&mut figure, p);
                (State::Rounding { figure }, InProgress)
            }
            (waiting @ State::AwaitingRadius { .. }, _) => (waiting, InProgress),

            (State::Rounding { mut figure }, PointerEvent::Move(p)) => {
                round_to(&mut figure, p);
                (State::Rounding { figure }, InProgress)
            }
            (State::Rounding { mut figure }, PointerEvent::Up(p)) => {
                round_to(&mut figure, p);
                figure.finalize();
                (State::AwaitingFirstPoint, Finished(figure))
            }
            (rounding @ State::Rounding { .. }, _) => (rounding, InProgress),
        };
        self.state = next;
        progress
    }

    pub fn cancel(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.state), State::AwaitingFirstPoint)
    }

    pub fn pending_figure(&self) -> Option<&Figure> {
        match &self.state {
            State::AwaitingFirstPoint => None,
            State::Sizing { figure, .. }
            | State::AwaitingRadius { figure }
            | State::Rounding { figure } => Some(figure),
        }
    }

    pub(crate) fn pending_figure_mut(&mut self) -> Option<&mut Figure> {
        match &mut self.state {
            State::AwaitingFirstPoint => None,
            State::Sizing { figure, .. }
            | State::AwaitingRadius { figure }
            | State::Rounding { figure } => Some(figure),
        }
    }

    pub fn tip(&self) -> &'static str {
        match self.state {
            State::AwaitingFirstPoint => {
                "Press to place a corner, then drag to the opposite corner"
            }
            State::Sizing { .. } => "Drag to resize, release to fix the size",
            State::AwaitingRadius { .. } => "Click and drag to set the corner radius",
            State::Rounding { .. } => "Drag to adjust the corner radius, release to finish",
        }
    }
}

fn round_to(figure: &mut Figure, pointer: Point) {
    if let Some(rect) = figure.as_rounded_rectangle_mut() {
        rect.set_corner_radius(rect.position.distance(pointer));
    }
}
