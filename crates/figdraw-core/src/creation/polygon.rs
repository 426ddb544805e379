//! Open-ended polygons closed by an explicit gesture.

use super::BuilderProgress;
use crate::input::PointerEvent;
use crate::shapes::{Figure, FigureKind, FigureStyle};
use kurbo::Point;

/// Fewest vertices for which a right-click closes instead of cancelling.
const MIN_CLOSING_VERTICES: usize = 3;

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    AwaitingFirstPoint,
    Open {
        figure: Figure,
        /// Last known pointer position, for the rubber band.
        cursor: Option<Point>,
    },
}

/// N-point controller for [`FigureKind::Polygon`].
///
/// Every press adds a vertex. A double-click commits the polygon as it is,
/// a right-click commits once there are at least three vertices and discards
/// the polygon otherwise.
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    state: State,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: PointerEvent, style: &FigureStyle) -> BuilderProgress {
        use BuilderProgress::{Cancelled, Finished, Idle, InProgress};

        let (next, progress) = match (std::mem::take(&mut self.state), event) {
            (State::AwaitingFirstPoint, PointerEvent::Down(p)) => {
                let figure = FigureKind::Polygon.create(style, p);
                (State::Open { figure, cursor: Some(p) }, InProgress)
            }
            (State::AwaitingFirstPoint, _) => (State::AwaitingFirstPoint, Idle),
            (State::Open { mut figure, .. }, PointerEvent::Down(p)) => {
                if let Some(polygon) = figure.as_polygon_mut() {
                    polygon.push_vertex(p);
                }
                (State::Open { figure, cursor: Some(p) }, InProgress)
            }
            (State::Open { figure, .. }, PointerEvent::Move(p)) => {
                (State::Open { figure, cursor: Some(p) }, InProgress)
            }
            (State::Open { figure, .. }, PointerEvent::Up(p)) => {
                (State::Open { figure, cursor: Some(p) }, InProgress)
            }
            (State::Open { mut figure, .. }, PointerEvent::DoubleClick(_)) => {
                figure.finalize();
                (State::AwaitingFirstPoint, Finished(figure))
            }
            (State::Open { mut figure, .. }, PointerEvent::RightClick(_)) => {
                if vertex_count(&figure) >= MIN_CLOSING_VERTICES {
                    figure.finalize();
                    (State::AwaitingFirstPoint, Finished(figure))
                } else {
                    (State::AwaitingFirstPoint, Cancelled)
                }
            }
        };
        self.state = next;
        progress
    }

    pub fn cancel(&mut self) -> bool {
        matches!(std::mem::take(&mut self.state), State::Open { .. })
    }

    pub fn pending_figure(&self) -> Option<&Figure> {
        match &self.state {
            State::Open { figure, .. } => Some(figure),
            State::AwaitingFirstPoint => None,
        }
    }

    pub(crate) fn pending_figure_mut(&mut self) -> Option<&mut Figure> {
        match &mut self.state {
            State::Open { figure, .. } => Some(figure),
            State::AwaitingFirstPoint => None,
        }
    }

    /// Segment from the last vertex to the pointer.
    pub fn rubber_band(&self) -> Option<(Point, Point)> {
        match &self.state {
            State::Open {
                figure,
                cursor: Some(cursor),
            } => figure
                .as_polygon()
                .and_then(|p| p.last_vertex())
                .map(|last| (last, *cursor)),
            _ => None,
        }
    }

    pub fn tip(&self) -> &'static str {
        match &self.state {
            State::AwaitingFirstPoint => "Click to place the first vertex",
            State::Open { figure, .. } if vertex_count(figure) >= MIN_CLOSING_VERTICES => {
                "Click to add a vertex, double-click or right-click to close"
            }
            State::Open { .. } => {
                "Click to add a vertex, double-click to close, right-click to cancel"
            }
        }
    }
}

fn vertex_count(figure: &Figure) -> usize {
    figure.as_polygon().map_or(0, |p| p.len())
}
