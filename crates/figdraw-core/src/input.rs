//! Pointer events and raw click translation.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer events understood by the creation controllers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    DoubleClick(Point),
    RightClick(Point),
}

impl PointerEvent {
    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down(p)
            | PointerEvent::Move(p)
            | PointerEvent::Up(p)
            | PointerEvent::DoubleClick(p)
            | PointerEvent::RightClick(p) => p,
        }
    }
}

/// Double-click detection constants.
const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(500);
const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// Turns raw button presses and releases into [`PointerEvent`]s.
///
/// A second left press close in time and space to the previous one becomes a
/// [`PointerEvent::DoubleClick`] instead of a [`PointerEvent::Down`].
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    /// Last left press time for double-click detection.
    last_click_time: Option<Instant>,
    /// Last left press position for double-click detection.
    last_click_position: Option<Point>,
    /// Whether the left button is held.
    left_down: bool,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a button press happening now.
    pub fn press(&mut self, position: Point, button: MouseButton) -> Option<PointerEvent> {
        self.press_at(position, button, Instant::now())
    }

    /// Translate a button press that happened at `now`.
    pub fn press_at(
        &mut self,
        position: Point,
        button: MouseButton,
        now: Instant,
    ) -> Option<PointerEvent> {
        match button {
            MouseButton::Right => Some(PointerEvent::RightClick(position)),
            MouseButton::Middle => None,
            MouseButton::Left => {
                self.left_down = true;
                if let (Some(last_time), Some(last_pos)) =
                    (self.last_click_time, self.last_click_position)
                {
                    let elapsed = now.saturating_duration_since(last_time);
                    if elapsed < DOUBLE_CLICK_TIME
                        && last_pos.distance(position) < DOUBLE_CLICK_DISTANCE
                    {
                        // Reset so a triple click is not another double click
                        self.last_click_time = None;
                        self.last_click_position = None;
                        return Some(PointerEvent::DoubleClick(position));
                    }
                }
                self.last_click_time = Some(now);
                self.last_click_position = Some(position);
                Some(PointerEvent::Down(position))
            }
        }
    }

    /// Translate a button release. Only the left button produces an event.
    pub fn release(&mut self, position: Point, button: MouseButton) -> Option<PointerEvent> {
        if button == MouseButton::Left && self.left_down {
            self.left_down = false;
            Some(PointerEvent::Up(position))
        } else {
            None
        }
    }

    /// Translate a pointer motion.
    pub fn motion(&mut self, position: Point) -> PointerEvent {
        PointerEvent::Move(position)
    }

    /// Whether the left button is currently held.
    pub fn is_dragging(&self) -> bool {
        self.left_down
    }
}
