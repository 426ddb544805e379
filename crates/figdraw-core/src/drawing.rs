//! Drawing model: the ordered scene of committed figures.

use crate::shapes::{Figure, FigureId, FigureStyle, LineType, Paint};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle returned by [`Drawing::subscribe`].
pub type SubscriptionId = u64;

/// Callback invoked after every drawing mutation.
type Observer = Box<dyn FnMut(&DrawingEvent)>;

/// What a restyle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestyleTarget {
    /// Only the defaults used for the next figures.
    Defaults,
    /// Every figure currently in the drawing.
    Existing,
}

/// A single style attribute change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StyleChange {
    EdgePaint(Option<Paint>),
    FillPaint(Option<Paint>),
    StrokeWidth(f64),
    LineType(LineType),
}

impl StyleChange {
    /// Overwrite the matching field of `style`. Negative widths become 0.
    pub fn apply(&self, style: &mut FigureStyle) {
        match *self {
            StyleChange::EdgePaint(paint) => style.edge = paint,
            StyleChange::FillPaint(paint) => style.fill = paint,
            StyleChange::StrokeWidth(width) => style.stroke_width = width.max(0.0),
            StyleChange::LineType(line_type) => style.line_type = line_type,
        }
    }
}

/// Nature of a drawing change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Add,
    Remove,
    Clear,
    Restyle,
}

/// Notification sent to observers once a mutation has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingEvent {
    Added { id: FigureId, index: usize },
    Removed { id: FigureId, index: usize },
    Cleared { removed: usize },
    Restyled {
        target: RestyleTarget,
        change: StyleChange,
        /// Number of figures rewritten (0 for defaults).
        count: usize,
    },
}

impl DrawingEvent {
    pub fn kind(&self) -> ChangeKind {
        match self {
            DrawingEvent::Added { .. } => ChangeKind::Add,
            DrawingEvent::Removed { .. } => ChangeKind::Remove,
            DrawingEvent::Cleared { .. } => ChangeKind::Clear,
            DrawingEvent::Restyled { .. } => ChangeKind::Restyle,
        }
    }
}

/// The committed figures, back to front, plus the creation defaults.
///
/// Figures are only reachable through shared references, so their geometry
/// cannot change once added. Styles change through [`Drawing::restyle`].
pub struct Drawing {
    /// Figures in z-order (back to front), which is also the undo order.
    figures: Vec<Figure>,
    /// Style given to the next figures.
    defaults: FigureStyle,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawing")
            .field("figures", &self.figures)
            .field("defaults", &self.defaults)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Drawing {
    /// Create an empty drawing with default styling.
    pub fn new() -> Self {
        Self::with_defaults(FigureStyle::default())
    }

    /// Create an empty drawing with the given creation defaults.
    pub fn with_defaults(defaults: FigureStyle) -> Self {
        Self {
            figures: Vec::new(),
            defaults,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Append a committed figure on top of the others. The figure is
    /// finalized first, so polygons are always stored closed.
    pub fn add(&mut self, mut figure: Figure) {
        figure.finalize();
        if self.get(figure.id()).is_some() {
            log::warn!("Figure {} already in drawing, assigning a new id", figure.id());
            figure.regenerate_id();
        }
        let id = figure.id();
        let index = self.figures.len();
        log::info!("Added {} {} at z-index {}", figure.kind(), id, index);
        self.figures.push(figure);
        self.notify(DrawingEvent::Added { id, index });
    }

    /// Remove and return the most recent figure.
    /// On an empty drawing nothing happens and observers are not called.
    pub fn undo_last(&mut self) -> Option<Figure> {
        let Some(figure) = self.figures.pop() else {
            log::debug!("Nothing to undo");
            return None;
        };
        let index = self.figures.len();
        log::info!("Undid {} {}", figure.kind(), figure.id());
        self.notify(DrawingEvent::Removed {
            id: figure.id(),
            index,
        });
        Some(figure)
    }

    /// Remove every figure. Observers are notified even if it was empty.
    pub fn clear(&mut self) -> usize {
        let removed = self.figures.len();
        self.figures.clear();
        log::info!("Cleared {} figures", removed);
        self.notify(DrawingEvent::Cleared { removed });
        removed
    }

    /// Apply a style change to the defaults or to every existing figure.
    /// Geometry is never touched. Returns the number of figures rewritten.
    pub fn restyle(&mut self, target: RestyleTarget, change: StyleChange) -> usize {
        let count = match target {
            RestyleTarget::Defaults => {
                change.apply(&mut self.defaults);
                0
            }
            RestyleTarget::Existing => {
                for figure in &mut self.figures {
                    change.apply(figure.style_mut());
                }
                self.figures.len()
            }
        };
        log::debug!("Restyled {:?} with {:?} ({} figures)", target, change, count);
        self.notify(DrawingEvent::Restyled {
            target,
            change,
            count,
        });
        count
    }

    /// Style given to the next figures.
    pub fn defaults(&self) -> &FigureStyle {
        &self.defaults
    }

    /// Figures in z-order (back to front).
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Iterate figures in z-order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Figure> {
        self.figures.iter()
    }

    /// Get a figure by ID.
    pub fn get(&self, id: FigureId) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id() == id)
    }

    /// Topmost figure.
    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Get the bounding box of all figures.
    pub fn bounds(&self) -> Option<Rect> {
        self.figures
            .iter()
            .map(Figure::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// Register an observer. Observers run in registration order, after the
    /// mutation is applied.
    pub fn subscribe(&mut self, observer: impl FnMut(&DrawingEvent) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: DrawingEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a Figure;
    type IntoIter = std::slice::Iter<'a, Figure>;

    fn into_iter(self) -> Self::IntoIter {
        self.figures.iter()
    }
}
