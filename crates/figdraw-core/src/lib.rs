//! figdraw Core Library
//!
//! Figures, creation state machines and the drawing model for the figdraw
//! editor. Presentation-agnostic: a front end feeds pointer events and
//! style choices in and observes the drawing.

pub mod commands;
pub mod config;
pub mod creation;
pub mod drawing;
pub mod editor;
pub mod input;
pub mod palette;
pub mod shapes;
pub mod style;

pub use commands::{Command, CommandOutcome, Shortcut, ShortcutRegistry};
pub use config::{ConfigError, EditorConfig};
pub use creation::{BuilderProgress, CreationController};
pub use drawing::{ChangeKind, Drawing, DrawingEvent, RestyleTarget, StyleChange, SubscriptionId};
pub use editor::Editor;
pub use input::{ClickTracker, MouseButton, PointerEvent};
pub use palette::{ColorSelector, PaintTarget, PaletteEntry, PaletteError, SelectionOutcome};
pub use shapes::{Figure, FigureId, FigureKind, FigureStyle, LineType, Paint};
pub use style::{StyleSnapshot, StyleState};
