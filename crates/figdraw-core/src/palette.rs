//! Fill and edge palettes and the color selection they drive.

use crate::shapes::Paint;
use thiserror::Error;

/// One row of a palette menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEntry {
    /// A named color applied as is.
    Named(&'static str, Paint),
    /// Ask a color picker for an arbitrary color.
    Custom,
    /// No paint at all.
    NoPaint,
}

impl PaletteEntry {
    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            PaletteEntry::Named(name, _) => name,
            PaletteEntry::Custom => "Others",
            PaletteEntry::NoPaint => "None",
        }
    }
}

/// Entries offered for figure interiors.
pub const FILL_PALETTE: [PaletteEntry; 10] = [
    PaletteEntry::Named("Black", Paint::BLACK),
    PaletteEntry::Named("Red", Paint::RED),
    PaletteEntry::Named("Orange", Paint::ORANGE),
    PaletteEntry::Named("Yellow", Paint::YELLOW),
    PaletteEntry::Named("Green", Paint::GREEN),
    PaletteEntry::Named("Cyan", Paint::CYAN),
    PaletteEntry::Named("Blue", Paint::BLUE),
    PaletteEntry::Named("Magenta", Paint::MAGENTA),
    PaletteEntry::Custom,
    PaletteEntry::NoPaint,
];

/// Entries offered for figure outlines.
pub const EDGE_PALETTE: [PaletteEntry; 9] = [
    PaletteEntry::Named("Magenta", Paint::MAGENTA),
    PaletteEntry::Named("Red", Paint::RED),
    PaletteEntry::Named("Orange", Paint::ORANGE),
    PaletteEntry::Named("Yellow", Paint::YELLOW),
    PaletteEntry::Named("Green", Paint::GREEN),
    PaletteEntry::Named("Cyan", Paint::CYAN),
    PaletteEntry::Named("Blue", Paint::BLUE),
    PaletteEntry::Named("Black", Paint::BLACK),
    PaletteEntry::Custom,
];

/// Which style attribute a palette paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintTarget {
    Fill,
    Edge,
}

impl PaintTarget {
    pub fn palette(self) -> &'static [PaletteEntry] {
        match self {
            PaintTarget::Fill => &FILL_PALETTE,
            PaintTarget::Edge => &EDGE_PALETTE,
        }
    }

    /// Index selected when nothing has been chosen yet.
    pub fn default_index(self) -> usize {
        match self {
            PaintTarget::Fill => 0,
            PaintTarget::Edge => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Palette index {index} out of range (palette has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result of a palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The paint to apply; `None` means no paint.
    Applied(Option<Paint>),
    /// The picker was cancelled; selection and styles stay as they were.
    Unchanged,
}

/// Selected palette entry for one [`PaintTarget`].
#[derive(Debug, Clone)]
pub struct ColorSelector {
    target: PaintTarget,
    selected: usize,
    /// Last concrete color, used to seed the picker.
    last_color: Paint,
}

impl ColorSelector {
    /// Selector on the target's default entry.
    pub fn new(target: PaintTarget) -> Self {
        Self {
            target,
            selected: target.default_index(),
            last_color: initial_color(target.palette(), target.default_index()),
        }
    }

    /// Selector starting on `index`. Custom entries start from black.
    pub fn with_index(target: PaintTarget, index: usize) -> Result<Self, PaletteError> {
        let palette = target.palette();
        check_index(palette, index)?;
        Ok(Self {
            target,
            selected: index,
            last_color: initial_color(palette, index),
        })
    }

    pub fn target(&self) -> PaintTarget {
        self.target
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn entries(&self) -> &'static [PaletteEntry] {
        self.target.palette()
    }

    pub fn last_color(&self) -> Paint {
        self.last_color
    }

    /// Paint designated by the current selection.
    pub fn current_paint(&self) -> Option<Paint> {
        match self.entries()[self.selected] {
            PaletteEntry::Named(_, paint) => Some(paint),
            PaletteEntry::Custom => Some(self.last_color),
            PaletteEntry::NoPaint => None,
        }
    }

    /// Select a palette entry. The custom entry calls `picker` with the last
    /// color; a picker returning `None` leaves the selection untouched.
    pub fn select(
        &mut self,
        index: usize,
        picker: impl FnOnce(Paint) -> Option<Paint>,
    ) -> Result<SelectionOutcome, PaletteError> {
        let palette = self.entries();
        check_index(palette, index)?;

        let paint = match palette[index] {
            PaletteEntry::Named(_, paint) => Some(paint),
            PaletteEntry::NoPaint => None,
            PaletteEntry::Custom => match picker(self.last_color) {
                Some(paint) => Some(paint),
                None => {
                    log::debug!(
                        "{:?} color picker cancelled, keeping entry {}",
                        self.target,
                        self.selected
                    );
                    return Ok(SelectionOutcome::Unchanged);
                }
            },
        };

        self.selected = index;
        if let Some(paint) = paint {
            self.last_color = paint;
        }
        Ok(SelectionOutcome::Applied(paint))
    }
}

fn check_index(palette: &[PaletteEntry], index: usize) -> Result<(), PaletteError> {
    if index < palette.len() {
        Ok(())
    } else {
        Err(PaletteError::IndexOutOfRange {
            index,
            len: palette.len(),
        })
    }
}

fn initial_color(palette: &[PaletteEntry], index: usize) -> Paint {
    match palette.get(index) {
        Some(PaletteEntry::Named(_, paint)) => *paint,
        _ => Paint::BLACK,
    }
}
