//! Interactive controls attached to messages.
//!
//! A control is a clickable element the host renders inside a message:
//! one per board cell, plus the standalone "Leave game" control. Controls
//! are addressed by an opaque string identity; the cell controls encode
//! their grid position in that identity (`row * size + column`), which the
//! session decodes when an activation event comes back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PlayerIcon;

/// The identity of the leave control. A single constant value, since the
/// leave control carries no session-specific data.
pub const LEAVE_CONTROL_ID: &str = "leave";

/// Prefix for cell control identities.
const CELL_PREFIX: &str = "cell-";

// ---------------------------------------------------------------------------
// ControlId
// ---------------------------------------------------------------------------

/// The opaque string identity of a control within a message.
///
/// Cell controls encode their flattened grid index (`"cell-4"`); the leave
/// control is the fixed identity `"leave"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(pub String);

impl ControlId {
    /// Identity for the cell at the given flattened index.
    pub fn cell(index: usize) -> Self {
        Self(format!("{CELL_PREFIX}{index}"))
    }

    /// The leave control identity.
    pub fn leave() -> Self {
        Self(LEAVE_CONTROL_ID.to_string())
    }

    /// Decodes a cell index from this identity.
    ///
    /// Returns `None` for anything that isn't a well-formed cell identity
    /// (including the leave control). Bounds checking against the board is
    /// the caller's business; this only parses.
    pub fn as_cell(&self) -> Option<usize> {
        self.0.strip_prefix(CELL_PREFIX)?.parse().ok()
    }

    /// Whether this is the leave control.
    pub fn is_leave(&self) -> bool {
        self.0 == LEAVE_CONTROL_ID
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ControlStyle
// ---------------------------------------------------------------------------

/// Abstract styling intent for a control.
///
/// The host maps these to whatever its platform offers (button colors,
/// emphasis). Duelgrid only states the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlStyle {
    /// Default look. Empty cells and placed marks.
    Neutral,
    /// Affirmative highlight. The three cells of a winning line.
    Affirmative,
    /// Destructive action. The leave control.
    Danger,
}

// ---------------------------------------------------------------------------
// Control
// ---------------------------------------------------------------------------

/// A single interactive control inside a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Identity used to address this control in edits and activation events.
    pub id: ControlId,
    /// Visible label.
    pub label: String,
    /// Styling intent.
    pub style: ControlStyle,
    /// Whether the control still accepts activation.
    pub disabled: bool,
}

impl Control {
    /// An enabled, unmarked cell control.
    pub fn empty_cell(index: usize) -> Self {
        Self {
            id: ControlId::cell(index),
            label: " ".to_string(),
            style: ControlStyle::Neutral,
            disabled: false,
        }
    }

    /// A disabled cell control showing a placed mark.
    pub fn marked_cell(index: usize, icon: PlayerIcon) -> Self {
        Self {
            id: ControlId::cell(index),
            label: icon.glyph().to_string(),
            style: ControlStyle::Neutral,
            disabled: true,
        }
    }

    /// A disabled cell control on the winning line, visually distinguished.
    pub fn winning_cell(index: usize, icon: PlayerIcon) -> Self {
        Self {
            id: ControlId::cell(index),
            label: icon.glyph().to_string(),
            style: ControlStyle::Affirmative,
            disabled: true,
        }
    }

    /// The standalone "Leave game" control.
    pub fn leave() -> Self {
        Self {
            id: ControlId::leave(),
            label: "Leave game".to_string(),
            style: ControlStyle::Danger,
            disabled: false,
        }
    }
}

/// The full empty-board control grid for a `size × size` board, in cell
/// index order.
pub fn board_controls(size: usize) -> Vec<Control> {
    (0..size * size).map(Control::empty_cell).collect()
}
