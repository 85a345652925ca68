//! Headless mentions-editor core.
//!
//! A rich-text input where `@name` substrings render as removable inline
//! chips bound to a candidate list. The browser-facing layer owns a DOM
//! subtree; everything that can be computed without a DOM lives here:
//!
//! - [`document`]: the chip-augmented document tree, rendered from a plain
//!   text value and a selected-protagonist set, plus HTML serialization
//! - [`selection`]: the tree ⇄ flat-character-offset mapping used to keep
//!   the caret stable across programmatic re-renders
//! - [`scan`]: mention-token extraction and selected-set computation
//! - [`editor`]: the state machine tying the above together (typing, chip
//!   clicks, backspace at a chip boundary)
//!
//! The rendered document is always a pure function of
//! `(value, selected protagonists)`; every mutation re-derives it and the
//! caller re-applies the saved selection. Offsets are character indices
//! into the flattened text, so the same math drives any UI toolkit.

pub mod document;
pub mod editor;
pub mod scan;
pub mod selection;

use serde::{Deserialize, Serialize};

/// An entry in the mention candidate list, owned by the caller.
///
/// Names are matched case-insensitively against `@name` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protagonist {
    pub id: String,
    pub name: String,
}

impl Protagonist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub use document::{Document, Node};
pub use editor::{EditorUpdate, MentionsEditor};
pub use selection::{FlatMap, NodePosition, SelectionOffsets};
