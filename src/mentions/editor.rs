//! The editor state machine.
//!
//! [`MentionsEditor`] is a controlled view: the caller owns the canonical
//! value and selected set, feeds user events in, and receives proposed
//! updates out. The editor never mutates anything upstream; it re-derives
//! its document on every change and keeps the selection stable across those
//! re-renders.
//!
//! Event handlers cannot fail: anything that does not line up (no
//! selection, caret not at a chip boundary, unknown chip name) degrades to
//! "no extra behavior for this event".

use super::Protagonist;
use super::document::Document;
use super::scan;
use super::selection::{FlatMap, NodePosition, SelectionOffsets};

/// A proposed upstream update. `None` fields mean "unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorUpdate {
    pub value: Option<String>,
    pub selected: Option<Vec<Protagonist>>,
}

impl EditorUpdate {
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.selected.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct MentionsEditor {
    candidates: Vec<Protagonist>,
    value: String,
    selected: Vec<Protagonist>,
    document: Document,
    selection: Option<SelectionOffsets>,
}

impl MentionsEditor {
    pub fn new(candidates: Vec<Protagonist>) -> Self {
        Self {
            candidates,
            value: String::new(),
            selected: Vec::new(),
            document: Document::default(),
            selection: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn selected(&self) -> &[Protagonist] {
        &self.selected
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Option<SelectionOffsets> {
        self.selection
    }

    /// The rendered markup for the current state.
    pub fn render_html(&self) -> String {
        self.document.render_html()
    }

    /// Where the saved selection lands in the current document, for the
    /// caller to re-apply after swapping in new markup. `None` when there
    /// is nothing to restore (restoration is silently skipped).
    pub fn selection_positions(&self) -> Option<(NodePosition, NodePosition)> {
        let selection = self.selection?;
        FlatMap::build(&self.document).resolve(selection)
    }

    /// External (controlled) value change: re-render, preserving the caret.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.rerender();
    }

    /// External (controlled) selected-set change: re-render, preserving the
    /// caret.
    pub fn set_selected(&mut self, selected: Vec<Protagonist>) {
        self.selected = selected;
        self.rerender();
    }

    /// The browser selection moved (user action, not ours to restore).
    pub fn set_selection(&mut self, selection: SelectionOffsets) {
        self.selection = Some(selection.clamp(self.document.char_len()));
    }

    /// User typed: the surface's new plain text becomes the value, and the
    /// mentioned-name scan proposes a new selected set — but only when its
    /// membership actually changed.
    pub fn handle_input(&mut self, plain_text: &str) -> EditorUpdate {
        self.value = plain_text.to_string();

        let proposed = scan::compute_selected(plain_text, &self.candidates);
        let changed = scan::selection_changed(&self.selected, &proposed);
        if changed {
            self.selected = proposed;
        }

        self.rerender();

        EditorUpdate {
            value: Some(self.value.clone()),
            selected: changed.then(|| self.selected.clone()),
        }
    }

    /// A chip was clicked: drop the protagonist and its `@name` tokens.
    /// Both the value and the selected set are reported together so the
    /// removal is atomic from the caller's point of view.
    pub fn remove_mention(&mut self, name: &str) -> EditorUpdate {
        let target = name.to_lowercase();

        self.value = scan::strip_mention_tokens(&self.value, name);
        self.selected.retain(|p| p.name.to_lowercase() != target);
        self.rerender();

        EditorUpdate {
            value: Some(self.value.clone()),
            selected: Some(self.selected.clone()),
        }
    }

    /// Backspace pressed. When the caret sits immediately after a chip,
    /// the chip's mention is deleted instead of a single character and
    /// `Some(update)` tells the caller to suppress the default deletion.
    /// `None` means the keystroke proceeds normally.
    pub fn handle_backspace(&mut self) -> Option<EditorUpdate> {
        let selection = self.selection?;
        if !selection.is_collapsed() {
            return None;
        }

        let name = self.document.chip_ending_at(selection.start)?.to_string();
        Some(self.remove_mention(&name))
    }

    /// Re-derive the document and carry the selection across: the saved
    /// offsets are clamped against the new content, so a caret before any
    /// changed region keeps its absolute position.
    fn rerender(&mut self) {
        self.document = Document::from_value(&self.value, &self.selected);
        if let Some(selection) = self.selection {
            self.selection = Some(selection.clamp(self.document.char_len()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> MentionsEditor {
        MentionsEditor::new(vec![
            Protagonist::new("1", "Ann"),
            Protagonist::new("2", "Bob"),
            Protagonist::new("3", "Carol"),
        ])
    }

    #[test]
    fn typing_a_mention_selects_the_candidate_once() {
        let mut ed = editor();

        let update = ed.handle_input("hello @Carol");
        let selected = update.selected.expect("selection should change");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Carol");

        // Same membership again: no redundant proposal.
        let update = ed.handle_input("hello @Carol!");
        assert!(update.selected.is_none());
        assert_eq!(update.value.as_deref(), Some("hello @Carol!"));
    }

    #[test]
    fn chip_click_removes_mention_and_selection_atomically() {
        let mut ed = editor();
        ed.handle_input("hi @Ann and @Bob and @Bob");

        let update = ed.remove_mention("Bob");

        assert_eq!(update.value.as_deref(), Some("hi @Ann and  and"));
        let selected = update.selected.expect("selected set always reported");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Ann");
    }

    #[test]
    fn backspace_after_chip_deletes_the_mention_not_a_character() {
        let mut ed = editor();
        ed.handle_input("hi @Ann x");
        // Chip "@Ann" flattens to chars 3..7; caret right after it.
        ed.set_selection(SelectionOffsets::caret(7));

        let update = ed.handle_backspace().expect("chip boundary handled");

        assert_eq!(update.value.as_deref(), Some("hi  x"));
        assert!(update.selected.unwrap().is_empty());
    }

    #[test]
    fn backspace_elsewhere_is_not_intercepted() {
        let mut ed = editor();
        ed.handle_input("hi @Ann x");

        ed.set_selection(SelectionOffsets::caret(5));
        assert!(ed.handle_backspace().is_none());

        // A range selection is never treated as a chip deletion.
        ed.set_selection(SelectionOffsets::new(3, 7));
        assert!(ed.handle_backspace().is_none());
    }

    #[test]
    fn caret_survives_a_rerender_that_keeps_the_prefix() {
        let mut ed = editor();
        ed.handle_input("hello @Ann and more");
        ed.set_selection(SelectionOffsets::caret(5));

        // A sibling mention becomes selected further right; the prefix up
        // to the caret is untouched.
        ed.set_selected(vec![
            Protagonist::new("1", "Ann"),
            Protagonist::new("2", "Bob"),
        ]);

        assert_eq!(ed.selection(), Some(SelectionOffsets::caret(5)));
        let (start, _) = ed.selection_positions().expect("restorable");
        assert_eq!(start.offset, 5);
    }

    #[test]
    fn caret_clamps_when_content_shrinks() {
        let mut ed = editor();
        ed.handle_input("hello @Ann");
        ed.set_selection(SelectionOffsets::caret(10));

        ed.remove_mention("Ann");

        assert_eq!(ed.value(), "hello");
        assert_eq!(ed.selection(), Some(SelectionOffsets::caret(5)));
    }

    #[test]
    fn external_value_change_rerenders_the_document() {
        let mut ed = editor();
        ed.set_selected(vec![Protagonist::new("1", "Ann")]);
        ed.set_value("call @Ann");

        assert!(ed.document().nodes().iter().any(|n| n.is_chip()));
        assert_eq!(ed.document().flatten_text(), "call @Ann");
    }
}
