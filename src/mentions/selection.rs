//! Caret/selection bookkeeping across re-renders.
//!
//! The editable surface is re-rendered from scratch whenever the value or
//! the selected set changes, which would discard the browser's selection.
//! The remedy is a flat-offset representation: before a re-render the
//! selection is captured as character offsets into the flattened text, and
//! afterwards those offsets are resolved back to (node, in-node offset)
//! positions against the new tree. [`FlatMap`] records each node's
//! boundaries in a depth-first flattening so both directions are pure
//! lookups.

use super::document::Document;

/// Character-offset representation of a caret or selection range within the
/// flattened text of the editable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOffsets {
    pub start: usize,
    pub end: usize,
}

impl SelectionOffsets {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection (a caret).
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Best-effort adjustment after the content shrank: offsets past the
    /// end clamp to the end rather than failing.
    pub fn clamp(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

/// A position inside the document tree: a node index plus a character
/// offset within that node's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePosition {
    pub node_index: usize,
    pub offset: usize,
}

/// One node's span within the flattened text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun {
    pub node_index: usize,
    pub start: usize,
    pub end: usize,
}

/// The flattened text content with node boundaries recorded.
#[derive(Debug, Clone, Default)]
pub struct FlatMap {
    runs: Vec<TextRun>,
    len: usize,
}

impl FlatMap {
    /// Record each node's span in a depth-first walk of the document.
    pub fn build(document: &Document) -> Self {
        let mut runs = Vec::with_capacity(document.nodes().len());
        let mut cursor = 0;

        for (node_index, node) in document.nodes().iter().enumerate() {
            let chars = node.text().chars().count();
            runs.push(TextRun {
                node_index,
                start: cursor,
                end: cursor + chars,
            });
            cursor += chars;
        }

        Self { runs, len: cursor }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Map a tree position to its flat offset. Offsets beyond a node's own
    /// text clamp to that node's end. `None` for an unknown node index.
    pub fn flat_offset(&self, position: NodePosition) -> Option<usize> {
        let run = self
            .runs
            .iter()
            .find(|run| run.node_index == position.node_index)?;
        let span = run.end - run.start;
        Some(run.start + position.offset.min(span))
    }

    /// Capture a selection: two tree positions become flat offsets,
    /// normalized so `start <= end`.
    pub fn capture(&self, anchor: NodePosition, focus: NodePosition) -> Option<SelectionOffsets> {
        let a = self.flat_offset(anchor)?;
        let b = self.flat_offset(focus)?;
        Some(SelectionOffsets::new(a.min(b), a.max(b)))
    }

    /// Resolve flat offsets back to tree positions against this (possibly
    /// new) document. Best-effort: offsets are clamped to the current
    /// length, and an empty document yields `None` — the caller simply
    /// skips restoration, matching "selection not restored" degradation.
    pub fn resolve(&self, offsets: SelectionOffsets) -> Option<(NodePosition, NodePosition)> {
        let clamped = offsets.clamp(self.len);
        let start = self.position_at(clamped.start)?;
        let end = self.position_at(clamped.end)?;
        Some((start, end))
    }

    /// The first run whose span contains `offset` (boundaries inclusive,
    /// mirroring a DFS walk that stops at the first candidate text node).
    fn position_at(&self, offset: usize) -> Option<NodePosition> {
        self.runs
            .iter()
            .find(|run| offset >= run.start && offset <= run.end)
            .map(|run| NodePosition {
                node_index: run.node_index,
                offset: offset - run.start,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mentions::Protagonist;

    fn doc(value: &str) -> Document {
        Document::from_value(value, &[Protagonist::new("1", "Ann")])
    }

    #[test]
    fn runs_record_node_boundaries() {
        // nodes: Text("hi ") Chip("@Ann") Text(" x")
        let map = FlatMap::build(&doc("hi @Ann x"));

        assert_eq!(map.len(), 9);
        assert_eq!(map.runs().len(), 3);
        assert_eq!(map.runs()[1].start, 3);
        assert_eq!(map.runs()[1].end, 7);
    }

    #[test]
    fn capture_and_resolve_round_trip() {
        let document = doc("hi @Ann x");
        let map = FlatMap::build(&document);

        let offsets = map
            .capture(
                NodePosition { node_index: 0, offset: 1 },
                NodePosition { node_index: 2, offset: 1 },
            )
            .unwrap();
        assert_eq!(offsets, SelectionOffsets::new(1, 8));

        let (start, end) = map.resolve(offsets).unwrap();
        assert_eq!(map.flat_offset(start), Some(1));
        assert_eq!(map.flat_offset(end), Some(8));
    }

    #[test]
    fn capture_normalizes_backwards_selections() {
        let map = FlatMap::build(&doc("hi @Ann x"));

        let offsets = map
            .capture(
                NodePosition { node_index: 2, offset: 2 },
                NodePosition { node_index: 0, offset: 0 },
            )
            .unwrap();
        assert_eq!(offsets, SelectionOffsets::new(0, 9));
    }

    #[test]
    fn resolve_clamps_when_content_shrank() {
        let map = FlatMap::build(&doc("hi"));

        let (start, end) = map.resolve(SelectionOffsets::new(40, 50)).unwrap();
        assert_eq!(start, NodePosition { node_index: 0, offset: 2 });
        assert_eq!(end, start);
    }

    #[test]
    fn resolve_on_empty_document_degrades_to_none() {
        let map = FlatMap::build(&doc(""));

        assert!(map.resolve(SelectionOffsets::caret(3)).is_none());
    }

    #[test]
    fn position_prefers_first_node_at_shared_boundary() {
        // Offset 3 is both the end of node 0 and the start of node 1; the
        // DFS walk settles on the first.
        let map = FlatMap::build(&doc("hi @Ann"));

        let (start, _) = map.resolve(SelectionOffsets::caret(3)).unwrap();
        assert_eq!(start, NodePosition { node_index: 0, offset: 3 });
    }

    #[test]
    fn multibyte_text_counts_characters_not_bytes() {
        let map = FlatMap::build(&doc("\u{f1}and\u{fa} @Ann"));

        // "ñandú " is six characters.
        assert_eq!(map.runs()[0].end, 6);
    }
}
