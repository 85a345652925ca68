//! The chip-augmented document: what the editable surface displays.
//!
//! A [`Document`] is derived from `(value, selected protagonists)` and from
//! nothing else. Chips keep the matched slice as their visible text, so
//! flattening a document always reproduces the plain-text value exactly.

use super::Protagonist;
use super::scan::mention_regex;

/// A node of the editable surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A plain text run.
    Text(String),
    /// A non-editable inline chip. `name` is the canonical protagonist name
    /// carried as `data-name` for click/backspace identification; `text` is
    /// the slice of the value the chip wraps (including the `@`).
    Chip { name: String, text: String },
}

impl Node {
    /// The node's contribution to the flattened text.
    pub fn text(&self) -> &str {
        match self {
            Node::Text(text) => text,
            Node::Chip { text, .. } => text,
        }
    }

    pub fn is_chip(&self) -> bool {
        matches!(self, Node::Chip { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Build the document for a value: tokenize once, then wrap each
    /// mention token whose name matches a selected protagonist
    /// (case-insensitively) as a chip. Token-based matching means a name
    /// that is a prefix of another (`Ann` / `Anna`) can never produce
    /// nested or partial chips.
    pub fn from_value(value: &str, selected: &[Protagonist]) -> Self {
        let mut nodes = Vec::new();
        let mut pending = String::new();
        let mut last = 0;

        for m in mention_regex().find_iter(value) {
            let token_name = &m.as_str()[1..];
            let canonical = selected
                .iter()
                .find(|p| p.name.to_lowercase() == token_name.to_lowercase());

            match canonical {
                Some(protagonist) => {
                    pending.push_str(&value[last..m.start()]);
                    if !pending.is_empty() {
                        nodes.push(Node::Text(std::mem::take(&mut pending)));
                    }
                    nodes.push(Node::Chip {
                        name: protagonist.name.clone(),
                        text: m.as_str().to_string(),
                    });
                }
                None => {
                    pending.push_str(&value[last..m.end()]);
                }
            }
            last = m.end();
        }

        pending.push_str(&value[last..]);
        if !pending.is_empty() {
            nodes.push(Node::Text(pending));
        }

        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The plain-text content of the surface. Lossless: equals the value
    /// the document was built from.
    pub fn flatten_text(&self) -> String {
        self.nodes.iter().map(Node::text).collect()
    }

    /// Length of the flattened text in characters.
    pub fn char_len(&self) -> usize {
        self.nodes.iter().map(|n| n.text().chars().count()).sum()
    }

    /// The chip whose flattened text ends exactly at `offset`, if any.
    ///
    /// This is the "caret immediately after a chip" test: whether the DOM
    /// caret sits at the start of the following text node or at an element
    /// child index right past the chip, both positions flatten to the
    /// chip's end offset.
    pub fn chip_ending_at(&self, offset: usize) -> Option<&str> {
        let mut end = 0;
        for node in &self.nodes {
            end += node.text().chars().count();
            if let Node::Chip { name, .. } = node {
                if end == offset {
                    return Some(name);
                }
            }
        }
        None
    }

    /// Serialize to the markup the editable surface displays. Text nodes
    /// are escaped; chips are non-editable inline elements carrying the
    /// protagonist name as data.
    pub fn render_html(&self) -> String {
        let mut html = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => html.push_str(&escape_html(text)),
                Node::Chip { name, text } => {
                    html.push_str("<span class=\"mention-chip\" contenteditable=\"false\" data-name=\"");
                    html.push_str(&escape_html(name));
                    html.push_str("\">");
                    html.push_str(&escape_html(text));
                    html.push_str("</span>");
                }
            }
        }
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann_and_bob() -> Vec<Protagonist> {
        vec![Protagonist::new("1", "Ann"), Protagonist::new("2", "Bob")]
    }

    #[test]
    fn render_is_lossless_for_plain_text() {
        let value = "hello @Ann and @Bob";
        let doc = Document::from_value(value, &ann_and_bob());

        assert_eq!(doc.flatten_text(), value);
    }

    #[test]
    fn chips_wrap_matched_slices() {
        let doc = Document::from_value("hi @ann!", &ann_and_bob());

        assert_eq!(
            doc.nodes(),
            &[
                Node::Text("hi ".to_string()),
                Node::Chip {
                    name: "Ann".to_string(),
                    text: "@ann".to_string()
                },
                Node::Text("!".to_string()),
            ]
        );
        // Case of the typed text is preserved in the flattened value.
        assert_eq!(doc.flatten_text(), "hi @ann!");
    }

    #[test]
    fn prefix_names_never_nest() {
        let cast = vec![Protagonist::new("1", "Ann"), Protagonist::new("2", "Anna")];
        let doc = Document::from_value("@Ann met @Anna", &cast);

        let chips: Vec<_> = doc
            .nodes()
            .iter()
            .filter_map(|n| match n {
                Node::Chip { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(chips, vec!["Ann", "Anna"]);
    }

    #[test]
    fn unselected_mentions_stay_plain() {
        let doc = Document::from_value("hi @Zoe", &ann_and_bob());

        assert_eq!(doc.nodes(), &[Node::Text("hi @Zoe".to_string())]);
    }

    #[test]
    fn chip_ending_at_finds_the_boundary() {
        // "hi @Ann x" — chip text "@Ann" spans chars 3..7
        let doc = Document::from_value("hi @Ann x", &ann_and_bob());

        assert_eq!(doc.chip_ending_at(7), Some("Ann"));
        assert_eq!(doc.chip_ending_at(6), None);
        assert_eq!(doc.chip_ending_at(9), None);
    }

    #[test]
    fn html_escapes_text_and_marks_chips_non_editable() {
        let doc = Document::from_value("a < b & @Ann", &ann_and_bob());
        let html = doc.render_html();

        assert!(html.contains("a &lt; b &amp; "));
        assert!(html.contains("contenteditable=\"false\""));
        assert!(html.contains("data-name=\"Ann\""));
        assert!(html.contains(">@Ann</span>"));
    }

    #[test]
    fn empty_value_renders_empty_document() {
        let doc = Document::from_value("", &ann_and_bob());

        assert!(doc.nodes().is_empty());
        assert_eq!(doc.char_len(), 0);
        assert_eq!(doc.render_html(), "");
    }
}
