//! Eligibility walker: finds the text nodes of a subtree that may be
//! rewritten and swaps each one for a marker element.

use super::emphasis::EmphasisMode;
use super::transform::{Fragment, transform_text};
use crate::dom::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// Class carried by every marker element the walker inserts.
pub const MARKER_CLASS: &str = "bionic-bold-applied";

/// Class carried by every emphasis element.
pub const EMPHASIS_CLASS: &str = "bionic-bold";

/// Tag used for marker elements.
pub const MARKER_TAG: &str = "span";

/// Tag used for emphasis elements.
pub const EMPHASIS_TAG: &str = "b";

/// Elements whose content is never rewritten (lower-case local names).
pub const SKIP_TAGS: &[&str] = &[
    "script", "style", "noscript", "textarea", "input", "select", "button", "code", "kbd", "samp",
    "var", "svg", "math", "head", "link", "meta", "title", "template",
];

/// Counters collected during one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Text nodes with at least one non-whitespace character.
    pub text_nodes_visited: usize,
    /// Text nodes replaced by a marker element.
    pub text_nodes_wrapped: usize,
    /// Emphasis elements created.
    pub words_emphasized: usize,
    /// Elements skipped without descending (denylisted, editable, or marked).
    pub skipped_elements: usize,
}

/// What the walker does with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Leave the node and its subtree alone.
    Skip,
    /// Rewrite this text node.
    Transform,
    /// Visit the node's children.
    Descend,
    /// Nothing to do (blank text, comments, doctypes).
    Ignore,
}

/// Whether an element is editable by the user (`contenteditable`).
fn is_editable(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.get_attr(id, "contenteditable").is_some_and(|value| {
        let value = value.trim();
        value.is_empty()
            || value.eq_ignore_ascii_case("true")
            || value.eq_ignore_ascii_case("plaintext-only")
    })
}

/// Decide how to treat one node.
pub fn classify(dom: &ArenaDom, id: ArenaNodeId) -> Visit {
    let Some(node) = dom.get(id) else {
        return Visit::Ignore;
    };

    match &node.data {
        ArenaNodeData::Element { name, .. } => {
            let tag = name.local.as_ref();
            let denied = SKIP_TAGS.iter().any(|skip| tag.eq_ignore_ascii_case(skip));
            if denied || is_editable(dom, id) || dom.has_class(id, MARKER_CLASS) {
                Visit::Skip
            } else {
                Visit::Descend
            }
        }
        ArenaNodeData::Document => Visit::Descend,
        ArenaNodeData::Text(text) => {
            if text.chars().all(super::transform::is_space) {
                Visit::Ignore
            } else {
                Visit::Transform
            }
        }
        ArenaNodeData::Comment(_) | ArenaNodeData::Doctype { .. } => Visit::Ignore,
    }
}

/// Build a detached marker element holding `fragments`.
///
/// Returns the marker and the number of emphasis elements inside it.
fn build_marker(dom: &mut ArenaDom, fragments: &[Fragment<'_>]) -> (ArenaNodeId, usize) {
    let marker = dom.create_element_with_class(MARKER_TAG, MARKER_CLASS);
    let mut emphasized = 0;

    for fragment in fragments {
        match *fragment {
            Fragment::Plain(text) => {
                let node = dom.create_text(text.to_string());
                dom.append(marker, node);
            }
            Fragment::Emphasis(text) => {
                let bold = dom.create_element_with_class(EMPHASIS_TAG, EMPHASIS_CLASS);
                let node = dom.create_text(text.to_string());
                dom.append(bold, node);
                dom.append(marker, bold);
                emphasized += 1;
            }
        }
    }

    (marker, emphasized)
}

/// Rewrite every eligible text node under `root`.
///
/// Traversal uses an explicit stack. Each element's children are
/// snapshotted onto the stack before any of them is rewritten, so
/// replacements never disturb the iteration.
pub fn walk(dom: &mut ArenaDom, root: ArenaNodeId, mode: EmphasisMode) -> WalkStats {
    let mut stats = WalkStats::default();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        match classify(dom, id) {
            Visit::Skip => stats.skipped_elements += 1,
            Visit::Ignore => {}
            Visit::Descend => {
                let children: Vec<_> = dom.children(id).collect();
                stack.extend(children.into_iter().rev());
            }
            Visit::Transform => {
                stats.text_nodes_visited += 1;

                let Some(text) = dom.text_content(id).map(str::to_owned) else {
                    continue;
                };
                let Some(fragments) = transform_text(&text, mode) else {
                    continue;
                };

                let (marker, emphasized) = build_marker(dom, &fragments);
                dom.replace(id, marker);
                dom.remove(id);
                stats.text_nodes_wrapped += 1;
                stats.words_emphasized += emphasized;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn body_of(html: &str) -> (ArenaDom, ArenaNodeId) {
        let dom = parse_html(html);
        let body = dom.body().unwrap();
        (dom, body)
    }

    fn markers(dom: &ArenaDom, root: ArenaNodeId) -> Vec<ArenaNodeId> {
        dom.descendants(root)
            .filter(|&id| dom.has_class(id, MARKER_CLASS))
            .collect()
    }

    #[test]
    fn test_wraps_plain_paragraph() {
        let (mut dom, body) = body_of("<p>Hello world</p>");

        let stats = walk(&mut dom, body, EmphasisMode::Auto);

        assert_eq!(stats.text_nodes_visited, 1);
        assert_eq!(stats.text_nodes_wrapped, 1);
        assert_eq!(stats.words_emphasized, 2);

        let p = dom.find_by_tag("p").unwrap();
        let marker = dom.children(p).next().unwrap();
        assert_eq!(dom.element_name(marker).unwrap().as_ref(), "span");
        assert!(dom.has_class(marker, MARKER_CLASS));
        assert_eq!(dom.flatten(marker), "Hello world");

        let bolds: Vec<_> = dom
            .descendants(marker)
            .filter(|&id| dom.has_class(id, EMPHASIS_CLASS))
            .map(|id| dom.flatten(id))
            .collect();
        assert_eq!(bolds, ["He", "wo"]);
    }

    #[test]
    fn test_skip_tags_untouched() {
        let (mut dom, body) = body_of(
            "<p>Visible words</p>\
             <script>var hidden = 'script text';</script>\
             <code>let code = here;</code>\
             <textarea>typed words</textarea>\
             <button>Press here</button>\
             <svg><text>vector words</text></svg>",
        );

        walk(&mut dom, body, EmphasisMode::Auto);

        assert_eq!(markers(&dom, body).len(), 1);
        for tag in ["script", "code", "textarea", "button", "svg"] {
            let el = dom.find_by_tag(tag).unwrap();
            assert!(markers(&dom, el).is_empty(), "{tag} was rewritten");
        }
    }

    #[test]
    fn test_template_content_is_inert() {
        let (mut dom, body) =
            body_of("<template><p>inert template words</p></template><p>live words</p>");

        let stats = walk(&mut dom, body, EmphasisMode::Auto);

        assert_eq!(stats.text_nodes_wrapped, 1);
        let template = dom.find_by_tag("template").unwrap();
        assert!(markers(&dom, template).is_empty());
        assert_eq!(dom.flatten(template), "inert template words");
    }

    #[test]
    fn test_editable_regions_untouched() {
        let (mut dom, body) = body_of(
            "<div contenteditable>editable words</div>\
             <div contenteditable=\"TRUE\">more editable</div>\
             <div contenteditable=\"false\">static words</div>",
        );

        let stats = walk(&mut dom, body, EmphasisMode::Auto);

        assert_eq!(stats.text_nodes_wrapped, 1);
        let marked = markers(&dom, body);
        assert_eq!(dom.flatten(marked[0]), "static words");
    }

    #[test]
    fn test_existing_marker_is_not_rewrapped() {
        let (mut dom, body) = body_of("<p>first pass</p>");
        walk(&mut dom, body, EmphasisMode::Auto);
        let before = dom.len();

        let stats = walk(&mut dom, body, EmphasisMode::Auto);

        assert_eq!(stats.text_nodes_wrapped, 0);
        assert_eq!(stats.skipped_elements, 1);
        assert_eq!(dom.len(), before);
        assert_eq!(markers(&dom, body).len(), 1);
    }

    #[test]
    fn test_nested_inline_elements() {
        let (mut dom, body) = body_of("<p>Some <em>nested <a href=\"#\">link text</a></em> here.</p>");

        let stats = walk(&mut dom, body, EmphasisMode::Auto);

        // "Some ", "nested ", "link text", " here."
        assert_eq!(stats.text_nodes_wrapped, 4);
        assert_eq!(dom.flatten(body), "Some nested link text here.");
    }

    #[test]
    fn test_symbol_only_text_stays_plain() {
        let (mut dom, body) = body_of("<p>— a I !</p>");

        let stats = walk(&mut dom, body, EmphasisMode::Auto);

        assert_eq!(stats.text_nodes_visited, 1);
        assert_eq!(stats.text_nodes_wrapped, 0);
        let p = dom.find_by_tag("p").unwrap();
        assert!(dom.is_text(dom.children(p).next().unwrap()));
    }

    #[test]
    fn test_blank_text_ignored() {
        let (mut dom, body) = body_of("<div>\n   <p>words here</p>\n</div>");

        let stats = walk(&mut dom, body, EmphasisMode::Auto);

        assert_eq!(stats.text_nodes_visited, 1);
        assert_eq!(stats.text_nodes_wrapped, 1);
    }

    #[test]
    fn test_classify() {
        let dom = parse_html("<p class=\"bionic-bold-applied\">x</p><style>p{}</style><!-- c -->");
        let p = dom.find_by_tag("p").unwrap();
        let style = dom.find_by_tag("style").unwrap();

        assert_eq!(classify(&dom, p), Visit::Skip);
        assert_eq!(classify(&dom, style), Visit::Skip);
        assert_eq!(classify(&dom, dom.body().unwrap()), Visit::Descend);
        assert_eq!(classify(&dom, dom.document()), Visit::Descend);
        assert_eq!(classify(&dom, dom.children(p).next().unwrap()), Visit::Transform);
        assert_eq!(classify(&dom, ArenaNodeId::NONE), Visit::Ignore);
    }
}
