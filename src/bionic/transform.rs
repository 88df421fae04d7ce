//! Word transformer: splits one text node's contents into plain and
//! emphasized fragments.

use super::emphasis::{EmphasisMode, emphasis_length};

/// One piece of a rewritten text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Text emitted verbatim.
    Plain(&'a str),
    /// Leading slice of a word core, rendered emphasized.
    Emphasis(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Fragment::Plain(s) | Fragment::Emphasis(s) => s,
        }
    }
}

/// Concatenate fragments back into the text they were cut from.
pub fn flatten_fragments(fragments: &[Fragment<'_>]) -> String {
    fragments.iter().map(Fragment::text).collect()
}

/// Whitespace as the page's text splitter sees it: Unicode white space
/// plus BOM/ZWNBSP, but not NEL (U+0085).
pub(crate) fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Split `text` into alternating whitespace and non-whitespace runs.
///
/// Every byte belongs to exactly one segment, so the segments concatenate
/// back to `text`.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

/// Iterator returned by [`segments`]. Yields `(is_whitespace, run)`.
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (bool, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let space = is_space(first);
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| is_space(c) != space)
            .map_or(self.rest.len(), |(i, _)| i);
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some((space, run))
    }
}

/// Emit the fragments for a single non-whitespace token.
///
/// Returns `true` if the token produced an emphasis fragment.
fn transform_token<'a>(token: &'a str, mode: EmphasisMode, out: &mut Vec<Fragment<'a>>) -> bool {
    // Leading punctuation runs up to the first ASCII letter or digit.
    let Some(start) = token.bytes().position(|b| b.is_ascii_alphanumeric()) else {
        out.push(Fragment::Plain(token));
        return false;
    };
    let (lead, word) = token.split_at(start);

    let core_len = word
        .bytes()
        .take_while(u8::is_ascii_alphanumeric)
        .count();
    if core_len < 2 {
        out.push(Fragment::Plain(token));
        return false;
    }

    // The core is ASCII, so `len` is a char boundary.
    let len = emphasis_length(core_len, mode);
    let (head, tail) = word.split_at(len);

    if !lead.is_empty() {
        out.push(Fragment::Plain(lead));
    }
    out.push(Fragment::Emphasis(head));
    if !tail.is_empty() {
        out.push(Fragment::Plain(tail));
    }
    true
}

/// Rewrite one text node's contents into fragments.
///
/// Returns `None` when nothing in `text` qualifies for emphasis: pure
/// whitespace, symbols only, or words with a one-character core. Callers
/// leave such text nodes untouched.
pub fn transform_text(text: &str, mode: EmphasisMode) -> Option<Vec<Fragment<'_>>> {
    if text.chars().all(is_space) {
        return None;
    }

    let mut fragments = Vec::new();
    let mut changed = false;

    for (space, run) in segments(text) {
        if space {
            fragments.push(Fragment::Plain(run));
        } else {
            changed |= transform_token(run, mode, &mut fragments);
        }
    }

    changed.then_some(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use Fragment::{Emphasis, Plain};

    fn auto(text: &str) -> Option<Vec<Fragment<'_>>> {
        transform_text(text, EmphasisMode::Auto)
    }

    #[test]
    fn test_segments_keep_every_run() {
        let runs: Vec<_> = segments("  hello   world  ").collect();
        assert_eq!(
            runs,
            vec![
                (true, "  "),
                (false, "hello"),
                (true, "   "),
                (false, "world"),
                (true, "  "),
            ]
        );
    }

    #[test]
    fn test_short_word_left_alone() {
        let fragments = auto("a cat").unwrap();
        assert_eq!(
            fragments,
            vec![Plain("a"), Plain(" "), Emphasis("c"), Plain("at")]
        );
    }

    #[test]
    fn test_whitespace_preserved_exactly() {
        let input = "  hello   world  ";
        let fragments = auto(input).unwrap();
        assert_eq!(flatten_fragments(&fragments), input);
        assert_eq!(fragments.first(), Some(&Plain("  ")));
        assert_eq!(fragments.last(), Some(&Plain("  ")));
    }

    #[test]
    fn test_surrounding_punctuation() {
        let fragments = auto("(hello)").unwrap();
        assert_eq!(fragments, vec![Plain("("), Emphasis("he"), Plain("llo)")]);
        assert_eq!(flatten_fragments(&fragments), "(hello)");
    }

    #[test]
    fn test_sentence() {
        let fragments = auto("Your brain reads faster.").unwrap();
        assert_eq!(
            fragments,
            vec![
                Emphasis("Yo"),
                Plain("ur"),
                Plain(" "),
                Emphasis("br"),
                Plain("ain"),
                Plain(" "),
                Emphasis("re"),
                Plain("ads"),
                Plain(" "),
                Emphasis("fa"),
                Plain("ster."),
            ]
        );
        assert_eq!(flatten_fragments(&fragments), "Your brain reads faster.");
    }

    #[test]
    fn test_core_stops_at_inner_punctuation() {
        // "don't": core is "don", so auto emphasizes one letter.
        let fragments = auto("don't").unwrap();
        assert_eq!(fragments, vec![Emphasis("d"), Plain("on't")]);

        // "e.g." has a one-letter core and stays plain.
        assert_eq!(auto("e.g."), None);
    }

    #[test]
    fn test_fixed_mode() {
        let three = EmphasisMode::fixed(3).unwrap();
        let fragments = transform_text("it elephant", three).unwrap();
        assert_eq!(
            fragments,
            vec![Emphasis("it"), Plain(" "), Emphasis("ele"), Plain("phant")]
        );
    }

    #[test]
    fn test_digits_count_as_word() {
        let fragments = auto("2024").unwrap();
        assert_eq!(fragments, vec![Emphasis("20"), Plain("24")]);
    }

    #[test]
    fn test_nothing_to_emphasize() {
        assert_eq!(auto(""), None);
        assert_eq!(auto("   \n\t "), None);
        assert_eq!(auto("— … !!"), None);
        assert_eq!(auto("a b c"), None);
        assert_eq!(auto("I, a"), None);
    }

    #[test]
    fn test_non_ascii_letters_are_punctuation() {
        // "é" is not an ASCII letter: "été" has a one-letter core "t".
        assert_eq!(auto("été"), None);

        let fragments = auto("«bonjour»").unwrap();
        assert_eq!(fragments, vec![Plain("«"), Emphasis("bon"), Plain("jour»")]);
    }

    #[test]
    fn test_unicode_whitespace_splits() {
        let fragments = auto("one\u{a0}two\u{feff}three").unwrap();
        assert_eq!(
            fragments,
            vec![
                Emphasis("o"),
                Plain("ne"),
                Plain("\u{a0}"),
                Emphasis("t"),
                Plain("wo"),
                Plain("\u{feff}"),
                Emphasis("th"),
                Plain("ree"),
            ]
        );
    }

    #[test]
    fn test_next_line_does_not_split() {
        let fragments = auto("ab\u{85}cd").unwrap();
        assert_eq!(fragments, vec![Emphasis("a"), Plain("b\u{85}cd")]);
        assert_eq!(segments("ab\u{85}cd").count(), 1);
    }

    proptest! {
        #[test]
        fn prop_fragments_rebuild_input(text in "\\PC{0,60}", k in 0usize..6) {
            let mode = EmphasisMode::fixed(k).unwrap_or_default();
            if let Some(fragments) = transform_text(&text, mode) {
                prop_assert_eq!(flatten_fragments(&fragments), text);
            }
        }

        #[test]
        fn prop_emphasis_is_ascii_prefix(text in "[ a-zA-Z0-9.,()'\"-]{0,60}") {
            if let Some(fragments) = transform_text(&text, EmphasisMode::Auto) {
                for fragment in fragments {
                    if let Fragment::Emphasis(head) = fragment {
                        prop_assert!(!head.is_empty());
                        prop_assert!(head.bytes().all(|b| b.is_ascii_alphanumeric()));
                    }
                }
            }
        }
    }
}
