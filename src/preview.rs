//! Settings preview: a sample sentence rendered with the selected mode.

use crate::bionic::{EmphasisMode, emphasis_length};

/// Words of the preview sentence.
pub const PREVIEW_WORDS: [&str; 10] = [
    "Your", "brain", "reads", "faster", "when", "bold", "letters", "guide", "your", "eyes",
];

/// Render the preview sentence as HTML, each word's prefix in `<b>`.
///
/// Uses the same [`emphasis_length`] as the page engine, so the preview
/// always matches what a page will show.
pub fn render_preview(mode: EmphasisMode) -> String {
    let words: Vec<String> = PREVIEW_WORDS
        .iter()
        .map(|word| {
            let (head, tail) = word.split_at(emphasis_length(word.len(), mode));
            format!("<b>{head}</b>{tail}")
        })
        .collect();
    format!("{}.", words.join(" "))
}
