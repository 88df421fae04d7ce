//! The bionic reading engine.
//!
//! Three parts work on a page's [`ArenaDom`](crate::dom::ArenaDom):
//!
//! - [`walk`] decides which nodes are eligible and replaces each eligible
//!   text node with a marker element (`<span class="bionic-bold-applied">`).
//! - [`transform_text`] splits a text node into plain and emphasized
//!   fragments, using [`emphasis_length`] for the emphasized prefix.
//! - [`revert`] collapses every marker back into plain text.
//!
//! # Example
//!
//! ```
//! use bionic_bold::bionic::{EmphasisMode, revert, walk};
//! use bionic_bold::dom::parse_html;
//!
//! let mut dom = parse_html("<p>Your brain reads faster.</p>");
//! let body = dom.body().unwrap();
//!
//! let stats = walk(&mut dom, body, EmphasisMode::Auto);
//! assert_eq!(stats.words_emphasized, 4);
//! assert_eq!(dom.flatten(body), "Your brain reads faster.");
//!
//! revert(&mut dom, body);
//! assert_eq!(dom.flatten(body), "Your brain reads faster.");
//! ```

mod emphasis;
mod reversal;
mod transform;
mod walker;

pub use emphasis::{EmphasisMode, MODE_PRESETS, emphasis_length};
pub(crate) use emphasis::deserialize_lenient;
pub use reversal::revert;
pub use transform::{Fragment, Segments, flatten_fragments, segments, transform_text};
pub use walker::{
    EMPHASIS_CLASS, EMPHASIS_TAG, MARKER_CLASS, MARKER_TAG, SKIP_TAGS, Visit, WalkStats, classify,
    walk,
};
