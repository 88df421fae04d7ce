//! Page content tree.
//!
//! HTML is parsed with html5ever into an [`ArenaDom`], mutated in place by
//! the bionic engine, and serialized back out with html5ever's serializer.
//!
//! # Example
//!
//! ```
//! use bionic_bold::dom::parse_html;
//!
//! let dom = parse_html("<p>Hello, <b>World</b>!</p>");
//! let body = dom.body().unwrap();
//! assert_eq!(dom.flatten(body), "Hello, World!");
//! ```

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{
    ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, ChildrenIter, Descendants,
    html_name,
};
pub use serialize::{SerializableNode, serialize_children};
pub use tree_sink::ArenaSink;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse an HTML document into an arena DOM.
///
/// Parsing never fails: malformed markup is recovered the way browsers do.
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = parse_document(ArenaSink::new(), ParseOpts::default()).one(html);
    if sink.parse_errors() > 0 {
        tracing::debug!(errors = sink.parse_errors(), "recovered from html parse errors");
    }
    sink.into_dom()
}

/// Parse HTML bytes, detecting the character encoding.
///
/// Tries UTF-8 first, then any charset the page declares, then Windows-1252.
pub fn parse_html_bytes(html: &[u8]) -> ArenaDom {
    let hint_encoding = crate::util::sniff_charset(html);
    let html_str = crate::util::decode_text(html, hint_encoding);
    parse_html(&html_str)
}
