//! # bionic-bold
//!
//! Bionic reading for HTML pages: the first letters of every word are set
//! in bold so the eye can anchor on them.
//!
//! ## Features
//!
//! - Rewrites the text of a parsed page in place and reverts it exactly
//! - Skips code, form controls, editable regions and other non-prose content
//! - Auto emphasis scaled to word length, or a fixed 1 to 4 characters
//! - JSON message contract for driving a page from a separate control surface
//!
//! ## Quick Start
//!
//! ```
//! use bionic_bold::{EmphasisMode, Page};
//!
//! let mut page = Page::parse("<p>Reading faster</p>");
//! page.set_mode(EmphasisMode::Auto);
//! page.apply();
//!
//! let html = page.to_html().unwrap();
//! assert!(html.contains("<b class=\"bionic-bold\">Rea</b>ding"));
//!
//! page.revert();
//! assert!(!page.to_html().unwrap().contains("bionic"));
//! ```
//!
//! ## Driving a page with messages
//!
//! ```
//! use bionic_bold::Page;
//!
//! let mut page = Page::parse("<p>some words</p>");
//! page.handle_json(r#"{"action":"toggle","enabled":true,"boldCount":2}"#).unwrap();
//!
//! let status = page.handle_json(r#"{"action":"getStatus"}"#).unwrap();
//! assert_eq!(status, r#"{"enabled":true}"#);
//! ```

pub mod bionic;
pub mod control;
pub mod dom;
pub mod error;
pub mod message;
pub mod page;
pub mod preview;
pub mod settings;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bionic::{EmphasisMode, MODE_PRESETS, WalkStats, emphasis_length};
pub use control::ControlSurface;
pub use error::{Error, Result};
pub use message::{JsonTransport, PageTransport, Request, Response, Transport, TransportError};
pub use page::Page;
pub use preview::render_preview;
pub use settings::{FileStore, MemoryStore, Settings, SettingsStore};
