//! Per-page controller.
//!
//! A [`Page`] owns one content tree together with the applied flag and the
//! current emphasis mode. Every enable/disable/settings event for the page
//! goes through it.

use std::path::Path;

use crate::bionic::{self, EmphasisMode, WalkStats};
use crate::dom::{ArenaDom, ArenaNodeId, parse_html, parse_html_bytes, serialize_children};
use crate::error::{Error, Result};
use crate::settings::Settings;

/// One page and its bionic state.
pub struct Page {
    dom: ArenaDom,
    applied: bool,
    mode: EmphasisMode,
}

impl Page {
    /// Wrap an already-built content tree. Nothing is applied yet.
    pub fn new(dom: ArenaDom) -> Self {
        Self {
            dom,
            applied: false,
            mode: EmphasisMode::default(),
        }
    }

    /// Parse a page from HTML text.
    pub fn parse(html: &str) -> Self {
        Self::new(parse_html(html))
    }

    /// Parse a page from raw bytes, detecting the encoding.
    pub fn from_bytes(html: &[u8]) -> Self {
        Self::new(parse_html_bytes(html))
    }

    /// Read and parse a page from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn dom(&self) -> &ArenaDom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut ArenaDom {
        &mut self.dom
    }

    /// The page's main content root (`<body>`).
    pub fn content_root(&self) -> Option<ArenaNodeId> {
        self.dom.body()
    }

    /// Whether the content tree currently holds marker elements.
    pub fn is_applied(&self) -> bool {
        self.applied
    }

    pub fn mode(&self) -> EmphasisMode {
        self.mode
    }

    /// Set the mode used by the next [`apply`](Self::apply).
    pub fn set_mode(&mut self, mode: EmphasisMode) {
        self.mode = mode;
    }

    /// Flattened text of the content root.
    pub fn text_content(&self) -> String {
        self.content_root()
            .map(|root| self.dom.flatten(root))
            .unwrap_or_default()
    }

    /// Rewrite the page's text with the current mode.
    ///
    /// No-op when already applied, or when the page has no content root yet.
    pub fn apply(&mut self) -> WalkStats {
        if self.applied {
            tracing::debug!("bionic already applied, skipping");
            return WalkStats::default();
        }
        let Some(root) = self.content_root() else {
            tracing::debug!("no content root, nothing to apply");
            return WalkStats::default();
        };

        self.applied = true;
        let stats = bionic::walk(&mut self.dom, root, self.mode);
        tracing::debug!(
            mode = %self.mode,
            visited = stats.text_nodes_visited,
            wrapped = stats.text_nodes_wrapped,
            words = stats.words_emphasized,
            skipped = stats.skipped_elements,
            "applied bionic emphasis"
        );
        stats
    }

    /// Undo every rewrite on the page and clear the applied flag.
    ///
    /// Safe to call when nothing is applied. Returns the number of markers
    /// removed.
    pub fn revert(&mut self) -> usize {
        self.applied = false;
        let Some(root) = self.content_root() else {
            return 0;
        };

        let removed = bionic::revert(&mut self.dom, root);
        tracing::debug!(markers = removed, "reverted bionic emphasis");
        removed
    }

    /// Re-apply with a new mode if currently applied; otherwise just store it.
    pub fn reapply_with(&mut self, mode: EmphasisMode) -> WalkStats {
        self.mode = mode;
        if !self.applied {
            return WalkStats::default();
        }
        // The arena mutates synchronously, so no settle delay is needed
        // between the two passes.
        self.revert();
        self.apply()
    }

    /// Initialize from persisted settings, as on page load.
    pub fn load_settings(&mut self, settings: &Settings) -> WalkStats {
        self.mode = settings.bold_count;
        if settings.enabled {
            self.apply()
        } else {
            WalkStats::default()
        }
    }

    /// Serialize the whole page back to HTML.
    pub fn to_html(&self) -> Result<String> {
        serialize_children(&self.dom, self.dom.document()).map_err(|e| Error::Serialize(e.to_string()))
    }
}
