//! Reversal: collapse every marker element back into the plain text it
//! replaced.

use super::walker::MARKER_CLASS;
use crate::dom::{ArenaDom, ArenaNodeId};

/// Replace each marker under `root` with a single text node holding its
/// flattened text, then normalize `root`.
///
/// Returns the number of markers removed. Markers never nest, so the order
/// they are collapsed in does not matter.
pub fn revert(dom: &mut ArenaDom, root: ArenaNodeId) -> usize {
    let markers: Vec<_> = dom
        .descendants(root)
        .filter(|&id| dom.has_class(id, MARKER_CLASS))
        .collect();

    for &marker in &markers {
        let text = dom.flatten(marker);
        let node = dom.create_text(text);
        dom.replace(marker, node);
        dom.remove(marker);
    }

    dom.normalize(root);
    markers.len()
}
