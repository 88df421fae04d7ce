//! html5ever serializer support for ArenaDom.

use std::collections::VecDeque;
use std::io;

use html5ever::QualName;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// A node of an [`ArenaDom`] that html5ever can serialize.
pub struct SerializableNode<'a> {
    dom: &'a ArenaDom,
    id: ArenaNodeId,
}

impl<'a> SerializableNode<'a> {
    pub fn new(dom: &'a ArenaDom, id: ArenaNodeId) -> Self {
        Self { dom, id }
    }
}

enum SerializeOp {
    Open(ArenaNodeId),
    Close(QualName),
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let mut ops = VecDeque::new();
        match traversal_scope {
            TraversalScope::IncludeNode => ops.push_back(SerializeOp::Open(self.id)),
            TraversalScope::ChildrenOnly(_) => {
                ops.extend(self.dom.children(self.id).map(SerializeOp::Open));
            }
        }

        while let Some(op) = ops.pop_front() {
            let id = match op {
                SerializeOp::Open(id) => id,
                SerializeOp::Close(name) => {
                    serializer.end_elem(name)?;
                    continue;
                }
            };
            let Some(node) = self.dom.get(id) else {
                continue;
            };

            match &node.data {
                ArenaNodeData::Document => {}
                ArenaNodeData::Element { name, attrs, .. } => {
                    serializer
                        .start_elem(name.clone(), attrs.iter().map(|a| (&a.name, a.value.as_str())))?;
                    ops.push_front(SerializeOp::Close(name.clone()));
                }
                ArenaNodeData::Text(text) => serializer.write_text(text)?,
                ArenaNodeData::Comment(text) => serializer.write_comment(text)?,
                ArenaNodeData::Doctype { name, .. } => serializer.write_doctype(name)?,
            }

            // Children go in front of the pending close tag, in order.
            let children: Vec<_> = self.dom.children(id).collect();
            for child in children.into_iter().rev() {
                ops.push_front(SerializeOp::Open(child));
            }
        }

        Ok(())
    }
}

/// Serialize the children of `id` as HTML.
pub fn serialize_children(dom: &ArenaDom, id: ArenaNodeId) -> io::Result<String> {
    let mut out = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut out, &SerializableNode::new(dom, id), opts)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_serialize_document() {
        let dom = parse_html("<!DOCTYPE html><html><head></head><body><p class=\"x\">Hi</p></body></html>");
        let html = serialize_children(&dom, dom.document()).unwrap();

        assert_eq!(
            html,
            "<!DOCTYPE html><html><head></head><body><p class=\"x\">Hi</p></body></html>"
        );
    }

    #[test]
    fn test_serialize_escapes_text_but_not_scripts() {
        let dom = parse_html("<body><p>a &lt; b &amp; c</p><script>if (a < b) {}</script></body>");
        let body = dom.body().unwrap();
        let html = serialize_children(&dom, body).unwrap();

        assert_eq!(
            html,
            "<p>a &lt; b &amp; c</p><script>if (a < b) {}</script>"
        );
    }

    #[test]
    fn test_serialize_void_elements_and_comments() {
        let dom = parse_html("<body>one<br>two<!-- note --><img src=\"x.png\"></body>");
        let body = dom.body().unwrap();
        let html = serialize_children(&dom, body).unwrap();

        assert_eq!(html, "one<br>two<!-- note --><img src=\"x.png\">");
    }
}
