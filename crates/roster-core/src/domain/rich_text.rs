use serde::{Deserialize, Serialize};

/// One node of a CMS rich-text document. The CMS delivers an arbitrarily
/// nested tree; unknown node kinds are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "nodeType", default)]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RichTextNode>,
}

impl RichTextNode {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            node_type: "text".to_string(),
            value: Some(value.into()),
            content: Vec::new(),
        }
    }
}

/// Flattens rich-text nodes to plain text in document order. Block-level
/// nodes end with a line break so paragraphs stay separated.
pub fn plain_text(nodes: &[RichTextNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        append_node(&mut out, node);
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn append_node(out: &mut String, node: &RichTextNode) {
    if let Some(value) = &node.value {
        out.push_str(value);
    }
    for child in &node.content {
        append_node(out, child);
    }
    if is_block(&node.node_type) && !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn is_block(node_type: &str) -> bool {
    matches!(
        node_type,
        "paragraph"
            | "heading-1"
            | "heading-2"
            | "heading-3"
            | "heading-4"
            | "heading-5"
            | "heading-6"
            | "blockquote"
            | "list-item"
            | "hr"
    )
}
