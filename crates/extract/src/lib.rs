//! The serialized UI tree model and the class extractor that
//! tree-shakes a page's styles: walk every node, collect every distinct
//! class token, in document order.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of a serialized UI tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TreeNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<NodeProps>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeChild>,
}

/// Element props. Only the class attributes matter here; everything
/// else rides along untouched so trees survive a round trip.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NodeProps {
    #[serde(
        default,
        rename = "className",
        skip_serializing_if = "Option::is_none"
    )]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A child is either another element or a raw text leaf.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TreeChild {
    Text(String),
    Node(TreeNode),
}

impl NodeProps {
    /// The class attribute for this node: `className` first, then
    /// `class`, first non-empty wins.
    fn class_attr(&self) -> Option<&str> {
        self.class_name
            .as_deref()
            .filter(|value| !value.is_empty())
            .or_else(|| self.class.as_deref().filter(|value| !value.is_empty()))
    }
}

/// Collects the set of distinct class tokens used anywhere in the tree.
///
/// Walks with an explicit worklist rather than recursion, so arbitrarily
/// deep trees cannot overflow the stack; children are pushed in reverse
/// so the returned set keeps document order. Text leaves and nodes
/// without a class attribute contribute nothing.
pub fn extract_classes(root: &TreeNode) -> IndexSet<String> {
    let mut classes = IndexSet::new();
    let mut worklist = vec![root];
    while let Some(node) = worklist.pop() {
        if let Some(attr) = node.props.as_ref().and_then(NodeProps::class_attr) {
            for token in attr.split_whitespace() {
                classes.insert(token.to_string());
            }
        }
        for child in node.children.iter().rev() {
            if let TreeChild::Node(node) = child {
                worklist.push(node);
            }
        }
    }
    log::trace!("extracted {} distinct class tokens", classes.len());
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> TreeNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn collects_classes_at_every_depth() {
        let root = tree(json!({
            "type": "div",
            "props": { "className": "container" },
            "children": [
                {
                    "type": "h1",
                    "props": { "className": "text-2xl font-bold" },
                    "children": ["Hello"]
                }
            ]
        }));
        let classes = extract_classes(&root);
        assert_eq!(
            classes.iter().map(String::as_str).collect::<Vec<_>>(),
            ["container", "text-2xl", "font-bold"]
        );
    }

    #[test]
    fn class_name_wins_over_class() {
        let root = tree(json!({
            "type": "div",
            "props": { "className": "a", "class": "b" }
        }));
        let classes = extract_classes(&root);
        assert!(classes.contains("a"));
        assert!(!classes.contains("b"));
    }

    #[test]
    fn empty_class_name_falls_back_to_class() {
        let root = tree(json!({
            "type": "div",
            "props": { "className": "", "class": "fallback" }
        }));
        assert!(extract_classes(&root).contains("fallback"));
    }

    #[test]
    fn whitespace_runs_and_duplicates() {
        let root = tree(json!({
            "type": "div",
            "props": { "className": "  flex   flex  p-4 " }
        }));
        let classes = extract_classes(&root);
        assert_eq!(classes.len(), 2);
        assert_eq!(
            classes.iter().map(String::as_str).collect::<Vec<_>>(),
            ["flex", "p-4"]
        );
    }

    #[test]
    fn text_leaves_and_bare_nodes_contribute_nothing() {
        let root = tree(json!({
            "type": "div",
            "children": ["just text", { "type": "span" }]
        }));
        assert!(extract_classes(&root).is_empty());
    }

    #[test]
    fn extra_props_survive_deserialization() {
        let root = tree(json!({
            "type": "a",
            "props": { "className": "underline", "href": "/about", "id": "nav" }
        }));
        let props = root.props.as_ref().unwrap();
        assert_eq!(props.rest.len(), 2);
        assert!(extract_classes(&root).contains("underline"));
    }

    #[test]
    fn handles_deeply_nested_trees() {
        let mut node = tree(json!({ "type": "span", "props": { "className": "leaf" } }));
        for _ in 0..1000 {
            node = TreeNode {
                node_type: "div".to_string(),
                props: None,
                children: vec![TreeChild::Node(node)],
            };
        }
        let classes = extract_classes(&node);
        assert!(classes.contains("leaf"));
    }

    #[test]
    fn document_order_is_preserved() {
        let root = tree(json!({
            "type": "div",
            "props": { "className": "first" },
            "children": [
                { "type": "div", "props": { "className": "second" },
                  "children": [ { "type": "i", "props": { "className": "third" } } ] },
                { "type": "div", "props": { "className": "fourth" } }
            ]
        }));
        let classes = extract_classes(&root);
        assert_eq!(
            classes.iter().map(String::as_str).collect::<Vec<_>>(),
            ["first", "second", "third", "fourth"]
        );
    }
}
