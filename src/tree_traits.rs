/*
Node trees as termtree output, for debugging what a combinator expression built.

The NodeTree impl for termtree lives here next to the conversion: through the
TreeView wrapper a termtree can be assembled directly by the combinators too.
 */
use std::fmt;

use termtree::Tree;
use tracing::{instrument, trace};

use crate::node::{Node, NodeKind, NodeTree};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .child_nodes()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(label(self)).with_leaves(leaves)
    }
}

fn label(node: &Node) -> String {
    match node.kind() {
        NodeKind::Empty => "(empty)".to_string(),
        NodeKind::Text(content) => format!("{:?}", content),
        NodeKind::Raw(markup) => format!("raw {:?}", markup),
        NodeKind::Element { tag, attributes } => {
            let mut out = format!("<{}", tag);
            for attribute in attributes {
                match &attribute.value {
                    Some(value) => out.push_str(&format!(" {}={:?}", attribute.name, value)),
                    None => out.push_str(&format!(" {}", attribute.name)),
                }
            }
            out.push('>');
            out
        }
    }
}

/// termtree that the combinators can assemble directly.
///
/// Root-less trees are containers: they print nothing themselves and are spliced
/// into their parent on append, so an empty view renders as `""`.
#[derive(Debug, Clone)]
pub struct TreeView(pub Tree<String>);

impl TreeView {
    pub fn leaf(label: impl Into<String>) -> Self {
        TreeView(Tree::new(label.into()))
    }

    fn is_container(&self) -> bool {
        self.0.root.is_empty()
    }
}

impl From<Tree<String>> for TreeView {
    fn from(tree: Tree<String>) -> Self {
        TreeView(tree)
    }
}

impl NodeTree for TreeView {
    fn empty() -> Self {
        TreeView(Tree::new(String::new()))
    }

    fn append_child(&mut self, child: Self) {
        if child.is_container() {
            trace!(leaves = child.0.leaves.len(), "splicing container into tree view");
            self.0.leaves.extend(child.0.leaves);
        } else {
            self.0.push(child.0);
        }
    }
}

impl fmt::Display for TreeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_container() {
            for leaf in &self.0.leaves {
                write!(f, "{}", leaf)?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
