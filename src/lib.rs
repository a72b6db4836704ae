//! Declarative combinators for building document node trees.
//!
//! The core lives in [`combinators`]: [`select`], [`conditional`], [`repeat_n`]
//! and [`map_to_nodes`], generic over any tree type implementing [`NodeTree`].
//! [`Node`], [`elements`] and [`render`] provide a ready-made HTML node tree.

pub mod combinators;
pub mod config;
pub mod elements;
pub mod errors;
pub mod node;
pub mod render;
pub mod tree_traits;
pub mod util;

pub use combinators::{
    conditional, conditional_with, map_to_nodes, repeat_n, select, select_with, try_map_to_nodes,
    try_repeat_n,
};
pub use config::{RenderSettings, VoidStyle};
pub use errors::{RenderError, RenderResult, SettingsError, SettingsResult};
pub use node::{Attribute, Node, NodeKind, NodeTree};
pub use render::Renderer;
pub use tree_traits::{TreeNodeConvert, TreeView};

/// Renders `node` with default settings.
pub fn render_to_string(node: &Node) -> RenderResult<String> {
    Renderer::default().render_to_string(node)
}
