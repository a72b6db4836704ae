//! Markup serialization of [`Node`] trees.

use std::fmt;
use std::io;

use tracing::instrument;

use crate::config::{RenderSettings, VoidStyle};
use crate::elements::is_void_element;
use crate::errors::RenderResult;
use crate::node::{Attribute, Node, NodeKind};

/// Writes nodes as markup: own representation first, then children in order,
/// with nothing between siblings.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render<W: fmt::Write>(&self, node: &Node, out: &mut W) -> RenderResult<()> {
        self.write_node(node, out)?;
        Ok(())
    }

    pub fn render_to_string(&self, node: &Node) -> RenderResult<String> {
        let mut out = String::new();
        self.render(node, &mut out)?;
        Ok(out)
    }

    /// Renders into a byte sink, e.g. a file or socket.
    #[instrument(level = "trace", skip_all)]
    pub fn render_to_writer<W: io::Write>(&self, node: &Node, out: &mut W) -> RenderResult<()> {
        let markup = self.render_to_string(node)?;
        out.write_all(markup.as_bytes())?;
        Ok(())
    }

    fn write_node<W: fmt::Write>(&self, node: &Node, out: &mut W) -> fmt::Result {
        match node.kind() {
            NodeKind::Empty => {}
            NodeKind::Text(content) => self.write_text(content, self.settings.escape_text, out)?,
            NodeKind::Raw(markup) => out.write_str(markup)?,
            NodeKind::Element { tag, attributes } => {
                out.write_char('<')?;
                out.write_str(tag)?;
                self.write_attributes(attributes, out)?;
                if is_void_element(tag) {
                    // no closing tag; children still follow in order
                    match self.settings.void_style {
                        VoidStyle::Html => out.write_char('>')?,
                        VoidStyle::Xhtml => out.write_str(" />")?,
                    }
                    return self.write_children(node, out);
                }
                out.write_char('>')?;
                self.write_children(node, out)?;
                return write!(out, "</{}>", tag);
            }
        }
        self.write_children(node, out)
    }

    fn write_children<W: fmt::Write>(&self, node: &Node, out: &mut W) -> fmt::Result {
        for child in node.child_nodes() {
            self.write_node(child, out)?;
        }
        Ok(())
    }

    fn write_attributes<W: fmt::Write>(&self, attributes: &[Attribute], out: &mut W) -> fmt::Result {
        for attribute in attributes {
            out.write_char(' ')?;
            out.write_str(&attribute.name)?;
            if let Some(value) = &attribute.value {
                out.write_str("=\"")?;
                self.write_text(value, self.settings.escape_attributes, out)?;
                out.write_char('"')?;
            }
        }
        Ok(())
    }

    fn write_text<W: fmt::Write>(&self, content: &str, escape: bool, out: &mut W) -> fmt::Result {
        if escape {
            write_escaped(content, out)
        } else {
            out.write_str(content)
        }
    }
}

fn write_escaped<W: fmt::Write>(content: &str, out: &mut W) -> fmt::Result {
    let mut last = 0;
    for (i, c) in content.char_indices() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        out.write_str(&content[last..i])?;
        out.write_str(entity)?;
        last = i + c.len_utf8();
    }
    out.write_str(&content[last..])
}

/// Escapes `& < > " '` as HTML entities.
pub fn escape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    // writing into a String cannot fail
    let _ = write_escaped(content, &mut out);
    out
}
