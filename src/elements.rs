//! Constructors for common HTML elements.
//!
//! ```
//! use nodekit::elements::{li, ul};
//!
//! let list = ul().child(li().with_text("one")).child(li().with_text("two"));
//! assert_eq!(list.to_string(), "<ul><li>one</li><li>two</li></ul>");
//! ```

use crate::node::Node;

/// Elements rendered without closing tag and without children.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

macro_rules! elements {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` element")]
            pub fn $name() -> Node {
                Node::element(stringify!($name))
            }
        )*
    };
}

elements!(
    html, head, body, title, main, header, footer, nav, section, article, div, span, p, a, ul,
    ol, li, h1, h2, h3, strong, em, button, table, tr, td, br, hr, img, input, meta, link,
);
