//! Inline control flow for tree construction.
//!
//! Lets branching and loops live inside a nested builder expression instead of
//! around it:
//!
//! ```
//! use nodekit::combinators::{conditional, map_to_nodes, select};
//! use nodekit::elements::{div, li, ul};
//!
//! let is_admin = false;
//! let items = ["Apple", "Banana"];
//! let page = div()
//!     .attr("class", select(is_admin, "admin", "user"))
//!     .child(conditional(is_admin, div().with_text("Admin")))
//!     .child(ul().child(map_to_nodes(items, |item| li().with_text(item))));
//!
//! assert_eq!(
//!     page.to_string(),
//!     r#"<div class="user"><ul><li>Apple</li><li>Banana</li></ul></div>"#
//! );
//! ```
//!
//! Callbacks run sequentially on the calling thread, in order, exactly once
//! per repetition or element. Every node-returning function builds a fresh
//! container.

use tracing::{instrument, trace};

use crate::node::NodeTree;

/// Returns `result` if `condition` holds, otherwise `alternative`.
///
/// Both values are already built. Use [`select_with`] to build only the chosen one.
#[inline]
pub fn select<T>(condition: bool, result: T, alternative: T) -> T {
    if condition {
        result
    } else {
        alternative
    }
}

/// Lazy [`select`]: only the chosen closure runs.
pub fn select_with<T, R, A>(condition: bool, result: R, alternative: A) -> T
where
    R: FnOnce() -> T,
    A: FnOnce() -> T,
{
    if condition {
        result()
    } else {
        alternative()
    }
}

/// Returns `result` if `condition` holds, otherwise a fresh empty node.
pub fn conditional<N: NodeTree>(condition: bool, result: N) -> N {
    if condition {
        result
    } else {
        N::empty()
    }
}

/// Lazy [`conditional`]: `result` only runs when `condition` holds.
pub fn conditional_with<N, F>(condition: bool, result: F) -> N
where
    N: NodeTree,
    F: FnOnce() -> N,
{
    if condition {
        result()
    } else {
        N::empty()
    }
}

/// Calls `factory` `n` times and collects the nodes, in call order, under one
/// empty container. Zero or negative `n` yields a childless container.
#[instrument(level = "trace", skip(factory))]
pub fn repeat_n<N, F>(n: i64, mut factory: F) -> N
where
    N: NodeTree,
    F: FnMut() -> N,
{
    let mut container = N::empty();
    for _ in 0..n.max(0) {
        container.append_child(factory());
    }
    container
}

/// Applies `transform` to every element in iteration order and collects the
/// nodes under one empty container. Every element yields exactly one child.
#[instrument(level = "trace", skip_all)]
pub fn map_to_nodes<I, N, F>(input: I, mut transform: F) -> N
where
    I: IntoIterator,
    N: NodeTree,
    F: FnMut(I::Item) -> N,
{
    let mut container = N::empty();
    let mut count = 0usize;
    for item in input {
        container.append_child(transform(item));
        count += 1;
    }
    trace!(count, "mapped elements to nodes");
    container
}

/// Fallible [`repeat_n`]. Stops at the first error and returns it unchanged.
#[instrument(level = "trace", skip(factory))]
pub fn try_repeat_n<N, E, F>(n: i64, mut factory: F) -> Result<N, E>
where
    N: NodeTree,
    F: FnMut() -> Result<N, E>,
{
    let mut container = N::empty();
    for _ in 0..n.max(0) {
        container.append_child(factory()?);
    }
    Ok(container)
}

/// Fallible [`map_to_nodes`]. Stops at the first error; later elements are not visited.
#[instrument(level = "trace", skip_all)]
pub fn try_map_to_nodes<I, N, E, F>(input: I, mut transform: F) -> Result<N, E>
where
    I: IntoIterator,
    N: NodeTree,
    F: FnMut(I::Item) -> Result<N, E>,
{
    let mut container = N::empty();
    for item in input {
        container.append_child(transform(item)?);
    }
    Ok(container)
}
