//! Attribute-path resolution.
//!
//! A path walks down from a root identifier one attribute at a time. Every
//! intermediate step takes the first child with that attribute (ordinal 0)
//! and must land on an identifier; only the final step may pick another
//! ordinal. There is no backtracking: if `a` has two `^b` children and the
//! first is a leaf, `a.b.c` does not resolve even when the second `^b`
//! has a `^c`.
//!
//! A path that does not resolve is an ordinary outcome (`None`). Working
//! memory changes between decisions, so callers routinely ask for
//! structure that is no longer there.

use tracing::{debug, trace};

use crate::model::AttributePath;
use crate::wm::{Element, Identifier};

/// Resolve `path` from `root`, taking ordinal 0 at the final step.
pub fn resolve<'a, I: Identifier>(root: &'a I, path: &AttributePath) -> Option<&'a I::Element> {
    resolve_nth(root, path, 0)
}

/// Resolve `path` from `root`, taking ordinal `last_index` at the final step.
///
/// Returns `None` for an empty path, never `root` itself.
pub fn resolve_nth<'a, I: Identifier>(
    root: &'a I,
    path: &AttributePath,
    last_index: usize,
) -> Option<&'a I::Element> {
    let Some((last, intermediate)) = path.split_last() else {
        debug!(root = root.symbol(), "empty attribute path does not resolve");
        return None;
    };

    let mut current = root;
    for (depth, attribute) in intermediate.iter().enumerate() {
        trace!(depth, symbol = current.symbol(), attribute = attribute.as_str(), "path step");

        let Some(child) = current.find_by_attribute(attribute, 0) else {
            debug!(%path, depth, attribute = attribute.as_str(), "path broken: attribute missing");
            return None;
        };
        let Some(next) = child.as_identifier() else {
            debug!(
                %path,
                depth,
                attribute = attribute.as_str(),
                found = %child.value_type(),
                "path broken: cannot descend through a leaf"
            );
            return None;
        };
        current = next;
    }

    let found = current.find_by_attribute(last, last_index);
    if found.is_none() {
        debug!(%path, attribute = last, ordinal = last_index, "path broken: final attribute missing");
    }
    found
}
