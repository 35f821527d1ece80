//! # Working-Memory Capability Traits
//!
//! This is THE contract between wm-access and a reasoning runtime's
//! working memory. Everything the accessors do is expressed through the
//! handful of read-only operations defined here.
//!
//! ## Implementations
//!
//! | Runtime | Module | Description |
//! |---------|--------|-------------|
//! | `MemoryIdentifier` | `memory` | In-memory graph for testing/embedding |
//!
//! A binding to a live runtime implements [`Element`] and [`Identifier`]
//! for its own element handles. The graph stays owned by the runtime:
//! implementations hand out borrows, never copies.

#[cfg(feature = "memory")]
pub mod memory;

use crate::model::ValueType;

#[cfg(feature = "memory")]
pub use memory::{MemoryAgent, MemoryElement, MemoryIdentifier, MemoryValue};

// ============================================================================
// Element
// ============================================================================

/// A working-memory element: one `(identifier ^attribute value)` edge, seen
/// from its value.
///
/// The `as_*` views narrow the element to one concrete kind and return
/// `None` on any other kind. They never coerce (an int is not a float).
pub trait Element: Sized {
    /// The identifier type this runtime uses for branch nodes.
    type Identifier: Identifier<Element = Self>;

    /// Attribute name under which this element hangs off its parent.
    fn attribute(&self) -> &str;

    /// Runtime type tag.
    fn value_type(&self) -> ValueType;

    fn as_int(&self) -> Option<i64>;

    fn as_float(&self) -> Option<f64>;

    fn as_str(&self) -> Option<&str>;

    fn as_identifier(&self) -> Option<&Self::Identifier>;

    fn is_identifier(&self) -> bool {
        self.value_type().is_identifier()
    }

    /// The value rendered the way the runtime prints it.
    ///
    /// Identifiers render as their symbol (e.g. `I3`).
    fn value_as_string(&self) -> String {
        let rendered = match self.value_type() {
            ValueType::Identifier => self.as_identifier().map(|id| id.symbol().to_owned()),
            ValueType::Int => self.as_int().map(|v| v.to_string()),
            ValueType::Float => self.as_float().map(|v| v.to_string()),
            ValueType::String => self.as_str().map(str::to_owned),
        };
        rendered.unwrap_or_default()
    }
}

// ============================================================================
// Identifier
// ============================================================================

/// A branch node. Children are addressed two ways:
///
/// - by native position (`child_at`, `0..number_of_children()`), and
/// - by attribute plus ordinal (`find_by_attribute`), where the ordinal is
///   the 0-based position among siblings sharing that attribute.
pub trait Identifier: Sized {
    type Element: Element<Identifier = Self>;

    /// Runtime symbol, e.g. `S1` or `I2`. Used for diagnostics only.
    fn symbol(&self) -> &str;

    fn number_of_children(&self) -> usize;

    /// Child at native position `index`, or `None` past the end.
    fn child_at(&self, index: usize) -> Option<&Self::Element>;

    /// The `ordinal`-th child with this attribute, or `None`.
    fn find_by_attribute(&self, attribute: &str, ordinal: usize) -> Option<&Self::Element>;
}

// ============================================================================
// Commands
// ============================================================================

/// An agent's output link viewed as a flat list of commands.
///
/// Each command is an identifier element; its attribute is the command
/// name. Lookup by name lives in [`crate::command::CommandSourceExt`].
pub trait CommandSource {
    type Element: Element;

    fn number_of_commands(&self) -> usize;

    fn command_at(&self, index: usize) -> Option<&Self::Element>;

    fn command_name<'e>(&self, command: &'e Self::Element) -> &'e str {
        command.attribute()
    }
}
