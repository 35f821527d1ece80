//! # wm-access — Typed Access to Working Memory
//!
//! Read a symbolic reasoner's working-memory graph by attribute name or by
//! attribute path, and get back `i64`, `f64`, `&str` or identifier handles
//! instead of untyped elements.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: [`Identifier`] and [`Element`] are the contract with
//!    the runtime that owns the graph. This crate only reads through them.
//! 2. **Two result shapes**: numeric fields are mandatory and return
//!    [`Result`]; string and identifier fields are optional and return
//!    `Option`.
//! 3. **Stateless**: every call walks the graph afresh. Nothing is cached,
//!    because the reasoner rewrites working memory between decisions.
//!
//! ## Quick Start
//!
//! ```rust
//! use wm_access::{IdentifierExt, MemoryIdentifier};
//!
//! # fn example() -> wm_access::Result<()> {
//! let input_link = MemoryIdentifier::new("I2").with_id(
//!     "self",
//!     MemoryIdentifier::new("S3")
//!         .with_int("score", 12)
//!         .with_string("name", "rover"),
//! );
//!
//! assert_eq!(input_link.int_at_path("self.score")?, 12);
//! assert_eq!(input_link.string_at_path("self.name"), Some("rover"));
//! assert_eq!(input_link.string_at_path("self.missing"), None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Accessor policy
//!
//! | Accessor | Missing | Wrong type |
//! |----------|---------|------------|
//! | `find_int` / `find_float` | `Error::AttributeNotFound` | `Error::InvalidElementType` |
//! | `int_at_path` / `float_at_path` | `Error::InvalidElementType` | `Error::InvalidElementType` |
//! | `find_string` / `string_at_path` | `None` | `None` |
//! | `find_id` / `id_at_path` | `None` | `None` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod wm;
pub mod resolve;
pub mod access;
pub mod command;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{AttributePath, ValueType};
pub use wm::{CommandSource, Element, Identifier};
pub use resolve::{resolve, resolve_nth};
pub use access::IdentifierExt;
pub use command::CommandSourceExt;

#[cfg(feature = "memory")]
pub use wm::{MemoryAgent, MemoryElement, MemoryIdentifier, MemoryValue};

// ============================================================================
// Error Types
// ============================================================================

use std::fmt;

/// Enough of an offending element to report it after the borrow ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSummary {
    pub attribute: String,
    pub value_type: ValueType,
    pub value: String,
}

impl ElementSummary {
    pub fn of<E: Element>(element: &E) -> Self {
        Self {
            attribute: element.attribute().to_owned(),
            value_type: element.value_type(),
            value: element.value_as_string(),
        }
    }
}

impl fmt::Display for ElementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^{} {} ({})", self.attribute, self.value, self.value_type)
    }
}

fn describe_found(element: &Option<ElementSummary>) -> String {
    match element {
        Some(summary) => summary.to_string(),
        None => "nothing".to_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("attribute '{attribute}' (ordinal {ordinal}) not found on {parent}")]
    AttributeNotFound {
        attribute: String,
        ordinal: usize,
        /// Symbol of the identifier that was searched.
        parent: String,
    },

    /// `element` is `None` when a path did not resolve to anything.
    #[error("invalid element type: expected {expected}, found {}", describe_found(.element))]
    InvalidElementType {
        expected: &'static str,
        element: Option<ElementSummary>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
