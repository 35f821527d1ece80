//! # Working-Memory Model
//!
//! Plain data describing what a working-memory graph holds and how it is
//! addressed. No graph access happens here.

pub mod path;
pub mod value_type;

pub use path::{AttributePath, PATH_SEPARATORS};
pub use value_type::ValueType;
