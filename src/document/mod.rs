//! XML document tree model and codec
//!
//! This module provides:
//! - [`Element`]: the in-memory tree (tag, ordered attributes, optional
//!   text, ordered children)
//! - [`parse`]: full-document parse returning the single root
//! - [`serialize`]: whole-document pretty printing with a declaration
//!   header and two-space indentation
//!
//! Parsing and serialization are whole-document operations; there is no
//! streaming or incremental mode.

mod errors;
mod node;
mod parser;
mod writer;

pub use errors::{DocumentError, DocumentResult};
pub use node::Element;
pub use parser::parse;
pub use writer::serialize;
