//! treedoc - audited read/write/append access to XML documents on local disk
//!
//! A handler binds one document path and exposes whole-file read,
//! write, and append; each operation is wrapped by an audit layer and
//! raises only the two taxonomy errors (`NotFound`, `Corrupted`).

pub mod audit;
pub mod cli;
pub mod document;
pub mod handler;
