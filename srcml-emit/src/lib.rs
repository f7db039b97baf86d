//! srcML emission engine
//!
//! Converts an already-parsed syntax tree (`srcml-ast` nodes) into
//! srcML: a markup dialect that represents every syntactic construct
//! as nested tagged elements while keeping the original token text
//! close enough for near-round-trip reconstruction.
//!
//! Architecture
//!
//! - `xml` - fragment construction; balanced nesting by construction
//! - `ops` - operator lexicon, one fixed spelling per operator kind
//! - `expr` - expression emission
//! - `stmt` - statement emission and the block composer
//! - `unit` - translation-unit wrapper with start/end markers
//! - `error` - the single unsupported-construct failure
//!
//! Expression and statement emission are two mutually recursive pure
//! functions over the node sum types: each call reads its input node
//! and returns an owned fragment, so there is no shared state and one
//! translation unit is always one uninterrupted recursive pass.
//! Multiple units can be converted in parallel without coordination.
//!
//! This is a pure lib: it powers the py2srcml CLI but is shell
//! agnostic; nothing here prints, reads files or touches the
//! environment.

pub mod error;
pub mod expr;
pub mod ops;
pub mod stmt;
pub mod unit;
pub mod xml;

pub use error::ConvertError;
pub use expr::{emit_expr, emit_name};
pub use stmt::{emit_block, emit_stmt};
pub use unit::convert_unit;
pub use xml::Fragment;
