//! Python source frontend
//!
//! Parsing is offloaded wholesale to the `rustpython-parser` crate;
//! this crate only owns the adapter that lowers the parser's AST into
//! the `srcml-ast` tree model, plus the error surface for parse and
//! lowering failures. The emitter never sees parser types and this
//! crate never emits markup.

pub mod error;
pub mod lower;

pub use error::FrontendError;
pub use lower::parse_module;
