//! Syntax tree definitions for srcML conversion
//!
//! This crate is the data model shared by the frontend and the emitter:
//! the closed sets of statement and expression kinds of a Python-like
//! imperative language, plus the operator enumerations and literal
//! values their nodes carry.
//!
//! Nodes are plain owned data. A frontend builds them once per
//! translation unit, the emitter only reads them; nothing here is
//! mutated after construction. All nodes derive serde so a lowered tree
//! can be dumped as JSON for debugging.
//!
//! ## Modules
//!
//! - `op` - operator kind enumerations
//! - `expr` - expression nodes and literals
//! - `stmt` - statement nodes and block-bearing compounds

pub mod expr;
pub mod op;
pub mod stmt;

pub use expr::{
    Attribute, Await, BinOp, BoolOp, Call, Compare, Comprehension, Constant, Dict, DictComp, Expr,
    FormattedValue, GeneratorExp, IfExp, JoinedStr, Keyword, Lambda, List, ListComp, Literal, Name,
    NamedExpr, Param, Set, SetComp, Slice, Starred, Subscript, Tuple, UnaryOp, Yield, YieldFrom,
};
pub use op::{BinaryOperator, BooleanOperator, CompareOperator, UnaryOperator};
pub use stmt::{
    AnnAssign, Assert, Assign, AsyncFor, AsyncFunctionDef, AsyncWith, AugAssign, ClassDef, Delete,
    ExceptHandler, For, FunctionDef, Global, If, Import, ImportFrom, Nonlocal, Raise, Return, Stmt,
    Try, While, With, WithItem,
};
