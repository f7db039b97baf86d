//! Statement nodes
//!
//! The closed set of statement kinds. A module body, a function body or
//! any other block is an ordered `Vec<Stmt>`; compound statements own
//! their child blocks directly, so one recursive walk covers the whole
//! translation unit.
//!
//! As with expressions, kinds the emitter refuses (async definitions,
//! deletion, annotated assignment, context-management blocks) are still
//! part of the model: the frontend lowers them and the emitter reports
//! them as unsupported constructs with a full diagnostic dump.

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, Param};
use crate::op::BinaryOperator;

/// Function definition (`def name(params) -> returns: body`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub decorators: Vec<Expr>,
    pub returns: Option<Expr>,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>, params: Vec<Param>, body: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            params,
            body,
            decorators: Vec::new(),
            returns: None,
        }
    }
}

/// Asynchronous function definition (`async def ...`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncFunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub decorators: Vec<Expr>,
    pub returns: Option<Expr>,
}

/// Class definition (`class name(bases): body`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    pub bases: Vec<Expr>,
    pub decorators: Vec<Expr>,
    pub body: Vec<Stmt>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>, bases: Vec<Expr>, body: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            bases,
            decorators: Vec::new(),
            body,
        }
    }
}

/// `return [value]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    pub value: Option<Expr>,
}

/// `del target, ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub targets: Vec<Expr>,
}

/// Assignment (`target = value`); more than one target means a chained
/// `a = b = value` form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub targets: Vec<Expr>,
    pub value: Expr,
}

impl Assign {
    pub fn new(target: Expr, value: Expr) -> Self {
        Self {
            targets: vec![target],
            value,
        }
    }
}

/// Augmented assignment (`target += value`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugAssign {
    pub target: Expr,
    pub op: BinaryOperator,
    pub value: Expr,
}

/// Annotated assignment (`target: annotation [= value]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnAssign {
    pub target: Expr,
    pub annotation: Expr,
    pub value: Option<Expr>,
}

/// For-each loop; `orelse` is the loop's trailing `else` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct For {
    pub target: Expr,
    pub iter: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

impl For {
    pub fn new(target: Expr, iter: Expr, body: Vec<Stmt>) -> Self {
        Self {
            target,
            iter,
            body,
            orelse: Vec::new(),
        }
    }
}

/// Asynchronous for-each loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncFor {
    pub target: Expr,
    pub iter: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

/// Conditional loop; `orelse` is the loop's trailing `else` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct While {
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

impl While {
    pub fn new(test: Expr, body: Vec<Stmt>) -> Self {
        Self {
            test,
            body,
            orelse: Vec::new(),
        }
    }
}

/// Conditional statement; an `elif` chain arrives as an `orelse` holding a
/// single nested `If`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

impl If {
    pub fn new(test: Expr, body: Vec<Stmt>) -> Self {
        Self {
            test,
            body,
            orelse: Vec::new(),
        }
    }
}

/// One `context_expr [as optional_vars]` item of a `with` statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithItem {
    pub context_expr: Expr,
    pub optional_vars: Option<Expr>,
}

/// Context-management block (`with items: body`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct With {
    pub items: Vec<WithItem>,
    pub body: Vec<Stmt>,
}

/// Asynchronous context-management block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncWith {
    pub items: Vec<WithItem>,
    pub body: Vec<Stmt>,
}

/// `raise [exc [from cause]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raise {
    pub exc: Option<Expr>,
    pub cause: Option<Expr>,
}

/// One `except [type [as name]]: body` clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptHandler {
    pub exception: Option<Expr>,
    pub name: Option<String>,
    pub body: Vec<Stmt>,
}

/// `try: body except ... else: orelse finally: finalbody`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Try {
    pub body: Vec<Stmt>,
    pub handlers: Vec<ExceptHandler>,
    pub orelse: Vec<Stmt>,
    pub finalbody: Vec<Stmt>,
}

/// `assert test [, msg]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assert {
    pub test: Expr,
    pub msg: Option<Expr>,
}

/// `import name, ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub names: Vec<String>,
}

/// `from module import name, ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFrom {
    pub module: String,
    pub names: Vec<String>,
}

/// `global name, ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Global {
    pub names: Vec<String>,
}

/// `nonlocal name, ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nonlocal {
    pub names: Vec<String>,
}

/// The closed set of statement kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    FunctionDef(FunctionDef),
    AsyncFunctionDef(AsyncFunctionDef),
    ClassDef(ClassDef),
    Return(Return),
    Delete(Delete),
    Assign(Assign),
    AugAssign(AugAssign),
    AnnAssign(AnnAssign),
    For(For),
    AsyncFor(AsyncFor),
    While(While),
    If(If),
    With(With),
    AsyncWith(AsyncWith),
    Raise(Raise),
    Try(Try),
    Assert(Assert),
    Import(Import),
    ImportFrom(ImportFrom),
    Global(Global),
    Nonlocal(Nonlocal),
    Expr(Expr),
    Pass,
    Break,
    Continue,
}

impl From<Assign> for Stmt {
    fn from(node: Assign) -> Self {
        Stmt::Assign(node)
    }
}

impl From<If> for Stmt {
    fn from(node: If) -> Self {
        Stmt::If(node)
    }
}

impl From<For> for Stmt {
    fn from(node: For) -> Self {
        Stmt::For(node)
    }
}

impl From<While> for Stmt {
    fn from(node: While) -> Self {
        Stmt::While(node)
    }
}

impl From<FunctionDef> for Stmt {
    fn from(node: FunctionDef) -> Self {
        Stmt::FunctionDef(node)
    }
}

impl From<ClassDef> for Stmt {
    fn from(node: ClassDef) -> Self {
        Stmt::ClassDef(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_constructor_uses_a_single_target() {
        let stmt = Assign::new(Expr::name("x"), Expr::number("1"));
        assert_eq!(stmt.targets.len(), 1);
    }

    #[test]
    fn statements_serialize_by_kind_tag() {
        let stmt = Stmt::Pass;
        let json = serde_json::to_string(&stmt).unwrap();
        assert!(json.contains("Pass"));
    }
}
