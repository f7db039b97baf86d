//! Operator enumerations
//!
//! Closed sets of operator kinds as they appear in the source grammar.
//! The spelling of each operator lives with the emitter, not here: these
//! enums only identify the operator carried by a node, so that every
//! consumer dispatches with an exhaustive `match` and a forgotten
//! operator is a compile error rather than a runtime fallthrough.

use serde::{Deserialize, Serialize};

/// Binary arithmetic and bitwise operators (`a + b`, `a << b`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mult,
    MatMult,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,
}

/// Unary operators (`~a`, `not a`, `+a`, `-a`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Invert,
    Not,
    UAdd,
    USub,
}

/// Boolean connectives (`a and b`, `a or b`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOperator {
    And,
    Or,
}

/// The ten comparison operators (`==`, `!=`, `<`, `<=`, `>`, `>=`, `is`,
/// `is not`, `in`, `not in`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOperator {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}
