//! Expression nodes
//!
//! The closed set of expression kinds. `Expr` is the common wrapper that
//! lets the emitter operate uniformly on any expression position; each
//! variant wraps a struct of the same name carrying the kind-specific
//! children.
//!
//! The set deliberately includes kinds the emitter refuses (sets,
//! set/dict comprehensions, await/yield, string interpolation, starred
//! expressions, walrus assignment): the frontend lowers them faithfully
//! and the emitter fails loudly, so unsupported syntax is a diagnosed
//! error rather than a silent gap in the model.

use serde::{Deserialize, Serialize};

use crate::op::{BinaryOperator, BooleanOperator, CompareOperator, UnaryOperator};

/// A literal value carried by a `Constant` node
///
/// Numeric and complex literals keep their original token text so the
/// emitter can reproduce it without reformatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Str(String),
    Bool(bool),
    Number(String),
    Complex(String),
    None,
    Bytes(String),
    Ellipsis,
}

/// Identifier reference (`x`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub id: String,
}

impl Name {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Attribute access (`base.attr`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub value: Box<Expr>,
    pub attr: String,
}

impl Attribute {
    pub fn new(value: Expr, attr: impl Into<String>) -> Self {
        Self {
            value: Box::new(value),
            attr: attr.into(),
        }
    }
}

/// Literal constant (`1`, `"s"`, `True`, `None`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub value: Literal,
}

impl Constant {
    pub fn new(value: Literal) -> Self {
        Self { value }
    }

    /// Number constant from its source token text
    pub fn number(token: impl Into<String>) -> Self {
        Self::new(Literal::Number(token.into()))
    }

    /// String constant from its (unquoted) contents
    pub fn string(text: impl Into<String>) -> Self {
        Self::new(Literal::Str(text.into()))
    }
}

/// Boolean connective chain (`a and b and c`); always two or more values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolOp {
    pub op: BooleanOperator,
    pub values: Vec<Expr>,
}

/// Binary operator application (`a + b`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinOp {
    pub left: Box<Expr>,
    pub op: BinaryOperator,
    pub right: Box<Expr>,
}

impl BinOp {
    pub fn new(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Unary operator application (`-a`, `not a`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub operand: Box<Expr>,
}

/// Comparison chain (`a < b < c`): one left operand, then pairwise
/// operator/comparator lists of equal length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compare {
    pub left: Box<Expr>,
    pub ops: Vec<CompareOperator>,
    pub comparators: Vec<Expr>,
}

/// Keyword argument in a call (`end=""`); `arg` is `None` for `**kwargs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub arg: Option<String>,
    pub value: Expr,
}

/// Function call (`f(a, b, kw=c)`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
    pub keywords: Vec<Keyword>,
}

impl Call {
    pub fn new(func: Expr, args: Vec<Expr>) -> Self {
        Self {
            func: Box::new(func),
            args,
            keywords: Vec::new(),
        }
    }
}

/// One formal parameter of a function or lambda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub annotation: Option<Expr>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(name: impl Into<String>, annotation: Expr) -> Self {
        Self {
            name: name.into(),
            annotation: Some(annotation),
        }
    }
}

/// Anonymous function (`lambda x: x`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lambda {
    pub params: Vec<Param>,
    pub body: Box<Expr>,
}

/// Conditional expression (`a if test else b`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfExp {
    pub test: Box<Expr>,
    pub body: Box<Expr>,
    pub orelse: Box<Expr>,
}

/// Dictionary display; `keys` and `values` run in parallel, a `None` key
/// marks a `**mapping` unpacking entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dict {
    pub keys: Vec<Option<Expr>>,
    pub values: Vec<Expr>,
}

/// Set display (`{a, b}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub elts: Vec<Expr>,
}

/// List display (`[a, b]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub elts: Vec<Expr>,
}

/// Tuple display (`(a, b)`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    pub elts: Vec<Expr>,
}

/// One `for target in iter [if cond]*` clause of a comprehension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comprehension {
    pub target: Expr,
    pub iter: Expr,
    pub ifs: Vec<Expr>,
    pub is_async: bool,
}

/// List comprehension (`[elt for ...]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListComp {
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// Set comprehension (`{elt for ...}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetComp {
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// Dict comprehension (`{k: v for ...}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictComp {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// Generator expression (`(elt for ...)`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorExp {
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// `await value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Await {
    pub value: Box<Expr>,
}

/// `yield [value]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yield {
    pub value: Option<Box<Expr>>,
}

/// `yield from value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldFrom {
    pub value: Box<Expr>,
}

/// Interpolated piece of a formatted string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedValue {
    pub value: Box<Expr>,
}

/// Formatted string (`f"..."`), a sequence of string and interpolated parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedStr {
    pub values: Vec<Expr>,
}

/// Subscript access (`value[index]`); a `Slice` index selects the range
/// form, anything else is a plain item access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscript {
    pub value: Box<Expr>,
    pub index: Box<Expr>,
}

impl Subscript {
    pub fn new(value: Expr, index: Expr) -> Self {
        Self {
            value: Box::new(value),
            index: Box::new(index),
        }
    }
}

/// Range inside a subscript (`lower:upper[:step]`), every part optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub lower: Option<Box<Expr>>,
    pub upper: Option<Box<Expr>>,
    pub step: Option<Box<Expr>>,
}

/// Starred expression (`*value`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starred {
    pub value: Box<Expr>,
}

/// Walrus assignment expression (`target := value`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedExpr {
    pub target: Box<Expr>,
    pub value: Box<Expr>,
}

/// The closed set of expression kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    BoolOp(BoolOp),
    NamedExpr(NamedExpr),
    BinOp(BinOp),
    UnaryOp(UnaryOp),
    Lambda(Lambda),
    IfExp(IfExp),
    Dict(Dict),
    Set(Set),
    ListComp(ListComp),
    SetComp(SetComp),
    DictComp(DictComp),
    GeneratorExp(GeneratorExp),
    Await(Await),
    Yield(Yield),
    YieldFrom(YieldFrom),
    Compare(Compare),
    Call(Call),
    FormattedValue(FormattedValue),
    JoinedStr(JoinedStr),
    Constant(Constant),
    Attribute(Attribute),
    Subscript(Subscript),
    Starred(Starred),
    Name(Name),
    List(List),
    Tuple(Tuple),
    Slice(Slice),
}

impl Expr {
    /// Identifier expression shorthand, the most common leaf in tests
    pub fn name(id: impl Into<String>) -> Self {
        Expr::Name(Name::new(id))
    }

    /// Number-constant shorthand from its source token text
    pub fn number(token: impl Into<String>) -> Self {
        Expr::Constant(Constant::number(token))
    }

    /// String-constant shorthand from its (unquoted) contents
    pub fn string(text: impl Into<String>) -> Self {
        Expr::Constant(Constant::string(text))
    }
}

impl From<Name> for Expr {
    fn from(node: Name) -> Self {
        Expr::Name(node)
    }
}

impl From<Attribute> for Expr {
    fn from(node: Attribute) -> Self {
        Expr::Attribute(node)
    }
}

impl From<Constant> for Expr {
    fn from(node: Constant) -> Self {
        Expr::Constant(node)
    }
}

impl From<BinOp> for Expr {
    fn from(node: BinOp) -> Self {
        Expr::BinOp(node)
    }
}

impl From<Call> for Expr {
    fn from(node: Call) -> Self {
        Expr::Call(node)
    }
}

impl From<Subscript> for Expr {
    fn from(node: Subscript) -> Self {
        Expr::Subscript(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_shorthand_builds_a_name_node() {
        let expr = Expr::name("x");
        assert_eq!(expr, Expr::Name(Name { id: "x".to_string() }));
    }

    #[test]
    fn attribute_boxes_its_base() {
        let attr = Attribute::new(Expr::name("a"), "b");
        assert_eq!(*attr.value, Expr::name("a"));
        assert_eq!(attr.attr, "b");
    }

    #[test]
    fn expressions_serialize_by_kind_tag() {
        let expr = Expr::number("1");
        let json = serde_json::to_string(&expr).unwrap();
        assert!(json.contains("Constant"));
        assert!(json.contains("Number"));
    }
}
