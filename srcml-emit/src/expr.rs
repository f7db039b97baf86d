//! Expression emission
//!
//! Converts every supported expression kind into a markup fragment.
//! The dispatch is one exhaustive `match` over the expression sum type;
//! unsupported kinds return `ConvertError::UnsupportedConstruct` with a
//! diagnostic dump instead of degrading silently.
//!
//! Shapes worth calling out:
//!
//! - boolean and comparison chains flatten left-associatively into one
//!   `<expr>` fragment, with an implicit `and` between successive
//!   pairwise comparisons (`a < b < c` reads as `(a<b) and (b<c)`)
//! - container displays are bracketed, comma-separated lists; the
//!   first element never receives a leading separator
//! - a lambda opens a statement-style block around its body expression,
//!   which is where expression and statement emission meet

use srcml_ast::{
    Attribute, BinOp, BoolOp, Call, Compare, Comprehension, Constant, Dict, Expr, IfExp, Lambda,
    List, Literal, Param, Slice, Subscript, Tuple, UnaryOp,
};

use crate::error::ConvertError;
use crate::ops::{
    binary_operator, boolean_operator, compare_operator, operator_element, unary_operator,
};
use crate::xml::{escape, form, Fragment};

/// Converts one expression node to its markup fragment
pub fn emit_expr(expr: &Expr) -> Result<Fragment, ConvertError> {
    match expr {
        Expr::BoolOp(node) => emit_bool_op(node),
        Expr::NamedExpr(node) => Err(ConvertError::unsupported(
            "walrus assignment expression",
            node,
        )),
        Expr::BinOp(node) => emit_bin_op(node),
        Expr::UnaryOp(node) => emit_unary_op(node),
        Expr::Lambda(node) => emit_lambda(node),
        Expr::IfExp(node) => emit_if_exp(node),
        Expr::Dict(node) => emit_dict(node),
        Expr::Set(node) => Err(ConvertError::unsupported("set literal", node)),
        Expr::ListComp(node) => emit_comprehension(&node.elt, &node.generators),
        Expr::SetComp(node) => Err(ConvertError::unsupported("set comprehension", node)),
        Expr::DictComp(node) => Err(ConvertError::unsupported("dict comprehension", node)),
        Expr::GeneratorExp(node) => emit_comprehension(&node.elt, &node.generators),
        Expr::Await(node) => Err(ConvertError::unsupported("await expression", node)),
        Expr::Yield(node) => Err(ConvertError::unsupported("yield expression", node)),
        Expr::YieldFrom(node) => Err(ConvertError::unsupported("yield-from expression", node)),
        Expr::Compare(node) => emit_compare(node),
        Expr::Call(node) => emit_call(node),
        Expr::FormattedValue(node) => Err(ConvertError::unsupported(
            "formatted-string interpolation",
            node,
        )),
        Expr::JoinedStr(node) => Err(ConvertError::unsupported(
            "formatted-string interpolation",
            node,
        )),
        Expr::Constant(node) => emit_constant(node),
        Expr::Attribute(node) => emit_attribute(node),
        Expr::Subscript(node) => emit_subscript(node),
        Expr::Starred(node) => Err(ConvertError::unsupported("starred expression", node)),
        Expr::Name(node) => Ok(Fragment::element("name", Fragment::text(&node.id))),
        Expr::List(node) => emit_list(node),
        Expr::Tuple(node) => emit_tuple(node),
        Expr::Slice(node) => Err(ConvertError::unsupported(
            "slice outside a subscript",
            node,
        )),
    }
}

/// Renders an expression that must resolve to a name: a plain identifier
/// or an attribute access; anything else is not a renderable name
pub fn emit_name(expr: &Expr) -> Result<Fragment, ConvertError> {
    match expr {
        Expr::Name(node) => Ok(Fragment::element("name", Fragment::text(&node.id))),
        Expr::Attribute(node) => emit_attribute(node),
        other => Err(ConvertError::unsupported("name node", other)),
    }
}

/// `base.attr` as a nested name: base, a literal `.` operator, and the
/// attribute identifier
fn emit_attribute(node: &Attribute) -> Result<Fragment, ConvertError> {
    let inner = form([
        (Some("name"), emit_expr(&node.value)?),
        (Some("operator"), Fragment::text(".")),
        (Some("name"), Fragment::text(&node.attr)),
    ]);
    Ok(Fragment::element("name", inner))
}

/// Literal constants become typed `<literal>` elements; the literal text
/// is escaped here, exactly once, before embedding
fn emit_constant(node: &Constant) -> Result<Fragment, ConvertError> {
    let frag = match &node.value {
        Literal::Str(text) => Fragment::element(
            "literal type=\"string\"",
            Fragment::text(format!("\"{}\"", escape(text))),
        ),
        Literal::Bool(value) => Fragment::element(
            "literal type=\"boolean\"",
            Fragment::text(if *value { "\"True\"" } else { "\"False\"" }),
        ),
        Literal::Number(token) => {
            Fragment::element("literal type=\"number\"", Fragment::text(escape(token)))
        }
        Literal::Complex(token) => Fragment::element(
            "literal type=\"complex\"",
            Fragment::text(format!("\"{}\"", escape(token))),
        ),
        Literal::None => Fragment::element("literal type=\"none\"", Fragment::text("\"None\"")),
        Literal::Bytes(_) | Literal::Ellipsis => {
            return Err(ConvertError::unsupported("constant", node))
        }
    };
    Ok(frag)
}

/// Boolean chain: operands joined by the connective, wrapped in `<expr>`
fn emit_bool_op(node: &BoolOp) -> Result<Fragment, ConvertError> {
    let oper = operator_element(boolean_operator(node.op));
    let values = node
        .values
        .iter()
        .map(emit_expr)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Fragment::element("expr", Fragment::join(values, &oper)))
}

fn emit_bin_op(node: &BinOp) -> Result<Fragment, ConvertError> {
    let mut body = emit_expr(&node.left)?;
    body.append(operator_element(binary_operator(node.op)));
    body.append(emit_expr(&node.right)?);
    Ok(Fragment::element("expr", body))
}

fn emit_unary_op(node: &UnaryOp) -> Result<Fragment, ConvertError> {
    let mut out = operator_element(unary_operator(node.op));
    out.append(emit_expr(&node.operand)?);
    Ok(out)
}

/// Comparison chain, flattened pairwise: each comparator becomes the left
/// operand of the next comparison, with an implicit `and` between pairs
fn emit_compare(node: &Compare) -> Result<Fragment, ConvertError> {
    let mut body = Fragment::new();
    let mut lhs = emit_expr(&node.left)?;
    for (i, (op, comparator)) in node.ops.iter().zip(&node.comparators).enumerate() {
        if i > 0 {
            body.append(operator_element("and"));
        }
        let rhs = emit_expr(comparator)?;
        body.append(lhs);
        body.append(operator_element(compare_operator(*op)));
        body.append(rhs.clone());
        lhs = rhs;
    }
    Ok(Fragment::element("expr", body))
}

/// Bracketed, comma-separated element list shared by list and tuple
/// displays
fn emit_elements(elts: &[Expr]) -> Result<Fragment, ConvertError> {
    let items = elts.iter().map(emit_expr).collect::<Result<Vec<_>, _>>()?;
    let mut body = Fragment::text("[");
    body.append(Fragment::join(items, &operator_element(",")));
    body.append(Fragment::text("]"));
    Ok(body)
}

fn emit_list(node: &List) -> Result<Fragment, ConvertError> {
    Ok(Fragment::element("block", emit_elements(&node.elts)?))
}

fn emit_tuple(node: &Tuple) -> Result<Fragment, ConvertError> {
    Ok(Fragment::element("index", emit_elements(&node.elts)?))
}

/// Dictionary display: one `<expr>key = value</expr>` per entry inside a
/// bracketed block; a missing key is a `**mapping` unpacking entry, which
/// has no srcML mapping
fn emit_dict(node: &Dict) -> Result<Fragment, ConvertError> {
    let mut body = Fragment::text("[");
    for (key, value) in node.keys.iter().zip(&node.values) {
        let key = match key {
            Some(key) => key,
            None => return Err(ConvertError::unsupported("dict unpacking entry", node)),
        };
        let mut entry = emit_expr(key)?;
        entry.append(Fragment::text(" = "));
        entry.append(emit_expr(value)?);
        body.append(Fragment::element("expr", entry));
    }
    body.append(Fragment::text("]"));
    Ok(Fragment::element("block", body))
}

/// Subscript access dispatches on the index: a slice renders as a
/// bracketed range, any other index renders its bare value fragment
fn emit_subscript(node: &Subscript) -> Result<Fragment, ConvertError> {
    let mut out = emit_expr(&node.value)?;
    match &*node.index {
        Expr::Slice(slice) => out.append(emit_slice(slice)?),
        other => out.append(emit_expr(other)?),
    }
    Ok(out)
}

/// `[lower:upper[:step]]`, each part omitted when absent
fn emit_slice(node: &Slice) -> Result<Fragment, ConvertError> {
    let colon = operator_element(":");
    let mut body = Fragment::text("[");
    if let Some(lower) = &node.lower {
        body.append(emit_expr(lower)?);
    }
    body.append(colon.clone());
    if let Some(upper) = &node.upper {
        body.append(emit_expr(upper)?);
    }
    if let Some(step) = &node.step {
        body.append(colon);
        body.append(emit_expr(step)?);
    }
    body.append(Fragment::text("]"));
    Ok(Fragment::element("index", body))
}

/// Shared lowering for list comprehensions and generator expressions: the
/// yielded expression, then one `<block>` per generator clause
fn emit_comprehension(elt: &Expr, generators: &[Comprehension]) -> Result<Fragment, ConvertError> {
    let mut out = emit_expr(elt)?;
    out.append(operator_element("="));
    for gen in generators {
        if gen.is_async {
            return Err(ConvertError::unsupported(
                "asynchronous comprehension clause",
                gen,
            ));
        }
        let mut clause = emit_expr(&gen.target)?;
        clause.append(emit_expr(&gen.iter)?);
        for condition in &gen.ifs {
            clause.append(emit_expr(condition)?);
        }
        out.append(Fragment::element("block", clause));
    }
    Ok(out)
}

/// Conditional expression: `<ternary>` with condition, then, else parts
fn emit_if_exp(node: &IfExp) -> Result<Fragment, ConvertError> {
    let body = form([
        (Some("condition"), emit_expr(&node.test)?),
        (Some("then"), emit_expr(&node.body)?),
        (Some("else"), emit_expr(&node.orelse)?),
    ]);
    Ok(Fragment::element("ternary", body))
}

/// Parenthesized parameter list shared by function definitions and
/// lambdas: `(<parameter><decl>[<type>]<name></decl></parameter>, ...)`
pub(crate) fn emit_params(params: &[Param]) -> Result<Fragment, ConvertError> {
    let mut rendered = Vec::with_capacity(params.len());
    for prm in params {
        let mut decl = match &prm.annotation {
            Some(annotation) => Fragment::element("type", emit_name(annotation)?),
            None => Fragment::new(),
        };
        decl.append(Fragment::element("name", Fragment::text(&prm.name)));
        rendered.push(Fragment::element(
            "parameter",
            Fragment::element("decl", decl),
        ));
    }
    let mut out = Fragment::text("(");
    out.append(Fragment::join(rendered, &Fragment::text(", ")));
    out.append(Fragment::text(")"));
    Ok(out)
}

/// Lambda: parameter list, then the body expression inside a
/// statement-style block
fn emit_lambda(node: &Lambda) -> Result<Fragment, ConvertError> {
    let mut body = emit_params(&node.params)?;
    let mut block = Fragment::text(": ");
    block.append(Fragment::element("block_content", emit_expr(&node.body)?));
    body.append(Fragment::element("block", block));
    Ok(Fragment::element("lambda", body))
}

/// Function call: resolved callee name, then positional arguments followed
/// by keyword arguments inside one parenthesized argument list
fn emit_call(node: &Call) -> Result<Fragment, ConvertError> {
    let callee =
        emit_name(&node.func).map_err(|_| ConvertError::unsupported("call target", node))?;
    let mut args = Fragment::text("(");
    for arg in &node.args {
        let mut rendered = emit_expr(arg)?;
        if !rendered.starts_with_element("expr") {
            rendered = Fragment::element("expr", rendered);
        }
        args.append(Fragment::element("argument", rendered));
    }
    for kw in &node.keywords {
        let name = match &kw.arg {
            Some(name) => name,
            None => {
                return Err(ConvertError::unsupported(
                    "keyword argument unpacking",
                    node,
                ))
            }
        };
        let mut rendered = Fragment::element("name", Fragment::text(name));
        rendered.append(emit_expr(&kw.value)?);
        args.append(Fragment::element("argument", rendered));
    }
    args.append(Fragment::text(")"));
    let mut body = callee;
    body.append(Fragment::element("argument_list", args));
    Ok(Fragment::element("call", body))
}
