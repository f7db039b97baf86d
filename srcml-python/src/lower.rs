//! Lowering from the parser's AST to the srcML tree model
//!
//! The parser is an off-the-shelf crate; this module only adapts its
//! AST into `srcml-ast` nodes. Lowering is deliberately total over the
//! model: kinds the emitter refuses (async definitions, deletion,
//! context blocks, sets, yields, ...) are still lowered faithfully so
//! the emitter can diagnose them. Syntax with no model counterpart at
//! all (match statements, parameter defaults and varargs, relative
//! imports, class keyword arguments) fails loudly here instead of
//! being silently dropped.

use rustpython_parser::{ast as py, Parse};

use srcml_ast::{
    AnnAssign, Assert, Assign, AsyncFor, AsyncFunctionDef, AsyncWith, Attribute, AugAssign, Await,
    BinOp, BinaryOperator, BoolOp, BooleanOperator, Call, ClassDef, Compare, CompareOperator,
    Comprehension, Constant, Delete, Dict, DictComp, ExceptHandler, Expr, For, FormattedValue,
    FunctionDef, GeneratorExp, Global, If, IfExp, Import, ImportFrom, JoinedStr, Keyword, Lambda,
    List, ListComp, Literal, Name, NamedExpr, Nonlocal, Param, Raise, Return, Set, SetComp, Slice,
    Starred, Stmt, Subscript, Try, Tuple, UnaryOp, UnaryOperator, While, With, WithItem, Yield,
    YieldFrom,
};

use crate::error::FrontendError;

/// Parses one Python module and lowers its body to the tree model
pub fn parse_module(source: &str, path: &str) -> Result<Vec<Stmt>, FrontendError> {
    let suite = py::Suite::parse(source, path).map_err(|err| FrontendError::Parse {
        path: path.to_string(),
        message: err.to_string(),
    })?;
    lower_body(&suite)
}

fn lower_body(body: &[py::Stmt]) -> Result<Vec<Stmt>, FrontendError> {
    body.iter().map(lower_stmt).collect()
}

fn lower_stmt(stmt: &py::Stmt) -> Result<Stmt, FrontendError> {
    match stmt {
        py::Stmt::FunctionDef(node) => Ok(Stmt::FunctionDef(FunctionDef {
            name: node.name.to_string(),
            params: lower_params(&node.args)?,
            body: lower_body(&node.body)?,
            decorators: lower_exprs(&node.decorator_list)?,
            returns: node.returns.as_ref().map(|r| lower_expr(r)).transpose()?,
        })),
        py::Stmt::AsyncFunctionDef(node) => Ok(Stmt::AsyncFunctionDef(AsyncFunctionDef {
            name: node.name.to_string(),
            params: lower_params(&node.args)?,
            body: lower_body(&node.body)?,
            decorators: lower_exprs(&node.decorator_list)?,
            returns: node.returns.as_ref().map(|r| lower_expr(r)).transpose()?,
        })),
        py::Stmt::ClassDef(node) => {
            if !node.keywords.is_empty() {
                return Err(FrontendError::unsupported("class keyword argument", node));
            }
            Ok(Stmt::ClassDef(ClassDef {
                name: node.name.to_string(),
                bases: lower_exprs(&node.bases)?,
                decorators: lower_exprs(&node.decorator_list)?,
                body: lower_body(&node.body)?,
            }))
        }
        py::Stmt::Return(node) => Ok(Stmt::Return(Return {
            value: node.value.as_ref().map(|v| lower_expr(v)).transpose()?,
        })),
        py::Stmt::Delete(node) => Ok(Stmt::Delete(Delete {
            targets: lower_exprs(&node.targets)?,
        })),
        py::Stmt::Assign(node) => Ok(Stmt::Assign(Assign {
            targets: lower_exprs(&node.targets)?,
            value: lower_expr(&node.value)?,
        })),
        py::Stmt::AugAssign(node) => Ok(Stmt::AugAssign(AugAssign {
            target: lower_expr(&node.target)?,
            op: lower_binary_operator(&node.op),
            value: lower_expr(&node.value)?,
        })),
        py::Stmt::AnnAssign(node) => Ok(Stmt::AnnAssign(AnnAssign {
            target: lower_expr(&node.target)?,
            annotation: lower_expr(&node.annotation)?,
            value: node.value.as_ref().map(|v| lower_expr(v)).transpose()?,
        })),
        py::Stmt::For(node) => Ok(Stmt::For(For {
            target: lower_expr(&node.target)?,
            iter: lower_expr(&node.iter)?,
            body: lower_body(&node.body)?,
            orelse: lower_body(&node.orelse)?,
        })),
        py::Stmt::AsyncFor(node) => Ok(Stmt::AsyncFor(AsyncFor {
            target: lower_expr(&node.target)?,
            iter: lower_expr(&node.iter)?,
            body: lower_body(&node.body)?,
            orelse: lower_body(&node.orelse)?,
        })),
        py::Stmt::While(node) => Ok(Stmt::While(While {
            test: lower_expr(&node.test)?,
            body: lower_body(&node.body)?,
            orelse: lower_body(&node.orelse)?,
        })),
        py::Stmt::If(node) => Ok(Stmt::If(If {
            test: lower_expr(&node.test)?,
            body: lower_body(&node.body)?,
            orelse: lower_body(&node.orelse)?,
        })),
        py::Stmt::With(node) => Ok(Stmt::With(With {
            items: lower_with_items(&node.items)?,
            body: lower_body(&node.body)?,
        })),
        py::Stmt::AsyncWith(node) => Ok(Stmt::AsyncWith(AsyncWith {
            items: lower_with_items(&node.items)?,
            body: lower_body(&node.body)?,
        })),
        py::Stmt::Raise(node) => Ok(Stmt::Raise(Raise {
            exc: node.exc.as_ref().map(|e| lower_expr(e)).transpose()?,
            cause: node.cause.as_ref().map(|c| lower_expr(c)).transpose()?,
        })),
        py::Stmt::Try(node) => Ok(Stmt::Try(Try {
            body: lower_body(&node.body)?,
            handlers: node
                .handlers
                .iter()
                .map(lower_handler)
                .collect::<Result<_, _>>()?,
            orelse: lower_body(&node.orelse)?,
            finalbody: lower_body(&node.finalbody)?,
        })),
        py::Stmt::Assert(node) => Ok(Stmt::Assert(Assert {
            test: lower_expr(&node.test)?,
            msg: node.msg.as_ref().map(|m| lower_expr(m)).transpose()?,
        })),
        py::Stmt::Import(node) => Ok(Stmt::Import(Import {
            names: node.names.iter().map(|alias| alias.name.to_string()).collect(),
        })),
        py::Stmt::ImportFrom(node) => {
            if node.level.as_ref().map_or(0, |level| level.to_u32()) > 0 {
                return Err(FrontendError::unsupported("relative import", node));
            }
            let module = match &node.module {
                Some(module) => module.to_string(),
                None => return Err(FrontendError::unsupported("relative import", node)),
            };
            Ok(Stmt::ImportFrom(ImportFrom {
                module,
                names: node.names.iter().map(|alias| alias.name.to_string()).collect(),
            }))
        }
        py::Stmt::Global(node) => Ok(Stmt::Global(Global {
            names: node.names.iter().map(|name| name.to_string()).collect(),
        })),
        py::Stmt::Nonlocal(node) => Ok(Stmt::Nonlocal(Nonlocal {
            names: node.names.iter().map(|name| name.to_string()).collect(),
        })),
        py::Stmt::Expr(node) => Ok(Stmt::Expr(lower_expr(&node.value)?)),
        py::Stmt::Pass(_) => Ok(Stmt::Pass),
        py::Stmt::Break(_) => Ok(Stmt::Break),
        py::Stmt::Continue(_) => Ok(Stmt::Continue),
        other => Err(FrontendError::unsupported("statement kind", other)),
    }
}

fn lower_exprs(exprs: &[py::Expr]) -> Result<Vec<Expr>, FrontendError> {
    exprs.iter().map(|expr| lower_expr(expr)).collect()
}

fn lower_expr(expr: &py::Expr) -> Result<Expr, FrontendError> {
    match expr {
        py::Expr::BoolOp(node) => Ok(Expr::BoolOp(BoolOp {
            op: lower_boolean_operator(&node.op),
            values: lower_exprs(&node.values)?,
        })),
        py::Expr::NamedExpr(node) => Ok(Expr::NamedExpr(NamedExpr {
            target: Box::new(lower_expr(&node.target)?),
            value: Box::new(lower_expr(&node.value)?),
        })),
        py::Expr::BinOp(node) => Ok(Expr::BinOp(BinOp {
            left: Box::new(lower_expr(&node.left)?),
            op: lower_binary_operator(&node.op),
            right: Box::new(lower_expr(&node.right)?),
        })),
        py::Expr::UnaryOp(node) => Ok(Expr::UnaryOp(UnaryOp {
            op: lower_unary_operator(&node.op),
            operand: Box::new(lower_expr(&node.operand)?),
        })),
        py::Expr::Lambda(node) => Ok(Expr::Lambda(Lambda {
            params: lower_params(&node.args)?,
            body: Box::new(lower_expr(&node.body)?),
        })),
        py::Expr::IfExp(node) => Ok(Expr::IfExp(IfExp {
            test: Box::new(lower_expr(&node.test)?),
            body: Box::new(lower_expr(&node.body)?),
            orelse: Box::new(lower_expr(&node.orelse)?),
        })),
        py::Expr::Dict(node) => Ok(Expr::Dict(Dict {
            keys: node
                .keys
                .iter()
                .map(|key| key.as_ref().map(|key| lower_expr(key)).transpose())
                .collect::<Result<_, _>>()?,
            values: lower_exprs(&node.values)?,
        })),
        py::Expr::Set(node) => Ok(Expr::Set(Set {
            elts: lower_exprs(&node.elts)?,
        })),
        py::Expr::ListComp(node) => Ok(Expr::ListComp(ListComp {
            elt: Box::new(lower_expr(&node.elt)?),
            generators: lower_generators(&node.generators)?,
        })),
        py::Expr::SetComp(node) => Ok(Expr::SetComp(SetComp {
            elt: Box::new(lower_expr(&node.elt)?),
            generators: lower_generators(&node.generators)?,
        })),
        py::Expr::DictComp(node) => Ok(Expr::DictComp(DictComp {
            key: Box::new(lower_expr(&node.key)?),
            value: Box::new(lower_expr(&node.value)?),
            generators: lower_generators(&node.generators)?,
        })),
        py::Expr::GeneratorExp(node) => Ok(Expr::GeneratorExp(GeneratorExp {
            elt: Box::new(lower_expr(&node.elt)?),
            generators: lower_generators(&node.generators)?,
        })),
        py::Expr::Await(node) => Ok(Expr::Await(Await {
            value: Box::new(lower_expr(&node.value)?),
        })),
        py::Expr::Yield(node) => Ok(Expr::Yield(Yield {
            value: node
                .value
                .as_ref()
                .map(|value| lower_expr(value))
                .transpose()?
                .map(Box::new),
        })),
        py::Expr::YieldFrom(node) => Ok(Expr::YieldFrom(YieldFrom {
            value: Box::new(lower_expr(&node.value)?),
        })),
        py::Expr::Compare(node) => Ok(Expr::Compare(Compare {
            left: Box::new(lower_expr(&node.left)?),
            ops: node.ops.iter().map(lower_compare_operator).collect(),
            comparators: lower_exprs(&node.comparators)?,
        })),
        py::Expr::Call(node) => Ok(Expr::Call(Call {
            func: Box::new(lower_expr(&node.func)?),
            args: lower_exprs(&node.args)?,
            keywords: node
                .keywords
                .iter()
                .map(|kw| {
                    Ok(Keyword {
                        arg: kw.arg.as_ref().map(|name| name.to_string()),
                        value: lower_expr(&kw.value)?,
                    })
                })
                .collect::<Result<_, FrontendError>>()?,
        })),
        py::Expr::FormattedValue(node) => Ok(Expr::FormattedValue(FormattedValue {
            value: Box::new(lower_expr(&node.value)?),
        })),
        py::Expr::JoinedStr(node) => Ok(Expr::JoinedStr(JoinedStr {
            values: lower_exprs(&node.values)?,
        })),
        py::Expr::Constant(node) => Ok(Expr::Constant(Constant {
            value: lower_literal(&node.value, node)?,
        })),
        py::Expr::Attribute(node) => Ok(Expr::Attribute(Attribute {
            value: Box::new(lower_expr(&node.value)?),
            attr: node.attr.to_string(),
        })),
        py::Expr::Subscript(node) => Ok(Expr::Subscript(Subscript {
            value: Box::new(lower_expr(&node.value)?),
            index: Box::new(lower_expr(&node.slice)?),
        })),
        py::Expr::Starred(node) => Ok(Expr::Starred(Starred {
            value: Box::new(lower_expr(&node.value)?),
        })),
        py::Expr::Name(node) => Ok(Expr::Name(Name::new(node.id.to_string()))),
        py::Expr::List(node) => Ok(Expr::List(List {
            elts: lower_exprs(&node.elts)?,
        })),
        py::Expr::Tuple(node) => Ok(Expr::Tuple(Tuple {
            elts: lower_exprs(&node.elts)?,
        })),
        py::Expr::Slice(node) => Ok(Expr::Slice(Slice {
            lower: node
                .lower
                .as_ref()
                .map(|e| lower_expr(e))
                .transpose()?
                .map(Box::new),
            upper: node
                .upper
                .as_ref()
                .map(|e| lower_expr(e))
                .transpose()?
                .map(Box::new),
            step: node
                .step
                .as_ref()
                .map(|e| lower_expr(e))
                .transpose()?
                .map(Box::new),
        })),
        #[allow(unreachable_patterns)]
        other => Err(FrontendError::unsupported("expression kind", other)),
    }
}

/// Only plain positional parameters exist in the model; defaults,
/// varargs, keyword-only and positional-only markers fail loudly
fn lower_params(args: &py::Arguments) -> Result<Vec<Param>, FrontendError> {
    if args.vararg.is_some()
        || args.kwarg.is_some()
        || !args.kwonlyargs.is_empty()
        || !args.posonlyargs.is_empty()
        || args.args.iter().any(|arg| arg.default.is_some())
    {
        return Err(FrontendError::unsupported("parameter form", args));
    }
    args.args
        .iter()
        .map(|arg| {
            Ok(Param {
                name: arg.def.arg.to_string(),
                annotation: arg
                    .def
                    .annotation
                    .as_ref()
                    .map(|ann| lower_expr(ann))
                    .transpose()?,
            })
        })
        .collect()
}

fn lower_generators(generators: &[py::Comprehension]) -> Result<Vec<Comprehension>, FrontendError> {
    generators
        .iter()
        .map(|gen| {
            Ok(Comprehension {
                target: lower_expr(&gen.target)?,
                iter: lower_expr(&gen.iter)?,
                ifs: lower_exprs(&gen.ifs)?,
                is_async: gen.is_async,
            })
        })
        .collect()
}

fn lower_with_items(items: &[py::WithItem]) -> Result<Vec<WithItem>, FrontendError> {
    items
        .iter()
        .map(|item| {
            Ok(WithItem {
                context_expr: lower_expr(&item.context_expr)?,
                optional_vars: item
                    .optional_vars
                    .as_ref()
                    .map(|vars| lower_expr(vars))
                    .transpose()?,
            })
        })
        .collect()
}

fn lower_handler(handler: &py::ExceptHandler) -> Result<ExceptHandler, FrontendError> {
    let py::ExceptHandler::ExceptHandler(h) = handler;
    Ok(ExceptHandler {
        exception: h.type_.as_ref().map(|t| lower_expr(t)).transpose()?,
        name: h.name.as_ref().map(|name| name.to_string()),
        body: lower_body(&h.body)?,
    })
}

fn lower_literal(
    value: &py::Constant,
    node: &impl std::fmt::Debug,
) -> Result<Literal, FrontendError> {
    match value {
        py::Constant::Str(text) => Ok(Literal::Str(text.clone())),
        py::Constant::Bool(value) => Ok(Literal::Bool(*value)),
        py::Constant::Int(value) => Ok(Literal::Number(value.to_string())),
        py::Constant::Float(value) => Ok(Literal::Number(format!("{:?}", value))),
        py::Constant::Complex { real, imag } => Ok(Literal::Complex(render_complex(*real, *imag))),
        py::Constant::None => Ok(Literal::None),
        py::Constant::Bytes(bytes) => Ok(Literal::Bytes(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
        py::Constant::Ellipsis => Ok(Literal::Ellipsis),
        #[allow(unreachable_patterns)]
        _ => Err(FrontendError::unsupported("constant kind", node)),
    }
}

/// Renders a complex literal the way Python's `str` would
fn render_complex(real: f64, imag: f64) -> String {
    if real == 0.0 {
        format!("{:?}j", imag)
    } else if imag < 0.0 {
        format!("({:?}-{:?}j)", real, -imag)
    } else {
        format!("({:?}+{:?}j)", real, imag)
    }
}

fn lower_binary_operator(op: &py::Operator) -> BinaryOperator {
    match op {
        py::Operator::Add => BinaryOperator::Add,
        py::Operator::Sub => BinaryOperator::Sub,
        py::Operator::Mult => BinaryOperator::Mult,
        py::Operator::MatMult => BinaryOperator::MatMult,
        py::Operator::Div => BinaryOperator::Div,
        py::Operator::Mod => BinaryOperator::Mod,
        py::Operator::Pow => BinaryOperator::Pow,
        py::Operator::LShift => BinaryOperator::LShift,
        py::Operator::RShift => BinaryOperator::RShift,
        py::Operator::BitOr => BinaryOperator::BitOr,
        py::Operator::BitXor => BinaryOperator::BitXor,
        py::Operator::BitAnd => BinaryOperator::BitAnd,
        py::Operator::FloorDiv => BinaryOperator::FloorDiv,
    }
}

fn lower_unary_operator(op: &py::UnaryOp) -> UnaryOperator {
    match op {
        py::UnaryOp::Invert => UnaryOperator::Invert,
        py::UnaryOp::Not => UnaryOperator::Not,
        py::UnaryOp::UAdd => UnaryOperator::UAdd,
        py::UnaryOp::USub => UnaryOperator::USub,
    }
}

fn lower_boolean_operator(op: &py::BoolOp) -> BooleanOperator {
    match op {
        py::BoolOp::And => BooleanOperator::And,
        py::BoolOp::Or => BooleanOperator::Or,
    }
}

fn lower_compare_operator(op: &py::CmpOp) -> CompareOperator {
    match op {
        py::CmpOp::Eq => CompareOperator::Eq,
        py::CmpOp::NotEq => CompareOperator::NotEq,
        py::CmpOp::Lt => CompareOperator::Lt,
        py::CmpOp::LtE => CompareOperator::LtE,
        py::CmpOp::Gt => CompareOperator::Gt,
        py::CmpOp::GtE => CompareOperator::GtE,
        py::CmpOp::Is => CompareOperator::Is,
        py::CmpOp::IsNot => CompareOperator::IsNot,
        py::CmpOp::In => CompareOperator::In,
        py::CmpOp::NotIn => CompareOperator::NotIn,
    }
}
