//! Statement emission
//!
//! Converts every supported statement kind into a markup fragment. The
//! block composer is the single composition primitive: every compound
//! statement (loops, conditionals, definitions, handlers) wraps its
//! child statements through `emit_block`, so source order and nesting
//! fall out of one recursive walk.
//!
//! Unsupported kinds (async definitions and loops, deletion, annotated
//! assignment, context-management blocks, multi-target assignment, a
//! trailing else-clause on either loop form) fail with a diagnostic
//! dump and unwind the whole translation unit.

use std::fmt;

use srcml_ast::{
    Assert, Assign, AugAssign, ClassDef, Expr, For, FunctionDef, If, Import, ImportFrom, Raise,
    Return, Stmt, Try, While,
};

use crate::error::ConvertError;
use crate::expr::{emit_expr, emit_name, emit_params};
use crate::ops::{binary_operator, operator_element};
use crate::xml::{form, Fragment};

/// Wraps an ordered statement sequence into one block fragment
///
/// An empty sequence still produces a well-formed block with an empty
/// content container.
pub fn emit_block(stmts: &[Stmt]) -> Result<Fragment, ConvertError> {
    let mut content = Fragment::new();
    for stmt in stmts {
        content.append(emit_stmt(stmt)?);
    }
    let mut body = Fragment::text(":");
    body.append(Fragment::element("block_content", content));
    Ok(Fragment::element("block", body))
}

/// Converts one statement node to its markup fragment
pub fn emit_stmt(stmt: &Stmt) -> Result<Fragment, ConvertError> {
    match stmt {
        Stmt::FunctionDef(node) => emit_function_def(node),
        Stmt::AsyncFunctionDef(node) => Err(ConvertError::unsupported(
            "asynchronous function definition",
            node,
        )),
        Stmt::ClassDef(node) => emit_class_def(node),
        Stmt::Return(node) => emit_return(node),
        Stmt::Delete(node) => Err(ConvertError::unsupported("deletion statement", node)),
        Stmt::Assign(node) => emit_assign(node),
        Stmt::AugAssign(node) => emit_aug_assign(node),
        Stmt::AnnAssign(node) => Err(ConvertError::unsupported("annotated assignment", node)),
        Stmt::For(node) => emit_for(node),
        Stmt::AsyncFor(node) => Err(ConvertError::unsupported("asynchronous for loop", node)),
        Stmt::While(node) => emit_while(node),
        Stmt::If(node) => emit_if(node, false),
        Stmt::With(node) => Err(ConvertError::unsupported(
            "context-management block",
            node,
        )),
        Stmt::AsyncWith(node) => Err(ConvertError::unsupported(
            "asynchronous context-management block",
            node,
        )),
        Stmt::Raise(node) => emit_raise(node),
        Stmt::Try(node) => emit_try(node),
        Stmt::Assert(node) => emit_assert(node),
        Stmt::Import(node) => emit_import(node),
        Stmt::ImportFrom(node) => emit_import_from(node),
        Stmt::Global(node) => emit_declaration("global", &node.names),
        Stmt::Nonlocal(node) => emit_declaration("nonlocal", &node.names),
        Stmt::Expr(value) => Ok(Fragment::element(
            "expr_stmt",
            Fragment::element("expr", emit_expr(value)?),
        )),
        Stmt::Pass => Ok(Fragment::element("empty_stmt", Fragment::text("pass"))),
        Stmt::Break => Ok(Fragment::element("break", Fragment::text("break"))),
        Stmt::Continue => Ok(Fragment::element("continue", Fragment::text("continue"))),
    }
}

/// Single-target assignment; the chained `a = b = c` form has no srcML
/// mapping
fn emit_assign(node: &Assign) -> Result<Fragment, ConvertError> {
    let target = match node.targets.as_slice() {
        [target] => target,
        _ => return Err(ConvertError::unsupported("multi-target assignment", node)),
    };
    let mut body = emit_expr(target)?;
    body.append(operator_element("="));
    body.append(emit_expr(&node.value)?);
    Ok(Fragment::element("expr_stmt", body))
}

/// Augmented assignment: target, the compound operator resolved through
/// the lexicon, value; the source grammar allows exactly one target
fn emit_aug_assign(node: &AugAssign) -> Result<Fragment, ConvertError> {
    let mut body = emit_expr(&node.target)?;
    body.append(operator_element(binary_operator(node.op)));
    body.append(emit_expr(&node.value)?);
    Ok(Fragment::element("expr_stmt", body))
}

fn emit_return(node: &Return) -> Result<Fragment, ConvertError> {
    let mut body = Fragment::text("return");
    if let Some(value) = &node.value {
        body.append(emit_expr(value)?);
    }
    Ok(Fragment::element("return", body))
}

/// One uniform failure for a trailing else-clause on either loop form
fn loop_else_error(node: &impl fmt::Debug) -> ConvertError {
    ConvertError::unsupported("trailing else-clause on loop", node)
}

/// For-each loop: declaration of the target, `in`, and the iterable
/// inside the control header, then the body block
fn emit_for(node: &For) -> Result<Fragment, ConvertError> {
    if !node.orelse.is_empty() {
        return Err(loop_else_error(node));
    }
    let mut range = Fragment::text("in ");
    range.append(emit_expr(&node.iter)?);
    let mut decl = emit_expr(&node.target)?;
    decl.append(Fragment::text(" "));
    decl.append(Fragment::element("range", range));
    let control = Fragment::element(
        "control",
        Fragment::element("init", Fragment::element("decl", decl)),
    );
    let mut body = Fragment::text("for ");
    body.append(control);
    body.append(emit_block(&node.body)?);
    Ok(Fragment::element("for", body))
}

/// Conditional loop: the test inside a condition element, then the body
/// block
fn emit_while(node: &While) -> Result<Fragment, ConvertError> {
    if !node.orelse.is_empty() {
        return Err(loop_else_error(node));
    }
    let mut body = Fragment::text("while ");
    body.append(Fragment::element("condition", emit_expr(&node.test)?));
    body.append(emit_block(&node.body)?);
    Ok(Fragment::element("while", body))
}

/// Conditional statement, recursively: an else-clause holding exactly one
/// nested conditional is an `elif` variant, anything else is a literal
/// else-block; the `<if_stmt>` wrapper closes only at the outermost level
fn emit_if(node: &If, is_elseif: bool) -> Result<Fragment, ConvertError> {
    let mut inner = Fragment::text(if is_elseif { "elif " } else { "if " });
    inner.append(Fragment::element("condition", emit_expr(&node.test)?));
    inner.append(emit_block(&node.body)?);
    let mut out = Fragment::element(
        if is_elseif { "if type=\"elseif\"" } else { "if" },
        inner,
    );
    match node.orelse.as_slice() {
        [] => {}
        [Stmt::If(elif)] => out.append(emit_if(elif, true)?),
        orelse => {
            let mut else_body = Fragment::text("else ");
            else_body.append(emit_block(orelse)?);
            out.append(Fragment::element("else", else_body));
        }
    }
    if is_elseif {
        Ok(out)
    } else {
        Ok(Fragment::element("if_stmt", out))
    }
}

/// `@decorator` annotation element preceding a definition
fn emit_annotation(decorator: &Expr) -> Result<Fragment, ConvertError> {
    let mut body = Fragment::text("@");
    body.append(emit_name(decorator)?);
    Ok(Fragment::element("annotation", body))
}

/// Function definition: decorator annotations, optional return type,
/// name, parameter list, body block
fn emit_function_def(node: &FunctionDef) -> Result<Fragment, ConvertError> {
    let mut out = Fragment::new();
    for decorator in &node.decorators {
        out.append(emit_annotation(decorator)?);
    }
    let mut body = match &node.returns {
        Some(returns) => Fragment::element("type", emit_expr(returns)?),
        None => Fragment::new(),
    };
    body.append(form([
        (Some("name"), Fragment::text(&node.name)),
        (Some("parameter_list"), emit_params(&node.params)?),
    ]));
    body.append(emit_block(&node.body)?);
    out.append(Fragment::element("function", body));
    Ok(out)
}

/// Class definition: decorator annotations, name, parenthesized
/// super-list (only when at least one base exists), body block, all
/// inside the class element
fn emit_class_def(node: &ClassDef) -> Result<Fragment, ConvertError> {
    let mut body = Fragment::new();
    for decorator in &node.decorators {
        body.append(emit_annotation(decorator)?);
    }
    body.append(Fragment::text("class"));
    body.append(Fragment::element("name", Fragment::text(&node.name)));
    body.append(Fragment::text("("));
    if !node.bases.is_empty() {
        let mut supers = Fragment::new();
        for base in &node.bases {
            supers.append(Fragment::element("super", emit_name(base)?));
        }
        body.append(Fragment::element("super_list", supers));
    }
    body.append(Fragment::text(")"));
    body.append(emit_block(&node.body)?);
    Ok(Fragment::element("class", body))
}

/// `raise`, the raised expression if present, and an explicit cause
/// clause if present
fn emit_raise(node: &Raise) -> Result<Fragment, ConvertError> {
    let mut body = Fragment::text("raise");
    if let Some(exc) = &node.exc {
        body.append(emit_expr(exc)?);
    }
    if let Some(cause) = &node.cause {
        body.append(Fragment::element("name", Fragment::text("from")));
        body.append(emit_expr(cause)?);
    }
    Ok(Fragment::element("throw", body))
}

/// Try statement: body block, catch clauses, then else/finally only when
/// non-empty
fn emit_try(node: &Try) -> Result<Fragment, ConvertError> {
    let mut body = Fragment::text("try");
    body.append(emit_block(&node.body)?);
    for handler in &node.handlers {
        let mut clause = Fragment::text("except");
        if let Some(exception) = &handler.exception {
            clause.append(emit_expr(exception)?);
        }
        if let Some(name) = &handler.name {
            clause.append(Fragment::element("name", Fragment::text(name)));
        }
        clause.append(emit_block(&handler.body)?);
        body.append(Fragment::element("catch", clause));
    }
    body.append(form([
        (
            (!node.orelse.is_empty()).then_some("else"),
            emit_block(&node.orelse)?,
        ),
        (
            (!node.finalbody.is_empty()).then_some("finally"),
            emit_block(&node.finalbody)?,
        ),
    ]));
    Ok(Fragment::element("try", body))
}

fn emit_assert(node: &Assert) -> Result<Fragment, ConvertError> {
    let mut body = emit_expr(&node.test)?;
    if let Some(msg) = &node.msg {
        body.append(operator_element(","));
        body.append(emit_expr(msg)?);
    }
    Ok(Fragment::element("assert", body))
}

/// One include element per imported name
fn emit_import(node: &Import) -> Result<Fragment, ConvertError> {
    let mut out = Fragment::new();
    for name in &node.names {
        let mut body = Fragment::text("import ");
        body.append(Fragment::element("file", Fragment::text(name)));
        out.append(Fragment::element("include", body));
    }
    Ok(out)
}

/// One include element per imported name, each tagging the source module
fn emit_import_from(node: &ImportFrom) -> Result<Fragment, ConvertError> {
    let file = Fragment::element("file", Fragment::text(&node.module));
    let mut out = Fragment::new();
    for name in &node.names {
        let mut body = Fragment::text(format!("import {}", name));
        body.append(file.clone());
        out.append(Fragment::element("include", body));
    }
    Ok(out)
}

/// Scope declaration (`global`/`nonlocal`): the first declared name
/// carries the full specifier type, later names reference it; names are
/// joined with comma operators, never with a trailing separator
fn emit_declaration(specifier: &str, names: &[String]) -> Result<Fragment, ConvertError> {
    let mut decls = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let mut decl = if i == 0 {
            Fragment::element(
                "type",
                Fragment::element("specifier", Fragment::text(specifier)),
            )
        } else {
            Fragment::empty_element("type ref=\"prev\"")
        };
        decl.append(Fragment::element("name", Fragment::text(name)));
        decls.push(Fragment::element("decl", decl));
    }
    Ok(Fragment::element(
        "decl_stmt",
        Fragment::join(decls, &operator_element(",")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcml_ast::{BinOp, BinaryOperator, ExceptHandler, Global};

    fn pass_block() -> Vec<Stmt> {
        vec![Stmt::Pass]
    }

    #[test]
    fn empty_block_keeps_an_empty_content_container() {
        let frag = emit_block(&[]).unwrap();
        assert_eq!(frag.as_str(), "<block>:<block_content></block_content></block>");
    }

    #[test]
    fn assignment_emits_target_operator_value() {
        let node = Assign::new(
            Expr::name("x"),
            BinOp::new(Expr::number("1"), BinaryOperator::Add, Expr::number("2")).into(),
        );
        let frag = emit_stmt(&node.into()).unwrap();
        assert_eq!(
            frag.as_str(),
            "<expr_stmt><name>x</name><operator>=</operator><expr>\
             <literal type=\"number\">1</literal><operator>+</operator>\
             <literal type=\"number\">2</literal></expr></expr_stmt>"
        );
    }

    #[test]
    fn multi_target_assignment_is_unsupported() {
        let node = Assign {
            targets: vec![Expr::name("a"), Expr::name("b")],
            value: Expr::name("c"),
        };
        let err = emit_stmt(&node.into()).unwrap_err();
        assert!(err.to_string().contains("multi-target assignment"));
    }

    #[test]
    fn augmented_assignment_resolves_the_compound_operator() {
        let node = AugAssign {
            target: Expr::name("i"),
            op: BinaryOperator::Add,
            value: Expr::number("1"),
        };
        let frag = emit_stmt(&Stmt::AugAssign(node)).unwrap();
        assert_eq!(
            frag.as_str(),
            "<expr_stmt><name>i</name><operator>+</operator>\
             <literal type=\"number\">1</literal></expr_stmt>"
        );
    }

    #[test]
    fn single_clause_if_has_no_else_element() {
        let node = If::new(Expr::name("a"), pass_block());
        let frag = emit_stmt(&node.into()).unwrap();
        assert_eq!(
            frag.as_str(),
            "<if_stmt><if>if <condition><name>a</name></condition>\
             <block>:<block_content><empty_stmt>pass</empty_stmt></block_content></block>\
             </if></if_stmt>"
        );
    }

    #[test]
    fn elif_chain_nests_elseif_variants_with_one_literal_else() {
        let mut elif = If::new(Expr::name("b"), pass_block());
        elif.orelse = pass_block();
        let mut node = If::new(Expr::name("a"), pass_block());
        node.orelse = vec![elif.into()];
        let out = emit_stmt(&node.into()).unwrap();
        let out = out.as_str();
        assert_eq!(out.matches("<if_stmt>").count(), 1);
        assert!(out.contains("<if type=\"elseif\">elif <condition><name>b</name></condition>"));
        assert_eq!(out.matches("<else>else ").count(), 1);
        assert!(out.ends_with("</else></if_stmt>"));
    }

    #[test]
    fn loop_else_raises_one_uniform_error_for_both_loops() {
        let mut for_loop = For::new(Expr::name("i"), Expr::name("xs"), pass_block());
        for_loop.orelse = pass_block();
        let mut while_loop = While::new(Expr::name("a"), pass_block());
        while_loop.orelse = pass_block();
        let for_err = emit_stmt(&for_loop.into()).unwrap_err();
        let while_err = emit_stmt(&while_loop.into()).unwrap_err();
        assert!(for_err.to_string().contains("trailing else-clause on loop"));
        assert!(while_err.to_string().contains("trailing else-clause on loop"));
    }

    #[test]
    fn try_except_binds_type_and_name_before_the_handler_block() {
        let node = Try {
            body: pass_block(),
            handlers: vec![ExceptHandler {
                exception: Some(Expr::name("ValueError")),
                name: Some("e".to_string()),
                body: pass_block(),
            }],
            orelse: Vec::new(),
            finalbody: Vec::new(),
        };
        let frag = emit_stmt(&Stmt::Try(node)).unwrap();
        assert_eq!(
            frag.as_str(),
            "<try>try<block>:<block_content><empty_stmt>pass</empty_stmt>\
             </block_content></block><catch>except<name>ValueError</name><name>e</name>\
             <block>:<block_content><empty_stmt>pass</empty_stmt></block_content></block>\
             </catch></try>"
        );
    }

    #[test]
    fn import_from_tags_the_module_onto_every_name() {
        let node = ImportFrom {
            module: "m".to_string(),
            names: vec!["a".to_string(), "b".to_string()],
        };
        let frag = emit_stmt(&Stmt::ImportFrom(node)).unwrap();
        assert_eq!(
            frag.as_str(),
            "<include>import a<file>m</file></include>\
             <include>import b<file>m</file></include>"
        );
    }

    #[test]
    fn declaration_list_has_no_trailing_separator() {
        let node = Global {
            names: vec!["x".to_string(), "y".to_string()],
        };
        let frag = emit_stmt(&Stmt::Global(node)).unwrap();
        assert_eq!(
            frag.as_str(),
            "<decl_stmt><decl><type><specifier>global</specifier></type><name>x</name></decl>\
             <operator>,</operator>\
             <decl><type ref=\"prev\"/><name>y</name></decl></decl_stmt>"
        );
    }

    #[test]
    fn function_def_orders_type_name_parameters_body() {
        let mut node = FunctionDef::new(
            "f",
            vec![srcml_ast::Param::with_annotation("a", Expr::name("int"))],
            vec![Stmt::Return(Return {
                value: Some(Expr::name("a")),
            })],
        );
        node.returns = Some(Expr::name("str"));
        let frag = emit_stmt(&node.into()).unwrap();
        assert_eq!(
            frag.as_str(),
            "<function><type><name>str</name></type><name>f</name>\
             <parameter_list>(<parameter><decl><type><name>int</name></type>\
             <name>a</name></decl></parameter>)</parameter_list>\
             <block>:<block_content><return>return<name>a</name></return>\
             </block_content></block></function>"
        );
    }

    #[test]
    fn decorated_class_with_base_emits_annotation_and_super_list() {
        let mut node = ClassDef::new("Foo", vec![Expr::name("Base")], pass_block());
        node.decorators = vec![Expr::name("register")];
        let frag = emit_stmt(&node.into()).unwrap();
        assert_eq!(
            frag.as_str(),
            "<class><annotation>@<name>register</name></annotation>\
             class<name>Foo</name>(<super_list><super><name>Base</name></super>\
             </super_list>)<block>:<block_content><empty_stmt>pass</empty_stmt>\
             </block_content></block></class>"
        );
    }

    #[test]
    fn class_without_bases_has_no_super_list() {
        let node = ClassDef::new("Foo", Vec::new(), pass_block());
        let frag = emit_stmt(&node.into()).unwrap();
        assert!(frag.as_str().contains("<name>Foo</name>()"));
        assert!(!frag.as_str().contains("super_list"));
    }

    #[test]
    fn raise_with_cause_adds_a_from_clause() {
        let node = Raise {
            exc: Some(Expr::name("Error")),
            cause: Some(Expr::name("inner")),
        };
        let frag = emit_stmt(&Stmt::Raise(node)).unwrap();
        assert_eq!(
            frag.as_str(),
            "<throw>raise<name>Error</name><name>from</name><name>inner</name></throw>"
        );
    }

    #[test]
    fn context_management_block_is_unsupported() {
        let node = srcml_ast::With {
            items: Vec::new(),
            body: pass_block(),
        };
        assert!(emit_stmt(&Stmt::With(node)).is_err());
    }
}
