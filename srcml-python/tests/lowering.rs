//! Lowering tests: Python source in, tree model out

use srcml_ast::{Expr, Literal, Stmt};
use srcml_python::{parse_module, FrontendError};

#[test]
fn assignment_lowers_to_a_single_target_assign() {
    let module = parse_module("x = 1 + 2\n", "t.py").unwrap();
    assert_eq!(module.len(), 1);
    match &module[0] {
        Stmt::Assign(assign) => {
            assert_eq!(assign.targets, vec![Expr::name("x")]);
            match &assign.value {
                Expr::BinOp(binop) => {
                    assert_eq!(*binop.left, Expr::number("1"));
                    assert_eq!(*binop.right, Expr::number("2"));
                }
                other => panic!("expected a binary operation, got {:?}", other),
            }
        }
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn for_loop_lowers_target_iterable_and_body() {
    let module = parse_module("for i in range(3):\n    pass\n", "t.py").unwrap();
    match &module[0] {
        Stmt::For(node) => {
            assert_eq!(node.target, Expr::name("i"));
            assert!(matches!(node.iter, Expr::Call(_)));
            assert_eq!(node.body, vec![Stmt::Pass]);
            assert!(node.orelse.is_empty());
        }
        other => panic!("expected a for loop, got {:?}", other),
    }
}

#[test]
fn literal_kinds_keep_their_token_text() {
    let module = parse_module("a = 1\nb = 2.5\nc = 'hi'\nd = True\ne = None\n", "t.py").unwrap();
    let literals: Vec<&Literal> = module
        .iter()
        .map(|stmt| match stmt {
            Stmt::Assign(assign) => match &assign.value {
                Expr::Constant(constant) => &constant.value,
                other => panic!("expected a constant, got {:?}", other),
            },
            other => panic!("expected an assignment, got {:?}", other),
        })
        .collect();
    assert_eq!(literals[0], &Literal::Number("1".to_string()));
    assert_eq!(literals[1], &Literal::Number("2.5".to_string()));
    assert_eq!(literals[2], &Literal::Str("hi".to_string()));
    assert_eq!(literals[3], &Literal::Bool(true));
    assert_eq!(literals[4], &Literal::None);
}

#[test]
fn async_definitions_lower_into_the_model() {
    let module = parse_module("async def f():\n    pass\n", "t.py").unwrap();
    assert!(matches!(module[0], Stmt::AsyncFunctionDef(_)));
}

#[test]
fn elif_arrives_as_a_nested_conditional() {
    let module = parse_module(
        "if a:\n    pass\nelif b:\n    pass\nelse:\n    pass\n",
        "t.py",
    )
    .unwrap();
    match &module[0] {
        Stmt::If(node) => match node.orelse.as_slice() {
            [Stmt::If(elif)] => assert_eq!(elif.orelse, vec![Stmt::Pass]),
            other => panic!("expected a nested conditional, got {:?}", other),
        },
        other => panic!("expected a conditional, got {:?}", other),
    }
}

#[test]
fn syntax_errors_surface_as_parse_failures() {
    let err = parse_module("def f(:\n", "broken.py").unwrap_err();
    match err {
        FrontendError::Parse { path, .. } => assert_eq!(path, "broken.py"),
        other => panic!("expected a parse failure, got {:?}", other),
    }
}

#[test]
fn parameter_defaults_fail_loudly() {
    let err = parse_module("def f(a=1):\n    pass\n", "t.py").unwrap_err();
    assert!(err.to_string().contains("parameter form"));
}

#[test]
fn relative_imports_fail_loudly() {
    let err = parse_module("from . import x\n", "t.py").unwrap_err();
    assert!(err.to_string().contains("relative import"));
}

#[test]
fn match_statements_have_no_model_counterpart() {
    let err = parse_module("match x:\n    case _:\n        pass\n", "t.py").unwrap_err();
    assert!(err.to_string().contains("statement kind"));
}

#[test]
fn import_aliases_are_ignored() {
    let module = parse_module("import os.path as p\n", "t.py").unwrap();
    match &module[0] {
        Stmt::Import(node) => assert_eq!(node.names, vec!["os.path".to_string()]),
        other => panic!("expected an import, got {:?}", other),
    }
}
