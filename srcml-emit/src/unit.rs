//! Translation-unit driver
//!
//! Wraps the emission of one whole module in unit markers carrying the
//! source path. There is no partial output: any failure inside the
//! recursive emission aborts the unit and nothing is produced.

use srcml_ast::Stmt;

use crate::error::ConvertError;
use crate::stmt::emit_block;
use crate::xml::escape;

/// Converts one module body into a complete srcML document
pub fn convert_unit(path: &str, module: &[Stmt]) -> Result<String, ConvertError> {
    let block = emit_block(module)?;
    let path = escape(path);
    Ok(format!(
        "<unit language=\"Python\" filename=\"{}\">\n{}\n</unit> <!-- {} -->",
        path, block, path
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::is_balanced;
    use srcml_ast::{Assign, Expr};

    #[test]
    fn unit_markers_carry_the_source_path() {
        let module = vec![Stmt::Assign(Assign::new(Expr::name("x"), Expr::number("1")))];
        let out = convert_unit("t.py", &module).unwrap();
        assert!(out.starts_with("<unit language=\"Python\" filename=\"t.py\">\n"));
        assert!(out.ends_with("\n</unit> <!-- t.py -->"));
        assert!(is_balanced(&out));
    }

    #[test]
    fn empty_module_still_emits_a_well_formed_block() {
        let out = convert_unit("empty.py", &[]).unwrap();
        assert!(out.contains("<block>:<block_content></block_content></block>"));
    }

    #[test]
    fn failure_aborts_the_whole_unit() {
        let module = vec![
            Stmt::Assign(Assign::new(Expr::name("x"), Expr::number("1"))),
            Stmt::Delete(srcml_ast::Delete {
                targets: vec![Expr::name("x")],
            }),
        ];
        assert!(convert_unit("t.py", &module).is_err());
    }
}
