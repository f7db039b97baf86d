//! Operator lexicon
//!
//! Maps each operator kind to its literal spelling. Shift and
//! bitwise-and spellings use escaped entities since their characters
//! collide with markup syntax. The matches are exhaustive over the
//! closed operator enums, so an operator without a spelling cannot
//! compile in the first place.

use srcml_ast::{BinaryOperator, BooleanOperator, CompareOperator, UnaryOperator};

use crate::xml::Fragment;

/// Spelling of a binary arithmetic or bitwise operator
pub fn binary_operator(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "+",
        BinaryOperator::Sub => "-",
        BinaryOperator::Mult => "*",
        BinaryOperator::MatMult => "@",
        BinaryOperator::Div => "/",
        BinaryOperator::Mod => "%",
        BinaryOperator::Pow => "**",
        BinaryOperator::LShift => "&lt;&lt;",
        BinaryOperator::RShift => "&gt;&gt;",
        BinaryOperator::BitOr => "|",
        BinaryOperator::BitXor => "^",
        BinaryOperator::BitAnd => "&amp;",
        BinaryOperator::FloorDiv => "//",
    }
}

/// Spelling of a unary operator
pub fn unary_operator(op: UnaryOperator) -> &'static str {
    match op {
        UnaryOperator::Invert => "~",
        UnaryOperator::Not => "not",
        UnaryOperator::UAdd => "+",
        UnaryOperator::USub => "-",
    }
}

/// Spelling of a boolean connective
pub fn boolean_operator(op: BooleanOperator) -> &'static str {
    match op {
        BooleanOperator::And => "and",
        BooleanOperator::Or => "or",
    }
}

/// Spelling of a comparison operator
pub fn compare_operator(op: CompareOperator) -> &'static str {
    match op {
        CompareOperator::Eq => "==",
        CompareOperator::NotEq => "!=",
        CompareOperator::Lt => "&lt;",
        CompareOperator::LtE => "&lt;=",
        CompareOperator::Gt => "&gt;",
        CompareOperator::GtE => "&gt;=",
        CompareOperator::Is => "is",
        CompareOperator::IsNot => "is not",
        CompareOperator::In => "in",
        CompareOperator::NotIn => "not in",
    }
}

/// Wraps a spelling as an `<operator>` element
pub fn operator_element(spelling: &str) -> Fragment {
    Fragment::element("operator", Fragment::text(spelling))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BinaryOperator::Add, "+")]
    #[case(BinaryOperator::Pow, "**")]
    #[case(BinaryOperator::FloorDiv, "//")]
    #[case(BinaryOperator::LShift, "&lt;&lt;")]
    #[case(BinaryOperator::RShift, "&gt;&gt;")]
    #[case(BinaryOperator::BitAnd, "&amp;")]
    fn binary_spellings(#[case] op: BinaryOperator, #[case] expected: &str) {
        assert_eq!(binary_operator(op), expected);
    }

    #[rstest]
    #[case(CompareOperator::Lt, "&lt;")]
    #[case(CompareOperator::GtE, "&gt;=")]
    #[case(CompareOperator::IsNot, "is not")]
    #[case(CompareOperator::NotIn, "not in")]
    fn compare_spellings(#[case] op: CompareOperator, #[case] expected: &str) {
        assert_eq!(compare_operator(op), expected);
    }

    #[test]
    fn operator_element_wraps_the_spelling() {
        assert_eq!(operator_element("and").as_str(), "<operator>and</operator>");
    }
}
