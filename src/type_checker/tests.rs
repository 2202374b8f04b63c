//! Unit tests for the semantic checker.

use crate::errors::errors::ErrorImpl;
use crate::lexer::{
    lexer::tokenize,
    tokens::{DataType, TokenKind},
};
use crate::Position;

use super::{
    symbol_table::SymbolTable,
    type_checker::{check_semantics, type_check},
};

fn semantic_errors(source: &str) -> Vec<ErrorImpl> {
    let (valid, errors) = check_semantics(&tokenize(source));
    assert_eq!(valid, errors.is_empty());

    errors
        .iter()
        .map(|error| error.get_error_impl().clone())
        .collect()
}

fn not_declared(variable: &str) -> ErrorImpl {
    ErrorImpl::VariableNotDeclared {
        variable: variable.to_string(),
    }
}

#[test]
fn test_use_before_declaration() {
    assert_eq!(
        semantic_errors("x = 1; int x;"),
        vec![not_declared("x"), ErrorImpl::MissingReturn]
    );
}

#[test]
fn test_use_after_declaration() {
    assert_eq!(
        semantic_errors("int x; x = 1;"),
        vec![ErrorImpl::MissingReturn]
    );
}

#[test]
fn test_every_use_is_reported() {
    let tokens = tokenize("int main() {\n  y = 1;\n  y = 2;\n  return 0;\n}");
    let (valid, errors) = check_semantics(&tokens);

    assert!(!valid);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_position(), Some(&Position { line: 2, column: 3 }));
    assert_eq!(errors[1].get_position(), Some(&Position { line: 3, column: 3 }));
}

#[test]
fn test_main_is_never_undeclared() {
    assert!(semantic_errors("void main(){ return; }").is_empty());
}

#[test]
fn test_redeclaration_rebinds() {
    assert!(semantic_errors("int x; string x; x = \"a\"; return x;").is_empty());
}

#[test]
fn test_incompatible_int_assignment() {
    let tokens = tokenize("int main(){ int a; a = 1.5; return 0; }");
    let (valid, errors) = check_semantics(&tokens);

    assert!(!valid);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_error_impl(),
        &ErrorImpl::IncompatibleAssignment {
            variable: "a".to_string(),
            expected: DataType::Int,
            received: TokenKind::Float,
        }
    );
    assert_eq!(errors[0].get_position(), Some(&Position { line: 1, column: 22 }));
}

#[test]
fn test_compatible_assignments() {
    let source = "int main(){\n\
        int i; i = 1;\n\
        float f; f = 3; f = 2.5;\n\
        double d; d = 4; d = .5;\n\
        string s; s = \"text\"; s = 't';\n\
        char c; c = 'c';\n\
        bool b; b = 1; b = x1;\n\
        void v; v = \"anything\";\n\
        return 0;\n}";

    assert_eq!(semantic_errors(source), vec![not_declared("x1")]);
}

#[test]
fn test_incompatible_assignments() {
    let source = "int main(){ char c; c = 5; string s; s = 1.0; double d; d = \"1\"; return 0; }";

    let variables: Vec<String> = semantic_errors(source)
        .into_iter()
        .map(|error| match error {
            ErrorImpl::IncompatibleAssignment { variable, .. } => variable,
            other => panic!("unexpected diagnostic {:?}", other),
        })
        .collect();
    assert_eq!(variables, vec!["c", "s", "d"]);
}

#[test]
fn test_identifier_on_right_side_is_incompatible() {
    assert_eq!(
        semantic_errors("int main(){ int a; int b; a = b; return a; }"),
        vec![ErrorImpl::IncompatibleAssignment {
            variable: "a".to_string(),
            expected: DataType::Int,
            received: TokenKind::Identifier,
        }]
    );
}

#[test]
fn test_assignment_uses_later_declarations() {
    assert_eq!(
        semantic_errors("int main(){ x = \"a\"; int x; return 0; }"),
        vec![
            not_declared("x"),
            ErrorImpl::IncompatibleAssignment {
                variable: "x".to_string(),
                expected: DataType::Int,
                received: TokenKind::String,
            }
        ]
    );
}

#[test]
fn test_assignment_at_stream_edges() {
    assert_eq!(semantic_errors("= 1; return 0;"), vec![]);
    assert_eq!(semantic_errors("int x; x ="), vec![ErrorImpl::MissingReturn]);
}

#[test]
fn test_missing_return() {
    assert_eq!(
        semantic_errors("int main(){int x;}"),
        vec![ErrorImpl::MissingReturn]
    );
    assert!(semantic_errors("int main(){return 0;}").is_empty());
}

#[test]
fn test_return_is_required_even_for_void() {
    assert_eq!(
        semantic_errors("void main(){ }"),
        vec![ErrorImpl::MissingReturn]
    );
}

#[test]
fn test_type_keyword_at_end() {
    assert!(semantic_errors("return 0; int").is_empty());
}

#[test]
fn test_symbol_table_after_check() {
    let tokens = tokenize("int main(){ int a; float b; return 0; }");
    let type_checker = type_check(&tokens);

    assert_eq!(type_checker.environment.len(), 3);
    assert_eq!(type_checker.environment.get_variable("main"), Some(DataType::Int));
    assert_eq!(type_checker.environment.get_variable("b"), Some(DataType::Float));
    assert_eq!(type_checker.environment.get_variable("c"), None);
}

#[test]
fn test_symbol_table_declare() {
    let mut table = SymbolTable::new();
    assert!(table.is_empty());

    assert_eq!(table.declare_variable("x".to_string(), DataType::Int), None);
    assert_eq!(
        table.declare_variable("x".to_string(), DataType::Char),
        Some(DataType::Int)
    );
    assert!(table.is_declared("x"));
    assert_eq!(table.get_variable("x"), Some(DataType::Char));
    assert_eq!(table.len(), 1);
}
