use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{declaration_at, Token, TokenKind},
};

use super::symbol_table::SymbolTable;

#[derive(Debug)]
pub struct TypeChecker<'t> {
    tokens: &'t [Token],
    pub environment: SymbolTable,
    pub errors: Vec<Error>,
}

impl<'t> TypeChecker<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        TypeChecker {
            tokens,
            environment: SymbolTable::new(),
            errors: vec![],
        }
    }

    /// Declarations and uses in one forward scan. A name only counts as
    /// declared once its declaration has been passed, so forward references
    /// are reported.
    pub fn check_declarations(&mut self) {
        for (index, token) in self.tokens.iter().enumerate() {
            if let Some((data_type, name)) = declaration_at(self.tokens, index) {
                if let Some(name) = name {
                    if let Some(previous) = self
                        .environment
                        .declare_variable(name.value.clone(), data_type)
                    {
                        trace!("`{}` rebound from {} to {}", name.value, previous, data_type);
                    }
                }
            } else if token.is_identifier()
                && token.value != "main"
                && !self.environment.is_declared(&token.value)
            {
                self.errors.push(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: token.value.clone(),
                    },
                    token.position,
                ));
            }
        }
    }

    /// Checks `name = value` against the declared type of `name`, using every
    /// declaration in the program. Only the single token after `=` is looked at.
    pub fn check_assignments(&mut self) {
        for index in 1..self.tokens.len().saturating_sub(1) {
            let operator = &self.tokens[index];
            if operator.kind != TokenKind::Assignment {
                continue;
            }

            let assignee = &self.tokens[index - 1];
            let value = &self.tokens[index + 1];

            if let Some(expected) = self.environment.get_variable(&assignee.value) {
                if !expected.accepts(value.kind) {
                    self.errors.push(Error::new(
                        ErrorImpl::IncompatibleAssignment {
                            variable: assignee.value.clone(),
                            expected,
                            received: value.kind,
                        },
                        operator.position,
                    ));
                }
            }
        }
    }

    /// Any `return` anywhere satisfies this; the return type is not consulted.
    pub fn check_return(&mut self) {
        if !self.tokens.iter().any(|token| token.value == "return") {
            self.errors
                .push(Error::without_position(ErrorImpl::MissingReturn));
        }
    }
}

pub fn type_check(tokens: &[Token]) -> TypeChecker<'_> {
    let mut type_checker = TypeChecker::new(tokens);

    type_checker.check_declarations();
    type_checker.check_assignments();
    type_checker.check_return();

    debug!(
        "semantic check: {} symbols declared, {} errors",
        type_checker.environment.len(),
        type_checker.errors.len()
    );

    type_checker
}

/// Runs every semantic check and returns `(valid, errors)`; `valid` is true
/// iff `errors` is empty.
pub fn check_semantics(tokens: &[Token]) -> (bool, Vec<Error>) {
    let errors = type_check(tokens).errors;

    (errors.is_empty(), errors)
}
