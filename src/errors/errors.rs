use std::fmt::Display;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{
    lexer::tokens::{DataType, TokenKind},
    Position,
};

/// A diagnostic about the analysed source. Produced by the syntax and
/// semantic checkers; never a failure of the analyser itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// For whole-program findings such as unbalanced braces.
    pub fn without_position(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_syntax(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::MissingMain
                | ErrorImpl::MissingBraces
                | ErrorImpl::UnbalancedBraces
                | ErrorImpl::UnbalancedParentheses
                | ErrorImpl::IncorrectDeclarations { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MissingMain => "MissingMain",
            ErrorImpl::MissingBraces => "MissingBraces",
            ErrorImpl::UnbalancedBraces => "UnbalancedBraces",
            ErrorImpl::UnbalancedParentheses => "UnbalancedParentheses",
            ErrorImpl::IncorrectDeclarations { .. } => "IncorrectDeclarations",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::IncompatibleAssignment { .. } => "IncompatibleAssignment",
            ErrorImpl::MissingReturn => "MissingReturn",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MissingMain => ErrorTip::Suggestion(String::from(
                "Programs start at `main`, e.g. `int main() { ... }`",
            )),
            ErrorImpl::MissingBraces => ErrorTip::Suggestion(String::from(
                "Function bodies are wrapped in `{` and `}`",
            )),
            ErrorImpl::UnbalancedBraces => {
                ErrorTip::Suggestion(String::from("Every `{` needs a matching `}`"))
            }
            ErrorImpl::UnbalancedParentheses => {
                ErrorTip::Suggestion(String::from("Every `(` needs a matching `)`"))
            }
            ErrorImpl::IncorrectDeclarations { found: Some(found) } => ErrorTip::Suggestion(
                format!("Expected a variable name after the type, found `{}`", found),
            ),
            ErrorImpl::IncorrectDeclarations { found: None } => ErrorTip::Suggestion(
                String::from("Expected a variable name after the type, found end of input"),
            ),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` with a type before its first use, e.g. `int {};`",
                variable, variable
            )),
            ErrorImpl::IncompatibleAssignment {
                variable,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` is declared as `{}` but is assigned a {} value",
                variable, expected, received
            )),
            ErrorImpl::MissingReturn => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Structural
    #[error("Missing 'main' function")]
    MissingMain,
    #[error("Missing opening or closing braces")]
    MissingBraces,
    #[error("Unbalanced braces")]
    UnbalancedBraces,
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Incorrect variable declarations")]
    IncorrectDeclarations { found: Option<String> },

    // Semantic
    #[error("Variable '{variable}' used without declaration")]
    VariableNotDeclared { variable: String },
    #[error("Incompatible assignment for variable '{variable}'")]
    IncompatibleAssignment {
        variable: String,
        expected: DataType,
        received: TokenKind,
    },
    #[error("Function 'main' should have a 'return' statement")]
    MissingReturn,
}

/// Rejections of an analysis request before any source reaches the checkers.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("invalid JSON request: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("request has no `code` field")]
    MissingCode,
}
