//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a scanner handler for fixed-text tokens

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a scanner handler for a punctuation or operator token.
///
/// The handler consumes the literal's bytes and emits a token of the given
/// kind.
///
/// ```ignore
/// RegexPattern::new(r"^\+\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _captures: &::regex::Captures| {
            lexer.advance_n($value.len());
            lexer.add_token($kind, $value);
        }
    };
}
