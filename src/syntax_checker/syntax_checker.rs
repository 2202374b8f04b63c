use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{declaration_at, Token},
};

/// Counters gathered in one sweep over the stream. Matching is on token text,
/// so a string literal spelling `{` or `main` counts too.
#[derive(Debug, Default)]
struct Structure {
    has_main: bool,
    has_open_brace: bool,
    has_close_brace: bool,
    brace_count: i64,
    paren_count: i64,
}

impl Structure {
    fn scan(tokens: &[Token]) -> Self {
        let mut structure = Structure::default();

        for token in tokens {
            match token.value.as_str() {
                "main" => structure.has_main = true,
                "{" => {
                    structure.has_open_brace = true;
                    structure.brace_count += 1;
                }
                "}" => {
                    structure.has_close_brace = true;
                    structure.brace_count -= 1;
                }
                "(" => structure.paren_count += 1,
                ")" => structure.paren_count -= 1,
                _ => {}
            }
        }

        structure
    }
}

/// Returns the first type keyword that is not directly followed by an
/// identifier, as an `IncorrectDeclarations` diagnostic.
fn check_declarations(tokens: &[Token]) -> Option<Error> {
    (0..tokens.len()).find_map(|index| {
        let (_, name) = declaration_at(tokens, index)?;

        match name {
            Some(name) if name.is_identifier() => None,
            _ => Some(Error::new(
                ErrorImpl::IncorrectDeclarations {
                    found: name.map(|token| token.value.clone()),
                },
                tokens[index].position,
            )),
        }
    })
}

/// Runs every structural check and returns `(valid, errors)`; `valid` is true
/// iff `errors` is empty.
pub fn check_syntax(tokens: &[Token]) -> (bool, Vec<Error>) {
    let mut errors = vec![];
    let structure = Structure::scan(tokens);

    if !structure.has_main {
        errors.push(Error::without_position(ErrorImpl::MissingMain));
    }

    if !structure.has_open_brace || !structure.has_close_brace {
        errors.push(Error::without_position(ErrorImpl::MissingBraces));
    }

    if structure.brace_count != 0 {
        errors.push(Error::without_position(ErrorImpl::UnbalancedBraces));
    }

    if structure.paren_count != 0 {
        errors.push(Error::without_position(ErrorImpl::UnbalancedParentheses));
    }

    if let Some(error) = check_declarations(tokens) {
        errors.push(error);
    }

    debug!("syntax check found {} errors", errors.len());

    (errors.is_empty(), errors)
}
