use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::{
    errors::errors::Error,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    syntax_checker::syntax_checker::check_syntax,
    type_checker::type_checker::check_semantics,
};

/// Everything one analysis run produces. Both error lists are always present;
/// each validity flag is true iff its list is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub tokens: Vec<Token>,
    pub token_stats: BTreeMap<TokenKind, usize>,
    pub syntax_errors: Vec<Error>,
    pub semantic_errors: Vec<Error>,
    pub syntax_valid: bool,
    pub semantic_valid: bool,
}

impl AnalysisResult {
    pub fn is_valid(&self) -> bool {
        self.syntax_valid && self.semantic_valid
    }
}

/// Number of tokens of each kind; kinds that never occur are absent.
pub fn token_stats(tokens: &[Token]) -> BTreeMap<TokenKind, usize> {
    let mut stats = BTreeMap::new();

    for token in tokens {
        *stats.entry(token.kind).or_insert(0) += 1;
    }

    stats
}

pub fn analyze(source: &str) -> AnalysisResult {
    let tokens = tokenize(source);
    let token_stats = token_stats(&tokens);

    let (syntax_valid, syntax_errors) = check_syntax(&tokens);
    let (semantic_valid, semantic_errors) = check_semantics(&tokens);

    debug!(
        "analysis finished: syntax={}, semantic={}",
        syntax_valid, semantic_valid
    );

    AnalysisResult {
        tokens,
        token_stats,
        syntax_errors,
        semantic_errors,
        syntax_valid,
        semantic_valid,
    }
}
