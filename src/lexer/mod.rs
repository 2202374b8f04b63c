//! Lexical analysis module.
//!
//! Converts source text into a flat token stream. It handles:
//!
//! - Pattern-driven scanning with a fixed, ordered regex table
//! - Recognition of type keywords, control keywords, identifiers, literals and operators
//! - Line/column tracking for every token
//! - Silent skipping of characters no pattern recognises

pub mod lexer;
pub mod tokens;
