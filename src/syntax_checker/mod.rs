//! Structural (syntax) checking.
//!
//! Verifies coarse well-formedness of a token stream without building a tree:
//!
//! - An entry point named `main`
//! - Presence and balance of braces, balance of parentheses
//! - Every type keyword followed by a variable name

pub mod syntax_checker;
