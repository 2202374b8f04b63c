//! Semantic analysis module.
//!
//! Re-scans the token stream linearly with a flat symbol table:
//!
//! - Detecting variables used before a declaration has been seen
//! - Checking literal assignments against the declared type
//! - Requiring a `return` somewhere in the program
//!
//! There are no scopes: a declaration anywhere binds its name for the rest
//! of the scan, and redeclaring a name rebinds it.

pub mod symbol_table;
pub mod type_checker;

#[cfg(test)]
mod tests;
