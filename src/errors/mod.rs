//! Diagnostic types.
//!
//! This module defines:
//!
//! - `Error`, a diagnostic about the analysed source with an optional position
//! - `ErrorImpl`, the structural and semantic diagnostic kinds
//! - `ErrorTip`, a short suggestion shown next to a diagnostic
//! - `RequestError`, rejections of malformed analysis requests

pub mod errors;
