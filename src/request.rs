//! Decoding of analysis requests.
//!
//! A request is a JSON object carrying the snippet under `code`:
//!
//! ```json
//! { "code": "int main() { return 0; }" }
//! ```
//!
//! Anything else is rejected before the source reaches the pipeline.

use serde::Deserialize;

use crate::errors::errors::RequestError;

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    code: Option<String>,
}

pub fn decode_request(body: &str) -> Result<String, RequestError> {
    let request: AnalyzeRequest = serde_json::from_str(body)?;

    request.code.ok_or(RequestError::MissingCode)
}

/// Turns raw input bytes into source text. Bytes that are not valid UTF-8
/// become U+FFFD, which the scanner then skips like any other unrecognised
/// character.
pub fn decode_source(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
