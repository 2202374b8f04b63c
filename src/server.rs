//! HTTP front end for the analysis pipeline.
//!
//! One route, `/analyze`:
//!
//! * `POST` with a `{"code": ...}` body answers `200` and the analysis result
//!   as JSON. A body the request decoder rejects answers `400`.
//! * `OPTIONS` answers `200` with an empty body (CORS preflight).
//! * Any other method answers `405`.
//!
//! Every `/analyze` reply carries the cross-origin headers so a browser page
//! served from another origin can call it. Other paths answer `404`.

use std::io::Read;

use log::{debug, info, warn};
use tiny_http::{Header, Method, Request, Response, Server};

use crate::{analyze, request::decode_request, request::decode_source};

pub const ANALYZE_PATH: &str = "/analyze";

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, GET, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
];

/// A routed reply, independent of the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl Reply {
    fn new(status: u16, content_type: &'static str, body: impl Into<String>) -> Self {
        Reply {
            status,
            headers: vec![("Content-Type", content_type)],
            body: body.into(),
        }
    }

    fn with_cors(mut self) -> Self {
        self.headers.extend(CORS_HEADERS);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// Routes one request. `url` may carry a query string, which is ignored.
pub fn route(method: &Method, url: &str, body: &[u8]) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    if path != ANALYZE_PATH {
        return Reply::new(404, "text/plain; charset=utf-8", "Not found\n");
    }

    let reply = match method {
        Method::Options => Reply::new(200, "text/plain; charset=utf-8", ""),
        Method::Post => analyze_body(body),
        _ => Reply::new(405, "text/plain; charset=utf-8", "Method not allowed\n"),
    };

    reply.with_cors()
}

fn analyze_body(body: &[u8]) -> Reply {
    let code = match decode_request(&decode_source(body)) {
        Ok(code) => code,
        Err(error) => {
            warn!("rejected request: {}", error);
            return Reply::new(400, "text/plain; charset=utf-8", format!("{}\n", error));
        }
    };

    info!("Analysing code:\n{}", code);
    let result = analyze(&code);
    info!(
        "Results: syntax={}, semantic={}",
        result.syntax_valid, result.semantic_valid
    );

    match serde_json::to_string(&result) {
        Ok(json) => Reply::new(200, "application/json", json),
        Err(error) => Reply::new(500, "text/plain; charset=utf-8", format!("{}\n", error)),
    }
}

/// Answers requests from `server` until it stops accepting connections.
pub fn run(server: Server) {
    for request in server.incoming_requests() {
        handle(request);
    }
}

/// Binds `addr` and serves until the process is stopped.
pub fn serve(addr: &str) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|error| anyhow::anyhow!("Failed to bind {}: {}", addr, error))?;
    info!("Server running on {}", addr);

    run(server);
    Ok(())
}

fn handle(mut request: Request) {
    let mut body = Vec::new();
    let reply = match request.as_reader().read_to_end(&mut body) {
        Ok(_) => route(request.method(), request.url(), &body),
        Err(error) => Reply::new(400, "text/plain; charset=utf-8", format!("{}\n", error)),
    };

    debug!("{} {} -> {}", request.method(), request.url(), reply.status);

    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    for (name, value) in reply.headers {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }

    if let Err(error) = request.respond(response) {
        warn!("failed to send response: {}", error);
    }
}
