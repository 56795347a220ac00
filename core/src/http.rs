//! HTTP requests and responses as plain data.
//!
//! # Design
//! The builder/parser side of the client never touches the network: it
//! produces `HttpRequest` values and consumes `HttpResponse` values, and a
//! [`crate::transport::HttpTransport`] implementation carries them over the
//! wire in between. Keeping the boundary as plain owned data makes the
//! request/response mapping deterministic and testable without a server.
//!
//! The whiteboard API only ever issues GET and POST, so `HttpMethod` stops
//! there.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `BoardsClient::build_*` methods and executed by an
/// `HttpTransport`. Header names are lowercase.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by an `HttpTransport` after executing an `HttpRequest`, then
/// passed to `BoardsClient::parse_*` methods for status checking and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
