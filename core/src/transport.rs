//! Blocking HTTP transport seam.
//!
//! # Design
//! [`HttpTransport`] is the one point where the client touches the network:
//! it executes a plain-data [`HttpRequest`] and returns the plain-data
//! [`HttpResponse`], leaving all status interpretation to the parser. The
//! bundled [`UreqTransport`] disables ureq's status-code-as-error behavior
//! so 4xx/5xx responses come back as data rather than `Err`. Tests
//! substitute their own implementation returning canned responses.

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip, blocking until the response arrives or the
/// transport-level timeout fires.
///
/// An `Err` means the round-trip itself failed (connect, timeout, TLS);
/// any status code the server actually produced is a successful `Ok`.
pub trait HttpTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Synchronous transport backed by a shared [`ureq::Agent`].
///
/// The agent is thread-safe, so one `UreqTransport` can serve concurrent
/// calls; connection pooling and timeouts are the agent's defaults.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (request.method, request.body) {
            (HttpMethod::Get, _) => {
                let mut req = self.agent.get(&request.path);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.call()
            }
            (HttpMethod::Post, Some(body)) => {
                let mut req = self.agent.post(&request.path);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                let mut req = self.agent.post(&request.path);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.send_empty()
            }
        };

        let mut response = result.map_err(|e| Box::new(e) as TransportError)?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Box::new(e) as TransportError)?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
