//! Synchronous client for a remote whiteboard service's REST API.
//!
//! # Overview
//! Three operations over `/v1` — list the widgets on a board, fetch a board,
//! create a board — with every response normalized into typed domain objects
//! or a single [`ApiError`]. Fully blocking; one network call per operation,
//! no retries, no caching.
//!
//! # Design
//! - [`BoardsClient`] is the deterministic half: `build_*` methods produce
//!   plain-data [`HttpRequest`] values and `parse_*` methods consume
//!   [`HttpResponse`] values, never touching the network.
//! - [`HttpTransport`] is the I/O seam; [`UreqTransport`] is the bundled
//!   blocking implementation, and tests substitute canned responses.
//! - [`WhiteboardApi`] composes the two into the three-call facade. It holds
//!   only the immutable base URL and bearer token, so sharing one instance
//!   across threads is as safe as the transport underneath it.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::WhiteboardApi;
pub use client::BoardsClient;
pub use config::{Config, ConfigError};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, UreqTransport};
pub use types::{Board, CreateBoard, Position, Widget};
