//! Facade composing builder, transport, and parser.

use tracing::debug;

use crate::client::BoardsClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::transport::{HttpTransport, UreqTransport};
use crate::types::{Board, CreateBoard, Widget};

/// Synchronous client for the whiteboard API.
///
/// Holds the immutable base URL and bearer token (via [`BoardsClient`]) and
/// a transport. Every operation performs exactly one network call and blocks
/// until the response arrives; there are no retries, so a re-issued
/// `create_board` can create duplicate remote boards.
#[derive(Debug, Clone)]
pub struct WhiteboardApi<T = UreqTransport> {
    client: BoardsClient,
    transport: T,
}

impl WhiteboardApi<UreqTransport> {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self::with_transport(base_url, token, UreqTransport::new())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, &config.token)
    }
}

impl<T: HttpTransport> WhiteboardApi<T> {
    /// Build a facade over a caller-supplied transport. Tests use this to
    /// substitute canned responses for the network.
    pub fn with_transport(base_url: &str, token: &str, transport: T) -> Self {
        Self {
            client: BoardsClient::new(base_url, token),
            transport,
        }
    }

    /// Fetch every widget on a board, in board order.
    pub fn list_widgets(&self, board_id: &str) -> Result<Vec<Widget>, ApiError> {
        debug!(board_id, "listing widgets");
        let request = self.client.build_list_widgets(board_id);
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        self.client.parse_list_widgets(response)
    }

    /// Fetch a board by id.
    pub fn get_board(&self, board_id: &str) -> Result<Board, ApiError> {
        debug!(board_id, "fetching board");
        let request = self.client.build_get_board(board_id);
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        self.client.parse_get_board(response)
    }

    /// Create a board with the given name and description.
    pub fn create_board(&self, name: &str, description: &str) -> Result<Board, ApiError> {
        debug!(name, "creating board");
        let input = CreateBoard {
            name: name.to_string(),
            description: description.to_string(),
        };
        let request = self.client.build_create_board(&input)?;
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        self.client.parse_create_board(response)
    }
}
