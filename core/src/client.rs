//! Request builder and response parser for the whiteboard API.
//!
//! # Design
//! `BoardsClient` holds the base URL and the `authorization` header value,
//! computed once at construction and reused on every request. Each operation
//! is split into a `build_*` method that produces an [`HttpRequest`] and a
//! `parse_*` method that consumes an [`HttpResponse`], so the mapping stays
//! deterministic and free of I/O. [`crate::api::WhiteboardApi`] composes the
//! two halves with a transport; a host can also drive them directly.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Board, CreateBoard, Widget};

/// Envelope for the widget list endpoint: widgets arrive under `data`,
/// in board order.
#[derive(Debug, Deserialize)]
struct WidgetCollection {
    data: Vec<Widget>,
}

/// Stateless builder/parser for the whiteboard API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct BoardsClient {
    base_url: String,
    auth_header: (String, String),
}

impl BoardsClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: ("authorization".to_string(), format!("Bearer {token}")),
        }
    }

    pub fn build_list_widgets(&self, board_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/v1/boards/{board_id}/widgets/", self.base_url),
            headers: vec![self.auth_header.clone()],
            body: None,
        }
    }

    pub fn build_get_board(&self, board_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/v1/boards/{board_id}", self.base_url),
            headers: vec![self.auth_header.clone()],
            body: None,
        }
    }

    pub fn build_create_board(&self, input: &CreateBoard) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|source| ApiError::Serialize { source })?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/v1/boards", self.base_url),
            headers: vec![
                self.auth_header.clone(),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }

    /// Widgets come back in board order; a single malformed entry (missing
    /// or unknown `type`, absent required field) fails the whole batch.
    pub fn parse_list_widgets(&self, response: HttpResponse) -> Result<Vec<Widget>, ApiError> {
        let collection: WidgetCollection = decode(response)?;
        Ok(collection.data)
    }

    pub fn parse_get_board(&self, response: HttpResponse) -> Result<Board, ApiError> {
        decode(response)
    }

    pub fn parse_create_board(&self, response: HttpResponse) -> Result<Board, ApiError> {
        decode(response)
    }
}

/// Shared decode path: any non-2xx status or unparseable body is an error,
/// then the parsed JSON is mapped into the target type with the original
/// `serde_json` failure kept as the cause.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !(200..300).contains(&response.status) {
        return Err(ApiError::Status {
            status: response.status,
            body: response.body,
        });
    }
    let json: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|source| ApiError::InvalidJson {
            status: response.status,
            source,
        })?;
    serde_json::from_value(json).map_err(|source| ApiError::Decode { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    const TOKEN: &str = "secret-token";

    fn client() -> BoardsClient {
        BoardsClient::new("https://api.example.com", TOKEN)
    }

    fn auth_header() -> (String, String) {
        ("authorization".to_string(), format!("Bearer {TOKEN}"))
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_widgets_produces_correct_request() {
        let req = client().build_list_widgets("b1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "https://api.example.com/v1/boards/b1/widgets/");
        assert_eq!(req.headers, vec![auth_header()]);
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_board_produces_correct_request() {
        let req = client().build_get_board("b1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "https://api.example.com/v1/boards/b1");
        assert_eq!(req.headers, vec![auth_header()]);
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_board_produces_correct_request() {
        let input = CreateBoard {
            name: "Sprint".to_string(),
            description: "Q1 planning".to_string(),
        };
        let req = client().build_create_board(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "https://api.example.com/v1/boards");
        assert_eq!(
            req.headers,
            vec![
                auth_header(),
                ("content-type".to_string(), "application/json".to_string()),
            ]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Sprint");
        assert_eq!(body["description"], "Q1 planning");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BoardsClient::new("https://api.example.com/", TOKEN);
        let req = client.build_get_board("b1");
        assert_eq!(req.path, "https://api.example.com/v1/boards/b1");
    }

    #[test]
    fn parse_list_widgets_preserves_order() {
        let body = r#"{"data":[
            {"type":"sticker","id":"w1","position":{"x":0.0,"y":0.0},"text":"first"},
            {"type":"card","id":"w2","position":{"x":10.0,"y":5.0},"title":"second"},
            {"type":"image","id":"w3","position":{"x":-3.0,"y":8.0},"url":"https://img.example.com/a.png"}
        ]}"#;
        let widgets = client().parse_list_widgets(response(200, body)).unwrap();
        assert_eq!(widgets.len(), 3);
        assert_eq!(widgets[0].id(), "w1");
        assert!(matches!(widgets[0], Widget::Sticker { .. }));
        assert_eq!(widgets[1].id(), "w2");
        assert!(matches!(widgets[1], Widget::Card { .. }));
        assert_eq!(widgets[2].id(), "w3");
        assert!(matches!(widgets[2], Widget::Image { .. }));
        assert_eq!(widgets[2].position(), Position { x: -3.0, y: 8.0 });
    }

    #[test]
    fn parse_list_widgets_empty_data() {
        let widgets = client()
            .parse_list_widgets(response(200, r#"{"data":[]}"#))
            .unwrap();
        assert!(widgets.is_empty());
    }

    #[test]
    fn parse_list_widgets_missing_data_key() {
        let err = client()
            .parse_list_widgets(response(200, r#"{"widgets":[]}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn parse_list_widgets_missing_discriminator_fails_batch() {
        let body = r#"{"data":[
            {"type":"sticker","id":"w1","position":{"x":0.0,"y":0.0},"text":"ok"},
            {"id":"w2","position":{"x":1.0,"y":1.0},"text":"no type"}
        ]}"#;
        let err = client().parse_list_widgets(response(200, body)).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn parse_list_widgets_unknown_discriminator_fails_batch() {
        let body = r#"{"data":[{"type":"hologram","id":"w1","position":{"x":0.0,"y":0.0}}]}"#;
        let err = client().parse_list_widgets(response(200, body)).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn parse_get_board_success() {
        let board = client()
            .parse_get_board(response(
                200,
                r#"{"id":"b1","name":"Sprint","description":"Q1 planning"}"#,
            ))
            .unwrap();
        assert_eq!(board.id, "b1");
        assert_eq!(board.name, "Sprint");
        assert_eq!(board.description, "Q1 planning");
    }

    #[test]
    fn parse_get_board_missing_field() {
        let err = client()
            .parse_get_board(response(200, r#"{"id":"b1","name":"Sprint"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn parse_get_board_not_found_status() {
        let err = client()
            .parse_get_board(response(404, "not found"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[test]
    fn parse_create_board_accepts_201() {
        let board = client()
            .parse_create_board(response(
                201,
                r#"{"id":"b1","name":"Sprint","description":"Q1 planning"}"#,
            ))
            .unwrap();
        assert_eq!(board.id, "b1");
    }

    #[test]
    fn parse_create_board_server_error() {
        let err = client()
            .parse_create_board(response(500, "internal error"))
            .unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn parse_bad_json_wraps_cause() {
        let err = client()
            .parse_get_board(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson { status: 200, .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
