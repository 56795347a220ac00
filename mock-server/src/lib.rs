use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct CreateBoard {
    pub name: String,
    pub description: String,
}

/// A stored board plus its widgets, kept in insertion order. Widgets are
/// stored as raw JSON so the server never constrains the client's widget
/// schema beyond the `type` discriminator.
#[derive(Clone, Debug)]
struct BoardEntry {
    board: Board,
    widgets: Vec<Value>,
}

type Db = Arc<RwLock<HashMap<String, BoardEntry>>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    expected_auth: String,
}

pub fn app(token: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(HashMap::new())),
        expected_auth: format!("Bearer {token}"),
    };
    Router::new()
        .route("/v1/boards", post(create_board))
        .route("/v1/boards/{id}", get(get_board))
        .route(
            "/v1/boards/{id}/widgets/",
            get(list_widgets).post(create_widget),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), StatusCode> {
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if presented == Some(state.expected_auth.as_str()) {
        Ok(())
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn create_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateBoard>,
) -> Result<(StatusCode, Json<Board>), StatusCode> {
    authorize(&state, &headers)?;
    let board = Board {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        description: input.description,
    };
    tracing::debug!(id = %board.id, "board created");
    state.db.write().await.insert(
        board.id.clone(),
        BoardEntry {
            board: board.clone(),
            widgets: Vec::new(),
        },
    );
    Ok((StatusCode::CREATED, Json(board)))
}

async fn get_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Board>, StatusCode> {
    authorize(&state, &headers)?;
    let db = state.db.read().await;
    db.get(&id)
        .map(|entry| Json(entry.board.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_widgets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    authorize(&state, &headers)?;
    let db = state.db.read().await;
    let entry = db.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "data": entry.widgets })))
}

/// Seeding endpoint for tests: accepts any JSON object carrying a string
/// `type` field, assigns an id when absent, and stores it verbatim.
async fn create_widget(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(mut input): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    authorize(&state, &headers)?;
    let is_widget = input.is_object() && input.get("type").is_some_and(Value::is_string);
    if !is_widget {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    if input.get("id").is_none() {
        input["id"] = json!(Uuid::new_v4().to_string());
    }
    let mut db = state.db.write().await;
    let entry = db.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    entry.widgets.push(input.clone());
    Ok((StatusCode::CREATED, Json(input)))
}
