use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::core::{ApiError, TodoDocument, TodoId, TodoView};
use crate::storage::TodoStore;

#[derive(Clone)]
pub struct HttpConfig {
    /// Per-request bound enforced at the server boundary, not by handlers.
    pub request_timeout: Duration,
    /// How long in-flight requests may drain after a shutdown signal before
    /// they are abandoned.
    pub shutdown_grace: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            shutdown_grace: Duration::from_secs(5),
        }
    }
}

/// HTTP front for the todo collection: owns the router and the serving loop.
/// The store handle is the only cross-request state.
pub struct HttpTransport<S: TodoStore> {
    store: Arc<S>,
    config: HttpConfig,
}

impl<S: TodoStore> HttpTransport<S> {
    pub fn new(store: Arc<S>, config: HttpConfig) -> Self {
        Self { store, config }
    }

    pub fn router(&self) -> Router {
        let trace_layer =
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            });

        Router::new()
            .route("/", get(home))
            .merge(todo_routes::<S>())
            .layer(trace_layer)
            .layer(TimeoutLayer::new(self.config.request_timeout))
            .layer(CorsLayer::permissive())
            .with_state(self.store.clone())
    }

    /// Binds and serves until SIGINT, then drains in-flight requests for the
    /// configured grace period before giving up on them.
    pub async fn serve(&self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(addr = %addr, "todo server listening");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let router = self.router();
        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tokio::signal::ctrl_c().await?;
        info!("shutdown signal received, draining in-flight requests");
        let _ = shutdown_tx.send(());
        match tokio::time::timeout(self.config.shutdown_grace, server).await {
            Ok(joined) => joined??,
            Err(_) => warn!("grace period elapsed, abandoning in-flight requests"),
        }
        info!("todo server stopped");
        Ok(())
    }
}

fn todo_routes<S: TodoStore>() -> Router<Arc<S>> {
    Router::new()
        .route("/todo/", get(list_todos::<S>).post(create_todo::<S>))
        .route("/todo/{id}", put(update_todo::<S>).delete(delete_todo::<S>))
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<TodoView>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub todo_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(err) => {
                error!(error = %err, "store operation failed");
                let body = ErrorResponse {
                    message: "todo store operation failed".to_string(),
                    error: Some(err.to_string()),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            err => {
                let body = ErrorResponse {
                    message: err.to_string(),
                    error: None,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

pub async fn home() -> Html<&'static str> {
    Html(include_str!("home.html"))
}

pub async fn list_todos<S: TodoStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<ListResponse>, ApiError> {
    let docs = store.list_all().await?;
    let data = docs.iter().map(TodoView::from).collect();
    Ok(Json(ListResponse { data }))
}

pub async fn create_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;
    ensure_title(&body.title)?;
    let doc = TodoDocument::new(body.title);
    store.insert(&doc).await?;
    info!(todo_id = %doc.id, "todo created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "todo created successfully".to_string(),
            todo_id: doc.id.to_string(),
        }),
    ))
}

pub async fn update_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    // id is validated before the body so a malformed path never reaches the
    // store, and before any store call at all.
    let id = TodoId::parse(id.trim())?;
    let Json(body) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;
    ensure_title(&body.title)?;
    store.update_by_id(id, &body.title, body.completed).await?;
    Ok(Json(MessageResponse {
        message: "todo updated successfully".to_string(),
    }))
}

pub async fn delete_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = TodoId::parse(id.trim())?;
    store.delete_by_id(id).await?;
    Ok(Json(MessageResponse {
        message: "todo deleted successfully".to_string(),
    }))
}

fn ensure_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::EmptyTitle);
    }
    Ok(())
}
