//! HTTP server implementation for the agent collaboration API.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::StoreError;
use crate::store::SupabaseStore;
use crate::types::{
    Agent, CREATED_BY_WEB, DEFAULT_ASSIGNEE_NODE_ID, NewTask, RECENT_TASKS_LIMIT, Task,
};

/// API server state shared across handlers.
#[derive(Clone)]
struct ApiState {
    store: Arc<SupabaseStore>,
}

/// Liveness check response.
#[derive(Serialize)]
struct HealthResponse {
    message: &'static str,
    status: &'static str,
}

/// Agent list response. `error` is only present when the read degraded.
#[derive(Serialize)]
struct AgentsResponse {
    agents: Vec<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Task list response, same degradation shape as `AgentsResponse`.
#[derive(Serialize)]
struct TasksResponse {
    tasks: Vec<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Request body for task creation.
#[derive(Deserialize)]
struct CreateTaskRequest {
    title: String,
    status: Option<String>,
}

/// Response for a successful task creation; `task` holds the inserted rows.
#[derive(Serialize)]
struct CreateTaskResponse {
    status: &'static str,
    task: Vec<Task>,
}

/// Write-path failure. Serialized as a 500 with a `detail` field; the read
/// endpoints never use this, they degrade to an empty list instead.
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "Task creation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

/// Liveness check. No database access.
async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "AI Agent Collaboration API is running",
        status: "healthy",
    })
}

/// List every agent for the status board.
async fn agents_status(State(state): State<ApiState>) -> Json<AgentsResponse> {
    match state.store.list_agents().await {
        Ok(agents) => Json(AgentsResponse {
            agents,
            error: None,
        }),
        Err(e) => {
            warn!(error = %e, "Agent list query failed");
            Json(AgentsResponse {
                agents: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

/// The ten most recent tasks, newest first.
async fn list_tasks(State(state): State<ApiState>) -> Json<TasksResponse> {
    match state.store.recent_tasks(RECENT_TASKS_LIMIT).await {
        Ok(tasks) => Json(TasksResponse { tasks, error: None }),
        Err(e) => {
            warn!(error = %e, "Task list query failed");
            Json(TasksResponse {
                tasks: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

/// Create a task.
///
/// Resolves the default assignee first; a missing agent row leaves
/// `assigned_to` null, while store errors in either call fail the request.
async fn create_task(
    State(state): State<ApiState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
    let assigned_to = state.store.find_agent_id(DEFAULT_ASSIGNEE_NODE_ID).await?;

    let task = NewTask {
        title: req.title,
        status: req.status.unwrap_or_else(|| "pending".to_string()),
        assigned_to,
        created_by: CREATED_BY_WEB,
    };
    let inserted = state.store.insert_task(&task).await?;

    Ok(Json(CreateTaskResponse {
        status: "success",
        task: inserted,
    }))
}

/// Build the router with all routes.
fn build_router(state: ApiState) -> Router {
    // CORS wide open; the front-end is served from a different origin.
    // Not production-grade as-is.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/agents/status", get(agents_status))
        .route("/tasks", get(list_tasks).post(create_task))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the given address.
///
/// Returns a oneshot sender that can be used to signal shutdown,
/// and the actual address the server is bound to (port 0 is resolved here).
pub async fn start_server(
    store: Arc<SupabaseStore>,
    addr: SocketAddr,
) -> anyhow::Result<(oneshot::Sender<()>, SocketAddr)> {
    let app = build_router(ApiState { store });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("API server listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("API server shutting down");
            })
            .await
        {
            tracing::error!("API server error: {}", e);
        }
    });

    Ok((shutdown_tx, bound_addr))
}

/// Run the server on the configured port until interrupted.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let store = Arc::new(SupabaseStore::new(settings)?);
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));

    let (shutdown_tx, _bound_addr) = start_server(store, addr).await?;

    tokio::signal::ctrl_c().await?;
    let _ = shutdown_tx.send(());

    Ok(())
}
