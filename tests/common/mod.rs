#![allow(dead_code)]

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use trpc_smoke::ApiBase;

/// Answers `task.getAll` the way a real tRPC mount would: a success envelope
/// wrapping the task list. The smoke check only looks at the status code, but
/// the fixture keeps the body realistic.
async fn get_all_tasks() -> Json<Value> {
    Json(json!({
        "result": {
            "data": {
                "json": [
                    { "id": 1, "title": "write the report", "done": false },
                    { "id": 2, "title": "ship it", "done": true },
                ]
            }
        }
    }))
}

async fn get_all_tasks_broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Spawns a stub API server with the `task.getAll` procedure mounted and
/// returns the base to point the check at.
pub async fn spawn_api() -> ApiBase {
    spawn(Router::new().route("/api/trpc/task.getAll", get(get_all_tasks))).await
}

/// Spawns a stub API server with no procedures registered; every procedure
/// path answers 404.
pub async fn spawn_empty_api() -> ApiBase {
    spawn(Router::new()).await
}

/// Spawns a stub API server whose `task.getAll` handler fails with 500.
pub async fn spawn_failing_api() -> ApiBase {
    spawn(Router::new().route("/api/trpc/task.getAll", get(get_all_tasks_broken))).await
}

async fn spawn(router: Router) -> ApiBase {
    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ApiBase::new(format!("http://127.0.0.1:{port}/api"))
}

/// Picks a port with nothing listening on it, for the server-down case.
pub async fn dead_base() -> ApiBase {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    ApiBase::new(format!("http://127.0.0.1:{port}/api"))
}
