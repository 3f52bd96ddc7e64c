//! HTTP surface of the three services.
//!
//! Each service is an axum [`Router`] built over its record store. The routers
//! carry their own state, so they can be served alone or merged into one
//! listener (`serve all`).
//!
//! | Service  | Routes |
//! |----------|--------|
//! | projects | `GET/POST /projects`, `GET/PUT/DELETE /projects/{id}` |
//! | tasks    | `GET/POST /tasks`, `GET /tasks/with-usernames`, `GET /tasks/project/{projectId}`, `GET/PUT/DELETE /tasks/{id}`, `GET /tasks/{id}/with-username` |
//! | users    | `GET/POST /users`, `GET/DELETE /users/{id}`, `GET /users/{id}/name` |

use crate::api::{LocalNameResolver, NameResolver};
use crate::db::{db::Db, projects::Projects, tasks::Tasks, users::Users};
use crate::libs::data_storage::APP_VERSION;
use crate::libs::messages::Message;
use crate::libs::task_service::TaskService;
use crate::msg_info;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod projects;
pub mod tasks;
pub mod users;

pub fn projects_app(db: &Db) -> Router {
    projects::router(Projects::new(db))
}

pub fn users_app(db: &Db) -> Router {
    users::router(Users::new(db))
}

pub fn tasks_app(db: &Db, resolver: Arc<dyn NameResolver>) -> Router {
    tasks::router(TaskService::new(Tasks::new(db), resolver))
}

/// All three services over one database, with names resolved in-process.
pub fn combined_app(db: &Db) -> Router {
    let resolver = Arc::new(LocalNameResolver::new(&Users::new(db)));
    projects_app(db).merge(users_app(db)).merge(tasks_app(db, resolver))
}

/// Serves `app` on `addr` until Ctrl+C, then drains in-flight requests.
pub async fn serve(app: Router, addr: &str, label: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(version = APP_VERSION, "{}", Message::ServiceStarting(label.to_string(), local_addr.to_string()));

    axum::serve(listener, app.layer(TraceLayer::new_for_http()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{}", Message::ServiceStopped(label.to_string()));
    Ok(())
}

async fn shutdown_signal() {
    // A failed handler install leaves the server running until killed.
    if tokio::signal::ctrl_c().await.is_ok() {
        msg_info!(Message::ShutdownSignalReceived);
    } else {
        std::future::pending::<()>().await;
    }
}
