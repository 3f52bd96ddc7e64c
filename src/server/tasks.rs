//! `/tasks` routes.

use super::error::ApiError;
use crate::db::db::blocking;
use crate::libs::error::{Entity, Error};
use crate::libs::task::{EnrichedTask, Task, TaskDraft};
use crate::libs::task_service::TaskService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct TasksState {
    pub service: Arc<TaskService>,
}

pub fn router(service: TaskService) -> Router {
    Router::new()
        .route("/tasks", get(list).post(create))
        .route("/tasks/with-usernames", get(list_with_usernames))
        .route("/tasks/project/{project_id}", get(list_by_project))
        .route("/tasks/{id}", get(get_one).put(update).delete(remove))
        .route("/tasks/{id}/with-username", get(get_with_username))
        .with_state(TasksState {
            service: Arc::new(service),
        })
}

async fn list(State(state): State<TasksState>) -> Result<Json<Vec<Task>>, ApiError> {
    let service = state.service;
    Ok(Json(blocking(move || service.find_all()).await?))
}

async fn list_with_usernames(State(state): State<TasksState>) -> Result<Json<Vec<EnrichedTask>>, ApiError> {
    Ok(Json(state.service.find_all_with_usernames().await?))
}

async fn list_by_project(State(state): State<TasksState>, Path(project_id): Path<i64>) -> Result<Json<Vec<Task>>, ApiError> {
    let service = state.service;
    Ok(Json(blocking(move || service.find_by_project(project_id)).await?))
}

async fn get_one(State(state): State<TasksState>, Path(id): Path<i64>) -> Result<Json<Task>, ApiError> {
    let service = state.service;
    let task = blocking(move || service.find_by_id(id)).await?;
    Ok(Json(task.ok_or_else(|| Error::not_found(Entity::Task, id))?))
}

async fn get_with_username(State(state): State<TasksState>, Path(id): Path<i64>) -> Result<Json<EnrichedTask>, ApiError> {
    Ok(Json(state.service.find_by_id_with_username(id).await?))
}

async fn create(State(state): State<TasksState>, Json(draft): Json<TaskDraft>) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.service.create(draft).await?))
}

async fn update(
    State(state): State<TasksState>,
    Path(id): Path<i64>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, ApiError> {
    let service = state.service;
    Ok(Json(blocking(move || service.update(id, &draft)).await?))
}

async fn remove(State(state): State<TasksState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let service = state.service;
    blocking(move || service.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
