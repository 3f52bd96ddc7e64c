//! `/projects` routes.

use super::error::ApiError;
use crate::db::{db::blocking, projects::Projects};
use crate::libs::messages::Message;
use crate::libs::project::{Project, ProjectDraft};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

#[derive(Clone)]
pub struct ProjectsState {
    pub projects: Projects,
}

pub fn router(projects: Projects) -> Router {
    Router::new()
        .route("/projects", get(list).post(create))
        .route("/projects/{id}", get(get_one).put(update).delete(remove))
        .with_state(ProjectsState { projects })
}

async fn list(State(state): State<ProjectsState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.projects;
    Ok(Json(blocking(move || projects.fetch()).await?))
}

async fn get_one(State(state): State<ProjectsState>, Path(id): Path<i64>) -> Result<Json<Project>, ApiError> {
    let projects = state.projects;
    Ok(Json(blocking(move || projects.find_by_id(id)).await?))
}

async fn create(State(state): State<ProjectsState>, Json(draft): Json<ProjectDraft>) -> Result<Json<Project>, ApiError> {
    let projects = state.projects;
    let project = blocking(move || projects.insert(&draft)).await?;
    info!(project_id = project.id, "{}", Message::ProjectCreated(project.id));
    Ok(Json(project))
}

async fn update(
    State(state): State<ProjectsState>,
    Path(id): Path<i64>,
    Json(draft): Json<ProjectDraft>,
) -> Result<Json<Project>, ApiError> {
    let projects = state.projects;
    Ok(Json(blocking(move || projects.update(id, &draft)).await?))
}

async fn remove(State(state): State<ProjectsState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let projects = state.projects;
    if blocking(move || projects.delete(id)).await? > 0 {
        info!(project_id = id, "{}", Message::ProjectDeleted(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
