//! `/users` routes, including the name lookup consumed by the tasks service.

use super::error::ApiError;
use crate::db::{db::blocking, users::Users};
use crate::libs::error::{Entity, Error};
use crate::libs::messages::Message;
use crate::libs::user::{NameResponse, User, UserDraft};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

#[derive(Clone)]
pub struct UsersState {
    pub users: Users,
}

pub fn router(users: Users) -> Router {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/{id}", get(get_one).delete(remove))
        .route("/users/{id}/name", get(name))
        .with_state(UsersState { users })
}

async fn list(State(state): State<UsersState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users;
    Ok(Json(blocking(move || users.fetch()).await?))
}

async fn get_one(State(state): State<UsersState>, Path(id): Path<i64>) -> Result<Json<User>, ApiError> {
    let users = state.users;
    let user = blocking(move || users.get_by_id(id)).await?;
    Ok(Json(user.ok_or_else(|| Error::not_found(Entity::User, id))?))
}

/// Answers `"Unknown"` rather than 404 for an absent or nameless user.
async fn name(State(state): State<UsersState>, Path(id): Path<i64>) -> Result<Json<NameResponse>, ApiError> {
    let users = state.users;
    Ok(Json(NameResponse::from(blocking(move || users.get_by_id(id)).await?)))
}

async fn create(State(state): State<UsersState>, Json(draft): Json<UserDraft>) -> Result<Json<User>, ApiError> {
    let users = state.users;
    let user = blocking(move || users.insert(&draft)).await?;
    info!(user_id = user.id, "{}", Message::UserCreated(user.id));
    Ok(Json(user))
}

async fn remove(State(state): State<UsersState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let users = state.users;
    if blocking(move || users.delete(id)).await? > 0 {
        info!(user_id = id, "{}", Message::UserDeleted(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
