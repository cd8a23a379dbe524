//! Handlers for `/users` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/users`      | All users in id order |
//! | `POST`   | `/users`      | Body: [`UserBody`]; returns 201 + stored user |
//! | `GET`    | `/users/:id`  | 404 if not found |
//! | `PUT`    | `/users/:id`  | Body: [`UserBody`]; 404 if not found |
//! | `DELETE` | `/users/:id`  | 404 if not found |
//!
//! Path ids and bodies are checked before the store is touched.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use roster_core::{NewUser, User, UserId, UserStore};
use serde::Deserialize;
use serde_json::json;

use crate::{
  error::ApiError,
  extract::{JsonBody, PathParam},
};

/// JSON body accepted by `POST /users` and `PUT /users/:id`.
#[derive(Debug, Deserialize)]
pub struct UserBody {
  pub name:  String,
  pub email: String,
}

impl UserBody {
  fn validate(self) -> Result<NewUser, ApiError> {
    NewUser::new(self.name, self.email).map_err(ApiError::from_store)
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list<S: UserStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<User>>, ApiError> {
  let users = store.get_all_users().await.map_err(ApiError::from_store)?;
  Ok(Json(users))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/:id`
pub async fn get_one<S: UserStore>(
  State(store): State<Arc<S>>,
  PathParam(id): PathParam<UserId>,
) -> Result<Json<User>, ApiError> {
  let user = store.get_user(id).await.map_err(ApiError::from_store)?;
  Ok(Json(user))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /users`: returns 201 + the stored [`User`] including its new id.
pub async fn create<S: UserStore>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<UserBody>,
) -> Result<impl IntoResponse, ApiError> {
  let new_user = body.validate()?;
  let id = store
    .create_user(new_user.name().to_owned(), new_user.email().to_owned())
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(new_user.into_user(id))))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /users/:id`: replaces `name` and `email`; the id never changes.
pub async fn update<S: UserStore>(
  State(store): State<Arc<S>>,
  PathParam(id): PathParam<UserId>,
  JsonBody(body): JsonBody<UserBody>,
) -> Result<Json<User>, ApiError> {
  let new_user = body.validate()?;
  let user = store
    .update_user(id, new_user.name().to_owned(), new_user.email().to_owned())
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(user))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /users/:id`: returns 200 + `{"message": "user <id> deleted"}`.
pub async fn delete<S: UserStore>(
  State(store): State<Arc<S>>,
  PathParam(id): PathParam<UserId>,
) -> Result<impl IntoResponse, ApiError> {
  store.delete_user(id).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "message": format!("user {id} deleted") })))
}
