//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::UserStore`].
//! Transport concerns (TLS, CORS, request tracing) are the caller's
//! responsibility.
//!
//! | Method   | Path          | Success |
//! |----------|---------------|---------|
//! | `GET`    | `/users`      | 200 + array of users |
//! | `POST`   | `/users`      | 201 + created user |
//! | `GET`    | `/users/{id}` | 200 + user |
//! | `PUT`    | `/users/{id}` | 200 + updated user |
//! | `DELETE` | `/users/{id}` | 200 + confirmation |
//!
//! Unknown paths answer 404 and known paths with an unsupported method
//! answer 405. Every error body is `{"error": "<message>"}`.

pub mod error;
pub mod extract;
pub mod users;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::UserStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested or layered by the caller
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: UserStore + 'static,
{
  Router::new()
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route(
      "/users/{id}",
      get(users::get_one::<S>)
        .put(users::update::<S>)
        .delete(users::delete::<S>),
    )
    .method_not_allowed_fallback(method_not_allowed)
    .fallback(not_found)
    .with_state(store)
}

async fn not_found() -> ApiError {
  ApiError::NotFound("no such resource".to_owned())
}

async fn method_not_allowed() -> ApiError {
  ApiError::MethodNotAllowed
}
