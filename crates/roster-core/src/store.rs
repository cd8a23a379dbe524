//! The `UserStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  error::StoreError,
  user::{User, UserId},
};

/// Typed CRUD over the `users` table.
///
/// Every id-taking operation reports a missing row as an error whose
/// [`kind`](StoreError::kind) is [`ErrorKind::NotFound`](crate::ErrorKind),
/// decided by the affected-row count rather than by the absence of a
/// database error. `name`/`email` are validated before any statement runs.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait UserStore: Send + Sync {
  type Error: StoreError;

  /// All users in id (insertion) order. Empty if the table is empty.
  fn get_all_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// The user with `id`.
  fn get_user(
    &self,
    id: UserId,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Insert a new user and return its freshly assigned id.
  fn create_user(
    &self,
    name: String,
    email: String,
  ) -> impl Future<Output = Result<UserId, Self::Error>> + Send + '_;

  /// Replace `name` and `email` of the user with `id`; the id is unchanged.
  fn update_user(
    &self,
    id: UserId,
    name: String,
    email: String,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Permanently remove the user with `id`.
  fn delete_user(
    &self,
    id: UserId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
