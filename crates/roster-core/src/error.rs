//! Error types for `roster-core`.

use thiserror::Error;

use crate::user::UserId;

/// The three failure classes every layer agrees on.
///
/// The HTTP layer maps each kind to exactly one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Malformed or missing input. Never retried.
  Validation,
  /// The referenced user does not exist.
  NotFound,
  /// The underlying datastore failed (I/O, locking, constraints).
  Storage,
}

/// Implemented by every [`UserStore`](crate::store::UserStore) error type so
/// callers can classify failures without knowing the backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> ErrorKind;
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid input: {0}")]
  Validation(String),

  #[error("user not found: {0}")]
  NotFound(UserId),
}

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::Validation(_) => ErrorKind::Validation,
      Error::NotFound(_) => ErrorKind::NotFound,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
