//! The user, the sole entity managed by Roster.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Datastore-assigned identifier. Never reused after deletion.
pub type UserId = i64;

/// A persisted user, exactly as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:    UserId,
  pub name:  String,
  pub email: String,
}

/// A validated `(name, email)` pair, ready to be written.
///
/// The only way to build one is [`NewUser::new`], so holding a `NewUser`
/// means both fields are non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  name:  String,
  email: String,
}

impl NewUser {
  /// Trim both fields and reject either one being blank.
  pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
    let name = required("name", name.into())?;
    let email = required("email", email.into())?;
    Ok(Self { name, email })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn email(&self) -> &str {
    &self.email
  }

  /// Attach a datastore-assigned id.
  pub fn into_user(self, id: UserId) -> User {
    User { id, name: self.name, email: self.email }
  }
}

fn required(field: &str, value: String) -> Result<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(Error::Validation(format!("`{field}` must not be empty")));
  }
  Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{ErrorKind, StoreError};

  #[test]
  fn new_user_keeps_valid_fields() {
    let user = NewUser::new("Ann", "ann@x.com").unwrap();
    assert_eq!(user.name(), "Ann");
    assert_eq!(user.email(), "ann@x.com");
  }

  #[test]
  fn new_user_trims_whitespace() {
    let user = NewUser::new("  Ann B ", "\tann@x.com\n").unwrap();
    assert_eq!(user.name(), "Ann B");
    assert_eq!(user.email(), "ann@x.com");
  }

  #[test]
  fn empty_name_is_a_validation_error() {
    let err = NewUser::new("", "ann@x.com").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("name"), "{err}");
  }

  #[test]
  fn blank_email_is_a_validation_error() {
    let err = NewUser::new("Ann", "   ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("email"), "{err}");
  }

  #[test]
  fn user_serializes_to_wire_shape() {
    let user = NewUser::new("Ann", "ann@x.com").unwrap().into_user(1);
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "id": 1, "name": "Ann", "email": "ann@x.com" })
    );
  }
}
