//! [`SqliteStore`] — the SQLite implementation of [`UserStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use roster_core::{NewUser, User, UserId, UserStore};

use crate::{schema::SCHEMA, Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster user store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted. Every clone
/// funnels its statements onto the same connection thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// The schema is in place before this returns, so no caller can observe
  /// the store mid-initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_db().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_db().await?;
    Ok(store)
  }

  /// Ensure the `users` table exists. A no-op when it already does.
  pub async fn init_db(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Close the underlying connection, flushing any pending WAL state.
  ///
  /// Statements issued through other clones after this point fail with a
  /// storage error.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }
}

fn user_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:    row.get(0)?,
    name:  row.get(1)?,
    email: row.get(2)?,
  })
}

// ─── UserStore impl ──────────────────────────────────────────────────────────

impl UserStore for SqliteStore {
  type Error = Error;

  async fn get_all_users(&self) -> Result<Vec<User>> {
    let users = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, name, email FROM users ORDER BY id")?;
        let rows = stmt
          .query_map([], user_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(users)
  }

  async fn get_user(&self, id: UserId) -> Result<User> {
    let user = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, name, email FROM users WHERE id = ?1",
            rusqlite::params![id],
            user_from_row,
          )
          .optional()?)
      })
      .await?;

    user.ok_or_else(|| Error::not_found(id))
  }

  async fn create_user(&self, name: String, email: String) -> Result<UserId> {
    let new_user = NewUser::new(name, email)?;

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (name, email) VALUES (?1, ?2)",
          rusqlite::params![new_user.name(), new_user.email()],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(id, "created user");
    Ok(id)
  }

  async fn update_user(
    &self,
    id:    UserId,
    name:  String,
    email: String,
  ) -> Result<User> {
    let new_user = NewUser::new(name, email)?;
    let (name, email) = (new_user.name().to_owned(), new_user.email().to_owned());

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE users SET name = ?1, email = ?2 WHERE id = ?3",
          rusqlite::params![name, email, id],
        )?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::not_found(id));
    }

    tracing::debug!(id, "updated user");
    Ok(new_user.into_user(id))
  }

  async fn delete_user(&self, id: UserId) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM users WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::not_found(id));
    }

    tracing::debug!(id, "deleted user");
    Ok(())
  }
}
