//! Core types and trait definitions for the Roster user service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store and API crates both depend on it.

pub mod error;
pub mod store;
pub mod user;

pub use error::{Error, ErrorKind, Result, StoreError};
pub use store::UserStore;
pub use user::{NewUser, User, UserId};
