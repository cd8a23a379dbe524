//! Server assembly for Roster: configuration and the HTTP middleware stack
//! wrapped around [`roster_api::api_router`].

pub mod config;

pub use config::{ConfigOverrides, ServerConfig};

use std::sync::Arc;

use axum::{Router, http::HeaderValue};
use roster_core::UserStore;
use tower_http::{
  cors::{AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: the users API plus CORS and request tracing.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: UserStore + 'static,
{
  roster_api::api_router(store)
    .layer(cors_layer(&config.cors_origins))
    .layer(TraceLayer::new_for_http())
}

/// An empty origin list allows any origin; otherwise only the listed ones.
/// Entries that are not valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
  let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

  if origins.is_empty() {
    return layer.allow_origin(Any);
  }

  let origins: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|o| match o.parse() {
      Ok(v) => Some(v),
      Err(_) => {
        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();
  layer.allow_origin(AllowOrigin::list(origins))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
