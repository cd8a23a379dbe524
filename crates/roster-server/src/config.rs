//! Runtime configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, `ROSTER_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_PATH: &str = "users.db";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
  /// Origins allowed by CORS. Empty means any origin.
  #[serde(default)]
  pub cors_origins:  Vec<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          DEFAULT_HOST.to_owned(),
      port:          DEFAULT_PORT,
      database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
      cors_origins:  Vec::new(),
    }
  }
}

/// Values given on the command line; `None` leaves lower layers in effect.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
  pub host:          Option<String>,
  pub port:          Option<u16>,
  pub database_path: Option<PathBuf>,
}

impl ServerConfig {
  /// Layer defaults, `file` (if it exists), the environment and `overrides`.
  pub fn load(file: &Path, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
    Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("database_path", DEFAULT_DATABASE_PATH)?
      .add_source(File::from(file).required(false))
      .add_source(Environment::with_prefix("ROSTER"))
      .set_override_option("host", overrides.host)?
      .set_override_option("port", overrides.port.map(i64::from))?
      .set_override_option(
        "database_path",
        overrides
          .database_path
          .map(|p| p.to_string_lossy().into_owned()),
      )?
      .build()?
      .try_deserialize()
  }

  /// The `host:port` string to bind.
  pub fn socket_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
      .suffix(".toml")
      .tempfile()
      .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
  }

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::load(
      &dir.path().join("absent.toml"),
      ConfigOverrides::default(),
    )
    .unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr(), "0.0.0.0:8000");
  }

  #[test]
  fn file_overrides_defaults() {
    let file = toml_file(
      "port = 9000\n\
       database_path = \"/var/lib/roster/users.db\"\n\
       cors_origins = [\"http://localhost:3000\"]\n",
    );
    let cfg = ServerConfig::load(file.path(), ConfigOverrides::default()).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.database_path, PathBuf::from("/var/lib/roster/users.db"));
    assert_eq!(cfg.cors_origins, ["http://localhost:3000"]);
  }

  #[test]
  fn command_line_overrides_file() {
    let file = toml_file("port = 9000\nhost = \"127.0.0.1\"\n");
    let cfg = ServerConfig::load(
      file.path(),
      ConfigOverrides {
        port: Some(8123),
        database_path: Some(PathBuf::from("other.db")),
        ..ConfigOverrides::default()
      },
    )
    .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8123);
    assert_eq!(cfg.database_path, PathBuf::from("other.db"));
  }

  #[test]
  fn invalid_port_is_an_error() {
    let file = toml_file("port = 70000\n");
    assert!(ServerConfig::load(file.path(), ConfigOverrides::default()).is_err());
  }
}
