//! Service settings from the environment, with defaults.

use std::env;
use std::net::IpAddr;

use thiserror::Error;

/// Invalid startup configuration.
#[derive(Debug, Error)]
#[error("config: {0}")]
pub struct ConfigError(String);

impl ConfigError {
  fn new(msg: impl Into<String>) -> Self {
    Self(msg.into())
  }
}

const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8501;
const DEFAULT_MAX_UPLOAD_MB: usize = 200;

#[derive(Debug, Clone)]
pub struct Settings {
  pub bind_addr: IpAddr,
  pub port: u16,
  /// Largest accepted request body, in bytes.
  pub max_upload_bytes: usize,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      bind_addr: IpAddr::from([127, 0, 0, 1]),
      port: DEFAULT_PORT,
      max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
    }
  }
}

impl Settings {
  /// Read `BIND_ADDR`, `PORT` and `MAX_UPLOAD_MB`.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let bind_addr = lookup("BIND_ADDR")
      .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
      .trim()
      .parse::<IpAddr>()
      .map_err(|e| ConfigError::new(format!("BIND_ADDR: {}", e)))?;
    let port = match lookup("PORT") {
      Some(v) => v
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::new(format!("PORT: {}", e)))?,
      None => DEFAULT_PORT,
    };
    let max_upload_mb = match lookup("MAX_UPLOAD_MB") {
      Some(v) => v
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::new(format!("MAX_UPLOAD_MB: {}", e)))?,
      None => DEFAULT_MAX_UPLOAD_MB,
    };

    let settings = Self {
      bind_addr,
      port,
      max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024),
    };
    settings.validate()?;
    Ok(settings)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.port == 0 {
      return Err(ConfigError::new("PORT cannot be 0"));
    }
    if self.max_upload_bytes == 0 {
      return Err(ConfigError::new("MAX_UPLOAD_MB must be at least 1"));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let s = Settings::from_lookup(lookup(&[])).unwrap();
    assert_eq!(s.bind_addr.to_string(), "127.0.0.1");
    assert_eq!(s.port, 8501);
    assert_eq!(s.max_upload_bytes, 200 * 1024 * 1024);
  }

  #[test]
  fn reads_overrides() {
    let s = Settings::from_lookup(lookup(&[
      ("BIND_ADDR", "0.0.0.0"),
      ("PORT", "9000"),
      ("MAX_UPLOAD_MB", "5"),
    ]))
    .unwrap();
    assert_eq!(s.bind_addr.to_string(), "0.0.0.0");
    assert_eq!(s.port, 9000);
    assert_eq!(s.max_upload_bytes, 5 * 1024 * 1024);
  }

  #[test]
  fn rejects_bad_values() {
    let err = Settings::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(err.to_string().contains("PORT"));
    let err: ConfigError = Settings::from_lookup(lookup(&[("PORT", "0")])).unwrap_err();
    assert_eq!(err.to_string(), "config: PORT cannot be 0");
    let err = Settings::from_lookup(lookup(&[("MAX_UPLOAD_MB", "0")])).unwrap_err();
    assert!(err.to_string().contains("MAX_UPLOAD_MB"));
    assert!(Settings::from_lookup(lookup(&[("BIND_ADDR", "localhost:1")])).is_err());
  }
}
