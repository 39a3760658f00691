//! Service configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use insight_engine::Config;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
  pub var: &'static str,
  pub value: String,
  pub reason: String,
}

/// Bind address plus engine overrides.
#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub host: IpAddr,
  pub port: u16,
  pub engine: Config,
}

impl ServerConfig {
  /// `INSIGHT_HOST` (default 127.0.0.1), `PORT` (default 8000),
  /// `INSIGHT_SCOPE_MULTIPLIER` (default from the engine config).
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let host = parse_var(&lookup, "INSIGHT_HOST")?.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
    let port = parse_var(&lookup, "PORT")?.unwrap_or(8000);

    let mut engine = Config::default();
    if let Some(multiplier) = parse_var::<u64, _>(&lookup, "INSIGHT_SCOPE_MULTIPLIER")? {
      if multiplier == 0 {
        return Err(ConfigError {
          var: "INSIGHT_SCOPE_MULTIPLIER",
          value: multiplier.to_string(),
          reason: "must be at least 1".into(),
        });
      }
      engine.scope_multiplier = multiplier;
    }

    Ok(Self { host, port, engine })
  }

  pub fn addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
  F: Fn(&str) -> Option<String>,
{
  let Some(value) = lookup(var) else {
    return Ok(None);
  };
  match value.trim().parse::<T>() {
    Ok(parsed) => Ok(Some(parsed)),
    Err(e) => Err(ConfigError {
      var,
      reason: e.to_string(),
      value,
    }),
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
  fn defaults_without_env() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.addr().to_string(), "127.0.0.1:8000");
    assert_eq!(config.engine.scope_multiplier, 2);
  }

  #[test]
  fn overrides_from_env() {
    let config = ServerConfig::from_lookup(lookup(&[
      ("INSIGHT_HOST", "0.0.0.0"),
      ("PORT", "9100"),
      ("INSIGHT_SCOPE_MULTIPLIER", "3"),
    ]))
    .unwrap();
    assert_eq!(config.addr().to_string(), "0.0.0.0:9100");
    assert_eq!(config.engine.scope_multiplier, 3);
  }

  #[test]
  fn invalid_port_names_the_variable() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err.var, "PORT");
    assert!(err.to_string().contains("eighty"));
  }

  #[test]
  fn zero_multiplier_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("INSIGHT_SCOPE_MULTIPLIER", "0")])).unwrap_err();
    assert_eq!(err.var, "INSIGHT_SCOPE_MULTIPLIER");
  }
}
