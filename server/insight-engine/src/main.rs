//! Binary entrypoint: read one RepoRequest JSON object from stdin, write the
//! InsightBundle (health, completion, team) to stdout.
//!
//! Invalid input produces an ErrorOutput object instead and exit code 1.
//! Logs go to stderr (`RUST_LOG`, default `info`) so stdout stays pure JSON.

use std::io::{self, Read, Write};

use chrono::Utc;
use insight_engine::types::ErrorOutput;
use insight_engine::{Engine, EngineError, RepoRequest};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(io::stderr)
    .init();

  match run_binary() {
    Ok(()) => {}
    Err(RunError::Io(e)) => {
      tracing::error!("read/write error: {}", e);
      std::process::exit(1);
    }
    Err(RunError::Engine(e)) => {
      let err = match &e {
        EngineError::Validation { index, field, reason } => ErrorOutput::new(reason.clone())
          .with_field(field.clone())
          .with_index(*index),
        _ => ErrorOutput::new(e.to_string()),
      };
      let mut out = io::stdout().lock();
      let _ = serde_json::to_writer(&mut out, &err);
      let _ = writeln!(out);
      std::process::exit(1);
    }
  }
}

enum RunError {
  Io(io::Error),
  Engine(EngineError),
}

fn run_binary() -> Result<(), RunError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw).map_err(RunError::Io)?;
  let request: RepoRequest =
    serde_json::from_str(&raw).map_err(|e| RunError::Engine(EngineError::from(e)))?;

  let engine = Engine::with_defaults();
  let bundle = engine.insights(&request, Utc::now()).map_err(RunError::Engine)?;
  tracing::info!(commits = request.commits.len(), authors = bundle.team.len(), "insights computed");

  let json = serde_json::to_vec(&bundle).map_err(|e| RunError::Engine(EngineError::from(e)))?;
  let mut out = io::stdout().lock();
  out.write_all(&json).map_err(RunError::Io)?;
  writeln!(out).map_err(RunError::Io)?;
  Ok(())
}
