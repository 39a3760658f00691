//! Shared, read-only application state.

use insight_engine::Engine;

pub struct AppState {
  pub engine: Engine,
}
