//! Shared, read-only service state.

use sentiment_engine::Engine;

use crate::config::Settings;

pub struct AppState {
  pub engine: Engine,
  pub settings: Settings,
}

impl AppState {
  pub fn new(settings: Settings) -> Self {
    Self {
      engine: Engine::with_defaults(),
      settings,
    }
  }
}
