use std::sync::Arc;

use crate::constants::DEFAULT_GREETING;

#[derive(Clone)]
pub struct AppState {
    pub greeting: Arc<str>,
    pub env: String,
}

impl AppState {
    pub fn new(greeting: &str, env: &str) -> Self {
        Self {
            greeting: Arc::from(greeting),
            env: env.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING, "test")
    }
}
