pub mod app;
pub mod config;
pub mod constants;
pub mod docs;
pub mod error;
pub mod methods;
pub mod shutdown;
pub mod state;
pub mod telemetry;

pub use app::{apply_middleware, build_router};
pub use state::AppState;
