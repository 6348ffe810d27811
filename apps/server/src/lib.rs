pub mod api;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod state;

pub use state::{build_state, init_tracing, AppState};
