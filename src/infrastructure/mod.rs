//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - In-memory gradebook store (store)
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Demo data (seed)
//! - Application state (state)

pub mod config;
pub mod seed;
pub mod server;
pub mod state;
pub mod store;

pub use state::AppState;
pub use store::InMemoryGradebookStore;
