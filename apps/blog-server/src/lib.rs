//! # Blog Server
//!
//! Actix-web front end for the post service.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use state::AppState;
