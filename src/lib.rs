//! Encore Venue Event Planning Server
//!
//! A Rust implementation of the Encore event-planning backend: property,
//! room, inventory, and labor-union administration plus the order
//! validation and labor requirement engine consumed by the planning
//! assistant.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
