//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (option sets, ArticleState, Messages)
//! - `controllers/` - Orchestration (the parameters form state container)
//! - `services/` - Business operations (config, article loading)
//! - `infrastructure/` - External integrations (error, tracing)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::params_form::ParamsForm;
pub use domain::{ArticleField, ArticleOption, ArticleState, ArticleStyle, Message};
pub use infrastructure::error::{AppError, Result};
pub use services::article::Article;
pub use services::config::AppConfig;
