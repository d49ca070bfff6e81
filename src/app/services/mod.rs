//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Startup configuration
//! - Article loading

pub mod article;
pub mod config;
