//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Article parameter option sets
//! - Article state and its resolved display style
//! - Message types for the event system

pub mod article_state;
pub mod messages;
pub mod options;
pub mod style;

pub use article_state::{ArticleField, ArticleState};
pub use messages::Message;
pub use options::{ArticleOption, find_option};
pub use style::{ArticleStyle, FontFace};
