//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Article parameters form (draft, apply, reset, open state)

pub mod params_form;
