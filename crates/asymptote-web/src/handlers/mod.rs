//! HTTP handlers for all routes.

pub mod analyze;
pub mod health;
pub mod index;
