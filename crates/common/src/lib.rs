//! Shared building blocks for the store API workspace: logging setup and
//! the small response payloads served by the health routes.

pub mod types;
pub mod utils;
