//! minimal-api - a minimal HTTP API demonstration
//!
//! Wires up an axum host with:
//! - three GET endpoints (`/example`, `/demo`, `/actionresults`) and a health probe
//! - a request-scoped placeholder service
//! - generated OpenAPI docs with Swagger UI
//! - layered configuration (file + environment) and structured logging

pub mod api;
pub mod config;
pub mod error;
pub mod service;

pub use error::{Error, Result};
