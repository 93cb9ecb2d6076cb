//! Adapters - Implementations of the ports plus the HTTP surface.
//!
//! - `memory` - In-memory repositories for tests and local runs
//! - `postgres` - sqlx-backed repositories for production
//! - `http` - axum routes, handlers, and DTOs

pub mod http;
pub mod memory;
pub mod postgres;
