//! Application layer - Command and query handlers.
//!
//! Each operation the service exposes has one handler that wires domain
//! logic to the ports it needs. Handlers own no business rules beyond
//! orchestration order.

pub mod handlers;
