//! Ambient service plumbing shared across Shamba services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
