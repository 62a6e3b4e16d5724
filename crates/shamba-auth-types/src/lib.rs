//! Auth types shared across Shamba crates.
//!
//! Provides JWT validation and the bearer-token `Identity` extractor.

pub mod identity;
pub mod token;
