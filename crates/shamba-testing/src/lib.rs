//! Test utilities for Shamba services.
//!
//! Provides `TestToken` for minting bearer credentials in router-level tests.
//! Import in `#[cfg(test)]` blocks and `tests/` harnesses only — never in
//! production code.

pub mod auth;
