//! Shared test fixtures for nodesieve crates.
//!
//! This crate provides filter implementations for testing the composition
//! algebra. It depends only on `nodesieve-core` and is meant to be consumed
//! as a dev-dependency, never a regular one.
//!
//! - [`spy`] - call-counting filter wrapper for proving short-circuit
//!   behavior
//! - [`numeric`] - integer leaf filters, demonstrating that the filter
//!   contract is not tied to the document content model
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! nodesieve-test = { workspace = true }
//! ```

pub mod numeric;
pub mod spy;

// Re-export commonly used fixtures at crate root for convenience
pub use numeric::{IsEven, IsPositive};
pub use spy::SpyFilter;
