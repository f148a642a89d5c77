//! Shared contracts for the records admin console.
//!
//! Everything in this crate is plain Rust with no browser dependencies:
//! the static table registry, the canned query catalog, row display
//! helpers, the client-side search filter and form draft validation.
//! The frontend crate consumes these; unit tests run on the host.

pub mod draft;
pub mod filter;
pub mod queries;
pub mod registry;
pub mod row;
