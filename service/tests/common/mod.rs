//! Shared test infrastructure for service integration tests.
//!
//! Provides [`TestServiceCtx`] which wires a tempdir-backed screenshot store
//! and a scripted capture engine into the full app, plus fluent helpers for
//! issuing requests and asserting on responses.

mod request;
mod response;

pub use ctx::*;
pub use request::*;
pub use response::*;
