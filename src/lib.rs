//! Hello Boto — Shared Library
//!
//! This crate contains the invocation handler and the two capabilities
//! it depends on: the simulated-latency delay strategy and the SDK
//! version provider.
//!
//! Each Lambda function in `api/` imports from this library
//! to keep entry points thin and the handler testable.

pub mod delay;
pub mod error;
pub mod handler;
pub mod response;
pub mod sdk;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
