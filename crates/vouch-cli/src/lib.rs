//! Vouch CLI library
//!
//! Argument types and command implementations for the `vouch` binary,
//! split out so they can be tested without spawning a process.

pub mod session_args;
pub mod tracing_init;
pub mod verify_cmd;
