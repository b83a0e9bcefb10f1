//! # Domain Models
//!
//! Plain configuration records consumed by the connection-factory builder.
//! Keep it lean: `serde` only, no I/O, no client types. Loading lives in `qpid-kernel`,
//! resolution in `qpid-autoconfigure`.

pub mod constants;
pub mod properties;
pub mod redact;
