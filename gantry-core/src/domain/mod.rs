//! Core domain types
//!
//! Normalized shapes for everything the platform's REST server returns.
//! The backend speaks camelCase JSON with millisecond-epoch timestamps;
//! these types absorb that wire format once so the rest of the workspace
//! works with `chrono` timestamps and closed enums.

pub mod attempt;
pub mod config;
pub mod job;
pub mod log;
pub mod task;
