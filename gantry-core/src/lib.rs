//! Gantry Core
//!
//! Core types and abstractions for the Gantry job platform client.
//!
//! This crate contains:
//! - Domain types: normalized representations of platform entities
//!   (jobs, attempts, tasks, container logs, job configuration)
//! - Presentation helpers: duration and timestamp display strings

pub mod domain;
pub mod fmt;
