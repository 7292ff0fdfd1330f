//! Foundation types for termfolio.
//!
//! This crate contains the host-agnostic types shared by all termfolio
//! crates: input events, configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
