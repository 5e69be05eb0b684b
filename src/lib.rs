//! `slcsp` library crate.
//!
//! Resolves the second-lowest-cost Silver plan (SLCSP) premium for a list of
//! ZIP codes. The binary (`slcsp`) is a thin wrapper around this library so
//! that the resolution logic is testable without spawning processes.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod resolve;
