//! Second-lowest-cost plan resolution.
//!
//! One implementation, used by both the CLI pipeline and the tests.

pub mod resolver;

pub use resolver::*;
