//! Step definitions for test command scenarios.

pub mod steps;
pub mod world;
