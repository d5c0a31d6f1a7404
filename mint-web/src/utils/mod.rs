//! Utilities

pub mod constants;
pub mod task;
