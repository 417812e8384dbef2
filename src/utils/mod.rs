// Utility functions shared across the crate

pub mod distance;
pub mod log;
