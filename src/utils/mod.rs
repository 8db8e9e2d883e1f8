//! Utilities - formatting and file exports

pub mod export;
pub mod format;
