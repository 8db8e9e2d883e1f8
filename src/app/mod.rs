//! Application Layer
//!
//! Startup wiring, command line, logging, navigation and the interactive session.

pub mod application;
pub mod cli;
pub mod logging;
pub mod navigation;
pub mod shell;
