//! Common utilities
//!
//! This module contains shared utility functions and helpers:
//! - Logging configuration
//! - Panic handling

pub mod logging;
pub mod panic;

pub use logging::initialize_logging;
pub use panic::initialize_panic_handler;
