//! Utility modules for common functionality.
//!
//! This module contains utility functions and helpers used throughout
//! the application, currently logging configuration.

pub mod logger;
