//! Infrastructure layer
//!
//! Handles all I/O operations: mobfile discovery on disk and external
//! process execution. This module is the only place where side effects
//! beyond terminal output occur.

pub mod discovery;
pub mod runner;
