//! Core business logic module
//!
//! This module contains the target resolution and configuration-cascade
//! engine. Process execution and filesystem access live in
//! [`crate::infra`].
//!
//! # Submodules
//!
//! - [`config`] - Mobfile configuration store with seeded defaults
//! - [`device`] - Device configuration and connect/disconnect commands
//! - [`target`] - Target model and recursive dependency expansion
//! - [`resolver`] - Post-order dependency linearization
//! - [`orchestrator`] - Per-node/per-operation command dispatch
//! - [`options`] - Invocation flags and `--args` parsing

pub mod config;
pub mod device;
pub mod options;
pub mod orchestrator;
pub mod resolver;
pub mod target;
