//! # Engine Module
//!
//! The assignment engine: configuration, error types, progress reporting, and
//! the individual computational stages.
//!
//! ## Overview
//!
//! Given backbone residues and their chain breaks, the engine builds the
//! hydrogen-bond network, detects helical turns and beta bridges from it, and
//! resolves the competing signals into helix, strand or coil. The stages in
//! [`tasks`] are stateless and may also be called individually for diagnostics.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Distance cut-offs and bridge/bulge limits, with TOML loading
//! - **Error Handling** ([`error`]) - Engine-level errors wrapping model and configuration failures
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for callers that display progress
//! - **Computational Stages** ([`tasks`]) - Bond network, helix, bridge and labeling passes

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
