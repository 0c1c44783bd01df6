//! CLI tool for inspecting consistent hash rings.
//!
//! Provides commands for:
//! - Printing the ring layout
//! - Looking up key owners and replica sets
//! - Reporting per-node ownership
//! - Running a scripted membership demo

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

pub use commands::Command;
pub use config::CliConfig;
