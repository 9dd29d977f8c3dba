//! Configuration module for pocket-budget
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence
//! - Balance policy, panel flags and export defaults

pub mod paths;
pub mod settings;

pub use paths::PocketPaths;
pub use settings::{BalancePolicy, ExportFormat, ExportSettings, PanelSettings, Settings};
