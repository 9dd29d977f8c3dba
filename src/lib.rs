//! pocket-budget - Terminal expense tracker
//!
//! This library provides the core functionality for the `pocket` command: a
//! list of expenses, a balance, per-category budget limits with traffic-light
//! health, a category chart, spending analytics and monthly history, and
//! CSV/JSON/YAML export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, the ledger state)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `reports`: Pure calculations over the ledger (totals, budgets, analytics)
//! - `forms`: Text-field forms shared by the CLI and TUI
//! - `display`: Projections and text rendering
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_budget::config::{paths::PocketPaths, settings::Settings};
//!
//! let paths = PocketPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::PocketError;
