#![forbid(unsafe_code)]

//! Core domain model and business logic for the Swoldier workout generator.
//!
//! This crate provides:
//! - Domain types (muscle groups, splits, goals, schemes, workouts)
//! - The reference catalog of exercise pools
//! - The generation engine
//! - Selection rules for the group picker
//! - Persistence (history store, profile, CSV export)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod engine;
pub mod selection;
pub mod store;
pub mod history;
pub mod profile;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use engine::{generate, GenerateOptions, DEFAULT_EXERCISES_PER_GROUP};
pub use selection::{check_arity, Selection, MAX_SELECTED_GROUPS};
pub use store::{HistoryStore, JsonlHistoryStore};
pub use history::{complete_workout, group_by_month, HistoryQuery, HistoryStats};
pub use export::export_csv;
