//! Error types for the swoldier_core library.

use crate::SplitType;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for swoldier_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Split type is not one of the known training philosophies
    #[error("Invalid split type: {0}")]
    InvalidSplit(String),

    /// Selected group is not a key of the split's catalog cell
    #[error("Unknown group '{group}' for split {split}")]
    UnknownGroup { split: SplitType, group: String },

    /// Goal is not recognized or has no scheme
    #[error("Unknown goal: {0}")]
    UnknownGoal(String),

    /// No groups were selected
    #[error("Select at least one muscle group")]
    EmptySelection,

    /// Selection violates the per-split arity rule
    #[error("Selection error: {0}")]
    Selection(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),
}
