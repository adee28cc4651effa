//! Domain models for the student directory.
//!
//! This module contains the student record with its field bounds, the
//! query predicates used to search the directory, and configuration.

/// Student records and field validation.
pub mod student;
pub use student::{sample_students, Student, ValidationError};

/// Predicates over student records.
pub mod query;
pub use query::Query;

mod config;
pub use config::{Config, CONFIG_FILE};
