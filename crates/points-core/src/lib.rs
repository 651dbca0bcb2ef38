//! Core types for House Points.
//!
//! Holds the canonical [`models::Record`] and [`models::House`] types, the
//! shared field dispatch used by every parser, format selection, CLI
//! settings and the workspace error type.

pub mod error;
pub mod formats;
pub mod models;
pub mod settings;

pub use error::{FieldError, PointsError, Result};
pub use formats::{InputFormat, ReportFormat};
pub use models::{Field, House, Record, RecordDraft};
