//! Data layer for House Points.
//!
//! Parses the five record encodings, loads record files from disk,
//! aggregates points per house and writes the ranked reports.

pub mod aggregator;
pub mod parsers;
pub mod query;
pub mod reader;
pub mod writer;

pub use points_core as core;
