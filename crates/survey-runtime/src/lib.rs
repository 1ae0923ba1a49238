//! Runtime layer for Survey Insights.
//!
//! Owns the cached survey table between requests and hands reports to the
//! presentation layer.

pub mod data_manager;

pub use survey_core as core;
pub use survey_data as data;
