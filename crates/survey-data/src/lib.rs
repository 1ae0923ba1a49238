//! Data layer for Survey Insights.
//!
//! Reads the survey export (spreadsheet or CSV), validates its columns, runs
//! the normalize → explode → classify pipeline and computes the summary tables
//! and KPIs the presentation layer renders.

pub mod aggregator;
pub mod analysis;
pub mod exploder;
pub mod filter;
pub mod pipeline;
pub mod quality;
pub mod reader;
pub mod schema;

pub use survey_core as core;
