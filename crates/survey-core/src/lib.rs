//! Core types for survey insights: the response-row model, the fixed question
//! vocabulary, text cleaning, answer classification and shared formatting.

pub mod classifier;
pub mod error;
pub mod formatting;
pub mod models;
pub mod questions;
pub mod settings;
pub mod text;
pub mod time_utils;

pub use error::{Result, SurveyError};
