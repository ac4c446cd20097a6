//! Review Sentiment Engine — deterministic, lexicon-based (no model files).
//!
//! Loads an uploaded CSV/XLSX table, finds the review column, labels every
//! review Positive/Negative/Neutral, summarizes the label distribution, picks
//! a business insight and writes the annotated table back out.
//!
//! No AI, no DB, no network; pure computation on one table per call.

pub mod aggregate;
pub mod classifier;
pub mod column;
pub mod config;
pub mod csv_codec;
pub mod engine;
pub mod error;
pub mod format;
pub mod insight;
pub mod lexicon;
pub mod table;
pub mod types;
pub mod xlsx_codec;

pub use aggregate::Distribution;
pub use config::EngineConfig;
pub use engine::{Analysis, Engine};
pub use error::AnalysisError;
pub use format::{load_table, write_table, TableFormat};
pub use insight::Insight;
pub use table::{Cell, Table};
pub use types::{Report, SentimentLabel};
