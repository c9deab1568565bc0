//! Claims-file ingestion and per-city profitability analysis.
//!
//! The crate reads a comma-delimited claims export, normalizes each row into
//! a typed [`ClaimRecord`](pipeline::ClaimRecord), classifies rejection
//! remarks against an ordered rule table, folds the records into per-city
//! performance aggregates, and recommends one city for closure. Callers hand
//! in a path or any `io::Read` and receive a structured
//! [`AnalysisOutcome`](pipeline::AnalysisOutcome); rendering is left to them.

pub mod config;
pub mod pipeline;

pub use config::{AnalysisConfig, ClassifierConfig, ClassifierRule, ScoringConfig};
pub use pipeline::{
    AnalysisOutcome, ClaimsAnalysis, ClaimsImporter, IngestError, RejectionClassifier,
};
