#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Marketscan Core Library
//!
//! Domain types, errors, artifact storage and text scoring shared by the
//! marketscan pipeline stages and CLI.

pub mod error;
pub mod ids;
pub mod sentiment;
pub mod store;
pub mod text;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use ids::RunId;
pub use sentiment::SentimentAnalyzer;
pub use store::ArtifactStore;
