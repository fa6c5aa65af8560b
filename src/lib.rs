//! Mindweave - Offline Mind-Map Generation
//!
//! Converts one plain-text document (typically text extracted from a PDF)
//! into a `{nodes, edges, confidence, metadata}` graph using entirely local
//! statistical NLP: TF-IDF keyword extraction, RAKE-style keyphrase scoring,
//! sentence-similarity analysis, co-occurrence clustering, and radial layout.
//! No LLM calls, no persistence, no shared state between invocations.

pub mod analysis;
pub mod cli;
pub mod clustering;
pub mod config;
pub mod error;
pub mod extraction;
pub mod graph;
pub mod hierarchy;
pub mod layout;
pub mod pipeline;
pub mod preprocess;
pub mod similarity;
pub mod structure;

pub use config::MindMapConfig;
pub use error::{MindweaveError, Result};
pub use graph::MindMap;
pub use pipeline::MindMapGenerator;
