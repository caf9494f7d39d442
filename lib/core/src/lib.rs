//! # cinerec Core
//!
//! Core library for the cinerec recommendation engine.
//!
//! This crate provides the content-based recommendation pipeline:
//!
//! - [`CatalogEntry`] - The per-movie attributes the engine consumes
//! - [`compose`] - Feature composition of one entry into a text document
//! - [`TfIdfModel`] - TF-IDF vocabulary and per-entry sparse vectors
//! - [`SparseVector`] - Sparse vector with cosine similarity
//! - [`Recommender`] - Top-K similarity ranking over the fitted space
//!
//! ## Example
//!
//! ```rust
//! use cinerec_core::{CatalogEntry, Recommender};
//!
//! let mut heat = CatalogEntry::new("Heat");
//! heat.genres = Some("Action Crime Drama".to_string());
//! let mut casino = CatalogEntry::new("Casino");
//! casino.genres = Some("Crime Drama".to_string());
//! let mut toy_story = CatalogEntry::new("Toy Story");
//! toy_story.genres = Some("Animation Comedy Family".to_string());
//!
//! // Fit the vector space once over the full catalog
//! let recommender = Recommender::build(&[heat, casino, toy_story]).unwrap();
//!
//! // Query it repeatedly, read-only
//! let similar = recommender.recommend("Heat", 1).unwrap();
//! assert_eq!(similar[0].title, "Casino");
//! ```

pub mod document;
pub mod error;
pub mod recommender;
pub mod tfidf;
pub mod vector;

pub use document::{compose, CatalogEntry};
pub use error::{Error, Result};
pub use recommender::{Recommendation, Recommender};
pub use tfidf::TfIdfModel;
pub use vector::SparseVector;
