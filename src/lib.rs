//! # cinerec
//!
//! An in-memory movie catalog API with content-based recommendations.
//!
//! cinerec serves small analytical queries over a fixed, pre-joined movie
//! dataset: release counts by month and weekday, title-based score and vote
//! lookups, actor/director aggregates, and TF-IDF content-based "similar
//! movie" recommendations.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cinerec --movies data/movies_reducido.csv --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use cinerec::prelude::*;
//!
//! let mut heat = CatalogEntry::new("Heat");
//! heat.genres = Some("Action Crime Drama".to_string());
//! let mut casino = CatalogEntry::new("Casino");
//! casino.genres = Some("Crime Drama".to_string());
//!
//! // Fit the vector space once over the full catalog
//! let recommender = Recommender::build(&[heat, casino]).unwrap();
//!
//! // Query it repeatedly, read-only
//! let similar = recommender.recommend("Heat", 5).unwrap();
//! assert_eq!(similar[0].title, "Casino");
//! ```
//!
//! ## Crate Structure
//!
//! cinerec is composed of several crates:
//!
//! - `cinerec-core` - Recommendation engine (document composition, TF-IDF
//!   vector space, cosine ranking)
//! - `cinerec-catalog` - CSV ingestion and in-memory catalog lookups
//! - `cinerec-api` - REST API
//!
//! ## Features
//!
//! - **Content-Based Recommendations**: TF-IDF vectors over composed
//!   per-movie documents, ranked by cosine similarity
//! - **Deterministic Vector Space**: built once at startup, reproducible
//!   byte-for-byte for a fixed corpus
//! - **Catalog Lookups**: release counts, scores, votes, actor and director
//!   aggregates
//! - **Read-Only Serving**: immutable shared state, no locks on the request
//!   path

// Re-export core types
pub use cinerec_core::{
    compose, CatalogEntry, Error, Recommendation, Recommender, Result, SparseVector, TfIdfModel,
};

// Re-export catalog
pub use cinerec_catalog::{
    ActorStats, CastEntry, CatalogStore, CrewEntry, DirectorFilm, DirectorFilms, MovieRecord,
    TitleScore, TitleVotes,
};

// Re-export API
pub use cinerec_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compose, ActorStats, CatalogEntry, CatalogStore, Error, MovieRecord, Recommendation,
        Recommender, Result, RestApi, SparseVector, TfIdfModel, TitleScore, TitleVotes,
    };
}
