//! # cinerec Catalog
//!
//! Dataset layer for cinerec: CSV ingestion of the pre-joined movie tables
//! and the in-memory [`CatalogStore`] serving the simple lookup operations
//! (release counts by month/weekday, title score and votes, actor and
//! director aggregates).
//!
//! Everything is loaded once at startup; the store is immutable afterwards.

pub mod loader;
pub mod record;
pub mod store;

pub use loader::{load_cast, load_crew, load_movies};
pub use record::{CastEntry, CrewEntry, MovieRecord};
pub use store::{
    ActorStats, CatalogStore, DirectorFilm, DirectorFilms, TitleScore, TitleVotes,
};
