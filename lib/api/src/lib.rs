//! # cinerec API
//!
//! REST layer for cinerec. Exposes the catalog lookup routes and the
//! recommendation endpoint over actix-web; all handlers read from immutable
//! shared state built at startup.

pub mod rest;

pub use rest::{AppState, RestApi};
