//! Typed REST client for the RAWG video-game catalog API.
//!
//! [`RawgClient`] builds the upstream URLs (API key, page size, release
//! window) and decodes the JSON bodies into the models in [`models`].  The
//! actual network GET sits behind the [`HttpFetch`] trait so the server and
//! its tests can inject either a real [`reqwest`]-backed fetcher or a canned
//! double.

pub mod client;
pub mod models;

pub use client::{GamesQuery, HttpFetch, RawgClient, RawgError, ReqwestFetch, DEFAULT_BASE_URL};
