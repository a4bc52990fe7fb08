//! Serde views over the RAWG API's JSON bodies.
//!
//! Only the fields the gateway exposes are modelled; everything else in the
//! upstream payload is ignored.  Fields the public schema promises to be
//! non-null are plain (non-`Option`) here, so an upstream body that omits
//! one fails to decode instead of silently producing a null.

use serde::Deserialize;

/// Paginated list envelope returned by the RAWG collection endpoints.
///
/// Upstream also sends `count`, `next` and `previous`; the gateway never
/// paginates, so only `results` is read.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
}

/// A single game, as returned by both the list and detail endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Game {
    pub id: i32,
    pub name: String,
    /// Average review score.  Upstream sends a JSON number.
    pub rating: Option<f64>,
    /// Release date, `YYYY-MM-DD`.
    pub released: String,
    pub background_image: Option<String>,
    /// Plain-text description.  Only the detail endpoint includes it.
    pub description_raw: Option<String>,
    /// Total recorded playtime in hours.
    pub playtime: i32,
    pub platforms: Vec<PlatformContainer>,
}

/// Association between a game and one platform it runs on.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformContainer {
    pub platform: Platform,
    pub requirements_en: Option<Requirements>,
    pub requirements_ru: Option<Requirements>,
}

/// Minimum system-requirements text for one locale.
#[derive(Debug, Clone, Deserialize)]
pub struct Requirements {
    pub minimum: Option<String>,
}

/// A platform in the RAWG catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Platform {
    pub id: i32,
    pub name: String,
    pub games_count: i32,
}
