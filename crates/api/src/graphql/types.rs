//! GraphQL object types exposed by the gateway.
//!
//! Each type wraps the corresponding REST model from [`catalog_rawg`] and
//! maps its fields explicitly, including the renames the public schema
//! promises: `background_image` becomes `backgroundImage` and
//! `description_raw` becomes `description`.  The platform requirement fields
//! keep their upstream snake_case names.

use async_graphql::Object;
use catalog_rawg::models;

/// A game in the catalog.
pub struct Game(pub models::Game);

#[Object]
impl Game {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Average review score, stringified as the public schema declares it.
    async fn rating(&self) -> Option<String> {
        self.0.rating.map(|r| r.to_string())
    }

    async fn released(&self) -> &str {
        &self.0.released
    }

    async fn background_image(&self) -> Option<&str> {
        self.0.background_image.as_deref()
    }

    async fn description(&self) -> Option<&str> {
        self.0.description_raw.as_deref()
    }

    async fn playtime(&self) -> i32 {
        self.0.playtime
    }

    async fn platforms(&self) -> Vec<PlatformContainer> {
        self.0
            .platforms
            .iter()
            .cloned()
            .map(PlatformContainer)
            .collect()
    }
}

/// Association between a game and a platform, carrying optional minimum
/// system-requirements text for two locales.
pub struct PlatformContainer(pub models::PlatformContainer);

#[Object]
impl PlatformContainer {
    #[graphql(name = "requirements_en")]
    async fn requirements_en(&self) -> Option<Requirements> {
        self.0.requirements_en.clone().map(Requirements)
    }

    #[graphql(name = "requirements_ru")]
    async fn requirements_ru(&self) -> Option<Requirements> {
        self.0.requirements_ru.clone().map(Requirements)
    }

    async fn platform(&self) -> Platform {
        Platform(self.0.platform.clone())
    }
}

/// Minimum system-requirements text for one locale.
pub struct Requirements(pub models::Requirements);

#[Object]
impl Requirements {
    async fn minimum(&self) -> Option<&str> {
        self.0.minimum.as_deref()
    }
}

/// A platform games can be released on.
pub struct Platform(pub models::Platform);

#[Object]
impl Platform {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    #[graphql(name = "games_count")]
    async fn games_count(&self) -> i32 {
        self.0.games_count
    }
}
