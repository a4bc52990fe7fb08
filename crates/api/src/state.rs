use std::sync::Arc;

use crate::config::ServerConfig;
use crate::graphql::CatalogSchema;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the schema is internally reference-counted and
/// the config sits behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The executable GraphQL schema, with the RAWG client attached as data.
    pub schema: CatalogSchema,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
