//! GraphQL layer: schema construction and the `/graphql` endpoint.
//!
//! The schema holds the [`RawgClient`] as context data, so every resolver
//! reaches upstream through the same injected transport.

pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use catalog_rawg::RawgClient;

use crate::state::AppState;
use query::QueryRoot;

/// The gateway's executable GraphQL schema type.
pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the RAWG client available to resolvers.
pub fn build_schema(client: Arc<RawgClient>) -> CatalogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(client)
        .finish()
}

/// POST /graphql -- execute a query.
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET /graphql -- interactive GraphiQL playground.
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Mount the GraphQL routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", get(graphiql).post(graphql_handler))
}
