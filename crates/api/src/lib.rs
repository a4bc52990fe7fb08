//! Catalog gateway API server library.
//!
//! Exposes the building blocks (config, state, GraphQL schema, routes) so
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod graphql;
pub mod routes;
pub mod state;
