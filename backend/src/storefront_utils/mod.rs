pub mod config;
pub mod graphql_client;
pub mod raw_types;
