pub mod api_client;
pub mod executor;
pub mod graphql_response;
