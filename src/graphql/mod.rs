//! GraphQL query client: one configured transport and one response cache,
//! shared for the process lifetime.

mod client;
mod error;
mod request;
mod response;

pub use client::{ClientConfig, FetchPolicy, QueryClient};
pub use error::QueryError;
pub use request::GraphqlRequest;
pub use response::{GraphqlError, GraphqlResponse, parse_body};
