//! GitHub GraphQL contribution calendar interface
//!
//! - Query text and request envelope in `index`
//! - Typed response envelope in `response`
//! - `GraphQLTransport` is the single outbound capability; `HttpTransport` backs it with reqwest

pub mod index;
pub mod response;
pub mod transport;
