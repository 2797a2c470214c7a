//! HTTP interface module
//!
//! Exposes the store over HTTP under `/v1/{key}`.
//! Handlers only translate between requests and [`Store`](crate::store::Store) calls.

mod server;
mod handlers;

pub use server::{router, router_with_state, serve, run};
pub use handlers::{key_from_uri, status_for, SharedStore, KEY_PREFIX};
