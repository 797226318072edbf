//! JSON API server exposing the genealogy engine to browser-based
//! renderers. The registry is loaded once and shared read-only; every
//! endpoint is a stateless query.

pub mod server;
