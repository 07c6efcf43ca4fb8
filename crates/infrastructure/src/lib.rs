//! Ferronote Infrastructure Layer
//!
//! Adapters behind the application ports: SQLite persistence, the Redis
//! cache store with its connection supervisor, dependency probes, and
//! system introspection.
pub mod cache;
pub mod database;
pub mod probes;
pub mod repositories;
pub mod system;
