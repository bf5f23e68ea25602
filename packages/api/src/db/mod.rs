//! # Database module — PostgreSQL connection pool
//!
//! A lazy, process-wide pool behind a [`tokio::sync::OnceCell`]. The first call to
//! [`get_pool`] reads [`crate::settings::Settings`], opens the pool with
//! `database.connections` connections, and caches it for every later caller.
//! Migrations live in `packages/api/migrations` and are run by the web server at
//! start-up.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
