//! SQLite storage implementation for pricevault.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `pricevault-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for assets, prices, raw records and
//!   checkpoints
//! - The transactional ingest store and the read-side query store
//!
//! This crate is the only place in the application where Diesel exists.
//! `pricevault-core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod assets;
pub mod checkpoints;
pub mod ingest;
pub mod prices;
pub mod query;
pub mod raw_data;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from pricevault-core for convenience
pub use pricevault_core::errors::{DatabaseError, Error, Result};
