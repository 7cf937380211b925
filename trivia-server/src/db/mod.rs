//! Database layer - connection pool, schema, repositories and seed data
//!
//! Handlers only see the `TriviaRepository` trait. `PgRepository` backs it
//! with PostgreSQL; `MemoryRepository` keeps everything in process for
//! tests and `serve --in-memory`.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use memory::MemoryRepository;
pub use pool::{create_pool, create_pool_with_settings, PoolSettings};
pub use repos::{DbError, PgRepository, TriviaRepository};
