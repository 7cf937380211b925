//! trivia-server: HTTP API behind the trivia game frontend
//!
//! Lists categories, pages/searches/creates/deletes questions and
//! hands out the next quiz question for a category.

pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};
