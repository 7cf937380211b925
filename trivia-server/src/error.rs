//! Error types for trivia-server

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside of request handling (startup, migrations, serving)
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
