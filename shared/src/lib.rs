// shared/src/lib.rs

use std::io;

/// Startup and serving failures. Request handling itself has no error path.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
