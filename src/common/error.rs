use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{kind} {uuid} not found"))]
    NotFoundError { kind: String, uuid: String },
    #[snafu(display("{message}"))]
    ValidationError { message: String },
    #[snafu(display("{kind} named {name} already exists"))]
    ConflictError { kind: String, name: String },
    #[snafu(display("{store}: {message}: {source}"))]
    StoreError {
        store: String,
        message: String,
        source: Box<dyn std::error::Error>,
    },
    #[snafu(display("Invalid configuration for {prefix}: {message}"))]
    ConfigError { message: String, prefix: String },
}

pub type Result<T> = std::result::Result<T, Error>;
