mod config;
mod models;
mod store;

pub use self::config::*;
pub use store::*;
