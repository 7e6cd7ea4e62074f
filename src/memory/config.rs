use std::path::PathBuf;

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Config {
    /// JSON file used to seed the store on startup.
    pub fixture: Option<PathBuf>,
}
