use crate::common::{ConfigSnafu, Result, Store};

pub const ENV_PREFIX: &str = "MACHINES";

/// Registry configuration, read from `MACHINES_*` environment variables.
/// Nested keys are separated by `__`, e.g. `MACHINES_MEMORY__FIXTURE`.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub memory: crate::memory::Config,
}

impl Config {
    pub fn environment() -> ::config::Environment {
        ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    pub fn from_env() -> Result<Self> {
        Self::load(Self::environment())
    }

    pub fn load(env: ::config::Environment) -> Result<Self> {
        ::config::Config::builder()
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|err| {
                ConfigSnafu {
                    message: err.to_string(),
                    prefix: ENV_PREFIX,
                }
                .build()
            })
    }

    pub fn into_store(self) -> Result<Box<dyn Store>> {
        let store = crate::memory::MemoryStore::try_from(self.memory)?;
        tracing::debug!("Store configured");
        Ok(Box::new(store))
    }
}
