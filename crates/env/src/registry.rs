//! Environment ids.
//!
//! A [`Registry`] maps string ids to the configuration an environment is
//! built from. Callers own their registry and pass it where it is needed.

use crate::config::EnvConfig;
use crate::controlbot::ControlBotEnv;
use crate::error::EnvError;
use std::collections::BTreeMap;

pub const CONTROLBOT_V0: &str = "ControlBot-v0";

#[derive(Clone, Debug, Default)]
pub struct Registry {
    configs: BTreeMap<String, EnvConfig>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that knows [`CONTROLBOT_V0`] with the default constants.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(CONTROLBOT_V0, EnvConfig::default());
        registry
    }

    /// Bind `id` to `config`, returning the configuration it replaces.
    /// The config is validated when the environment is made, not here.
    pub fn register(&mut self, id: impl Into<String>, config: EnvConfig) -> Option<EnvConfig> {
        let id = id.into();
        tracing::debug!(%id, ?config, "registered environment");
        self.configs.insert(id, config)
    }

    #[must_use]
    pub fn config(&self, id: &str) -> Option<&EnvConfig> {
        self.configs.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    /// Build a fresh, never-reset environment for `id`.
    ///
    /// # Errors
    ///
    /// [`EnvError::UnknownEnv`] for unregistered ids, otherwise whatever
    /// [`ControlBotEnv::new`] reports for the stored configuration.
    pub fn make(&self, id: &str) -> Result<ControlBotEnv, EnvError> {
        let config = self
            .configs
            .get(id)
            .ok_or_else(|| EnvError::UnknownEnv(id.to_owned()))?;
        ControlBotEnv::new(*config)
    }
}
