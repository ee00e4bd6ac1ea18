//! Normalizer configuration.

use crate::{
    error::SpecError,
    spec::{self, SpecData},
};
use figment::{
    Figment, Provider,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::Arc};

/// Optional configuration file in the working directory.
pub const CONFIG_FILE: &str = "ens-normalize.toml";

/// Prefix of the configuration environment variables, e.g. `ENS_NORMALIZE_SPEC`.
pub const ENV_PREFIX: &str = "ENS_NORMALIZE_";

/// Where the rule tables come from.
///
/// Serialized as the string `embedded` or a path to a `spec.json` file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpecSource {
    /// The tables compiled into the crate.
    #[default]
    Embedded,
    Path(PathBuf),
}

impl SpecSource {
    /// Loads the tables.
    pub fn load(&self) -> Result<Arc<SpecData>, SpecError> {
        match self {
            Self::Embedded => spec::embedded(),
            Self::Path(path) => {
                debug!(path = %path.display(), "loading spec data");
                SpecData::from_path(path).map(Arc::new)
            }
        }
    }
}

impl From<String> for SpecSource {
    fn from(s: String) -> Self {
        if s.is_empty() || s == "embedded" { Self::Embedded } else { Self::Path(s.into()) }
    }
}

impl From<SpecSource> for String {
    fn from(source: SpecSource) -> Self {
        match source {
            SpecSource::Embedded => "embedded".to_string(),
            SpecSource::Path(path) => path.to_string_lossy().into_owned(),
        }
    }
}

/// Configuration of a [`Normalizer`](crate::Normalizer).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub spec: SpecSource,
}

impl NormalizerConfig {
    /// Defaults, then [`CONFIG_FILE`], then `ENS_NORMALIZE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the configuration from [`NormalizerConfig::figment`].
    pub fn load() -> Result<Self, SpecError> {
        Self::try_from(Self::figment())
    }

    /// Extracts the configuration from `provider`.
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, SpecError> {
        let figment = Figment::from(provider);
        trace!("load config with provider: {:?}", figment.metadata().collect::<Vec<_>>());
        figment.extract().map_err(|err| SpecError::Config(Box::new(err)))
    }

    pub fn with_spec(mut self, spec: SpecSource) -> Self {
        self.spec = spec;
        self
    }
}
