#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod beautify;
pub mod config;
mod error;
pub mod mapper;
pub mod namehash;
mod normalizer;
pub mod resolver;
pub mod spec;
pub mod tokenizer;
pub mod validator;

pub use config::{NormalizerConfig, SpecSource};
pub use error::{ErrorKind, NormalizeError, SpecError};
pub use namehash::{labelhash, namehash};
pub use normalizer::{LabelError, LabelInfo, Normalizer, ProcessedName, TokenInfo};
pub use spec::SpecData;
pub use validator::{LabelType, ValidatedLabel};

/// Normalizes `name` with the embedded tables.
pub fn normalize(name: &str) -> Result<String, NormalizeError> {
    embedded()?.normalize(name)
}

/// Beautifies `name` with the embedded tables.
pub fn beautify(name: &str) -> Result<String, NormalizeError> {
    embedded()?.beautify(name)
}

fn embedded() -> Result<Normalizer, NormalizeError> {
    Normalizer::embedded().map_err(|err| {
        error!(%err, "failed to load embedded spec data");
        NormalizeError::Unknown("spec data unavailable")
    })
}
