//! The name pipeline.

use crate::{
    beautify::beautified_chars,
    config::NormalizerConfig,
    error::{ErrorKind, NormalizeError, SpecError},
    namehash::namehash,
    spec::{self, SpecData},
    tokenizer::{Token, Tokenizer},
    validator::{ValidatedLabel, validate_label},
};
use alloy_primitives::B256;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Presentation {
    Canonical,
    Beautified,
}

/// Normalizes names against a set of rule tables.
///
/// Cheap to clone; the tables are shared.
#[derive(Clone, Debug)]
pub struct Normalizer {
    spec: Arc<SpecData>,
}

impl Normalizer {
    pub fn new(spec: Arc<SpecData>) -> Self {
        Self { spec }
    }

    /// A normalizer over the embedded tables.
    pub fn embedded() -> Result<Self, SpecError> {
        spec::embedded().map(Self::new)
    }

    /// A normalizer over the tables selected by `config`.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self, SpecError> {
        config.spec.load().map(Self::new)
    }

    pub fn spec(&self) -> &Arc<SpecData> {
        &self.spec
    }

    /// Returns the canonical form of `name`.
    pub fn normalize(&self, name: &str) -> Result<String, NormalizeError> {
        self.render(name, Presentation::Canonical)
    }

    /// Returns the display form of `name`.
    pub fn beautify(&self, name: &str) -> Result<String, NormalizeError> {
        self.render(name, Presentation::Beautified)
    }

    /// [`Normalizer::normalize`] over raw bytes.
    pub fn normalize_bytes(&self, name: &[u8]) -> Result<String, NormalizeError> {
        self.normalize(decode(name)?)
    }

    /// [`Normalizer::beautify`] over raw bytes.
    pub fn beautify_bytes(&self, name: &[u8]) -> Result<String, NormalizeError> {
        self.beautify(decode(name)?)
    }

    /// Normalizes `name` and returns its EIP-137 node.
    pub fn namehash(&self, name: &str) -> Result<B256, NormalizeError> {
        self.normalize(name).map(|name| namehash(&name))
    }

    /// Tokenizes and validates a single label.
    pub fn validate_label(&self, label: &str) -> Result<ValidatedLabel<'_>, NormalizeError> {
        validate_label(&self.spec, Tokenizer::new(&self.spec, label))
    }

    fn render(&self, name: &str, presentation: Presentation) -> Result<String, NormalizeError> {
        let labels = name
            .split('.')
            .enumerate()
            .map(|(index, label)| {
                self.validate_label(label).inspect_err(|err| {
                    debug!(index, label, %err, "rejected label");
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rendered = |label: &ValidatedLabel<'_>| -> usize {
            match presentation {
                Presentation::Canonical => label.normalized_chars().map(char::len_utf8).sum(),
                Presentation::Beautified => {
                    beautified_chars(&self.spec, label).map(char::len_utf8).sum()
                }
            }
        };
        let len = labels.iter().map(rendered).sum::<usize>() + labels.len() - 1;

        let mut out = String::new();
        out.try_reserve_exact(len).map_err(|_| NormalizeError::OutOfMemory)?;
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match presentation {
                Presentation::Canonical => out.extend(label.normalized_chars()),
                Presentation::Beautified => out.extend(beautified_chars(&self.spec, label)),
            }
        }
        Ok(out)
    }

    /// Runs the pipeline on every label of `name` without stopping at the first failure.
    pub fn process(&self, name: &str) -> ProcessedName {
        let mut offset = 0;
        let labels = name
            .split('.')
            .map(|label| {
                let info = self.inspect_label(label, offset);
                offset += label.len() + 1;
                info
            })
            .collect();
        ProcessedName { input: name.to_string(), labels }
    }

    fn inspect_label(&self, label: &str, offset: usize) -> LabelInfo {
        let tokens = Tokenizer::new(&self.spec, label).collect::<Vec<_>>();
        let mut info = LabelInfo {
            offset,
            input: label.to_string(),
            tokens: TokenInfo::from_tokens(&tokens),
            output: None,
            beautified: None,
            label_type: None,
            error: None,
        };
        match validate_label(&self.spec, tokens) {
            Ok(validated) => {
                info.output = Some(validated.normalized_chars().collect());
                info.beautified = Some(beautified_chars(&self.spec, &validated).collect());
                info.label_type = Some(validated.label_type().name().to_string());
            }
            Err(err) => info.error = Some(LabelError::from(&err)),
        }
        info
    }
}

fn decode(name: &[u8]) -> Result<&str, NormalizeError> {
    std::str::from_utf8(name).map_err(|_| NormalizeError::InvalidUtf8)
}

/// Per-label report of [`Normalizer::process`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessedName {
    pub input: String,
    pub labels: Vec<LabelInfo>,
}

impl ProcessedName {
    pub fn is_valid(&self) -> bool {
        self.labels.iter().all(|label| label.error.is_none())
    }

    /// The first failing label.
    pub fn first_error(&self) -> Option<&LabelInfo> {
        self.labels.iter().find(|label| label.error.is_some())
    }

    /// The canonical form, if every label is valid.
    pub fn normalized(&self) -> Option<String> {
        self.join(|label| label.output.as_deref())
    }

    /// The display form, if every label is valid.
    pub fn beautified(&self) -> Option<String> {
        self.join(|label| label.beautified.as_deref())
    }

    fn join<'a>(&'a self, f: impl Fn(&'a LabelInfo) -> Option<&'a str>) -> Option<String> {
        let labels = self.labels.iter().map(f).collect::<Option<Vec<_>>>()?;
        Some(labels.join("."))
    }
}

/// Report of a single label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelInfo {
    /// Byte offset of the label in the input.
    pub offset: usize,
    pub input: String,
    pub tokens: Vec<TokenInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beautified: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub label_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<LabelError>,
}

/// Token report; consecutive text tokens are merged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenInfo {
    Text(String),
    Emoji(String),
    Disallowed(char),
}

impl TokenInfo {
    fn from_tokens(tokens: &[Token<'_>]) -> Vec<Self> {
        let mut out: Vec<Self> = Vec::new();
        for token in tokens {
            match *token {
                Token::Text(c) => match out.last_mut() {
                    Some(Self::Text(text)) => text.push(c),
                    _ => out.push(Self::Text(c.to_string())),
                },
                Token::Emoji(emoji) => out.push(Self::Emoji(emoji.normalized().iter().collect())),
                Token::Disallowed(c) => out.push(Self::Disallowed(c)),
            }
        }
        out
    }
}

/// Serializable form of a [`NormalizeError`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelError {
    pub kind: ErrorKind,
    pub code: i32,
    pub message: String,
}

impl From<&NormalizeError> for LabelError {
    fn from(err: &NormalizeError) -> Self {
        Self { kind: err.kind(), code: err.code(), message: err.to_string() }
    }
}
