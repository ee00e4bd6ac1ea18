//! Serde schema of `spec.json`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawSpec {
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub unicode: String,
    pub emoji: Vec<Vec<u32>>,
    pub ignored: Vec<u32>,
    pub mapped: Vec<(u32, Vec<u32>)>,
    pub fenced: Vec<(u32, String)>,
    pub wholes: Vec<RawWhole>,
    pub cm: Vec<u32>,
    pub nsm: Vec<u32>,
    pub nsm_max: usize,
    pub groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGroup {
    pub name: String,
    pub primary: Vec<u32>,
    #[serde(default)]
    pub secondary: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawWhole {
    pub valid: Vec<u32>,
    pub confused: Vec<u32>,
}
