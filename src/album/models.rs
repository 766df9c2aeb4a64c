use crate::error::CuesheetResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DISC_NUMBER: &str = "discnumber";

/// Tag mapping of an album or track. Missing keys read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumTrack {
    #[serde(default)]
    pub metadata: Metadata,

    /// Duration in milliseconds.
    #[serde(default)]
    pub length: u64,

    #[serde(default)]
    pub linked_files: Vec<PathBuf>,
}

impl AlbumTrack {
    pub fn disc_number(&self) -> &str {
        match self.metadata.get(DISC_NUMBER) {
            "" => "1",
            disc => disc,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub metadata: Metadata,
    pub tracks: Vec<AlbumTrack>,
}

impl Album {
    pub async fn load(path: impl AsRef<Path>) -> CuesheetResult<Self> {
        let data = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}
