//! Grew match documents.
//!
//! In single-corpus runs the document is either an array of hits or an
//! object whose values are arrays of hits. In multi-corpus runs it is an
//! object keyed by corpus id, each value an array of hits. A hit collection
//! that is not an array is rejected.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::models::Hit;

#[derive(Debug, Clone)]
pub struct MatchDocument {
    path: PathBuf,
    root: Value,
}

impl MatchDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read match file: {}", path.display()))?;
        Self::from_json(path, &content)
    }

    pub fn from_json(path: &Path, content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)
            .with_context(|| format!("Failed to parse match file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// All hits of a single-corpus document, in document order.
    pub fn mono_hits(&self) -> Result<Vec<Hit>> {
        match &self.root {
            Value::Array(_) => self.parse_hits(&self.root, "top level"),
            Value::Object(map) => {
                let mut hits = Vec::new();
                for (key, value) in map {
                    hits.extend(self.parse_hits(value, key)?);
                }
                Ok(hits)
            }
            _ => bail!(
                "Match file must hold an array or an object of hit arrays: {}",
                self.path.display()
            ),
        }
    }

    /// Hits recorded for `corpus_id` in a multi-corpus document.
    pub fn corpus_hits(&self, corpus_id: &str) -> Result<Vec<Hit>> {
        let Value::Object(map) = &self.root else {
            bail!(
                "Match file must be an object keyed by corpus id: {}",
                self.path.display()
            );
        };
        let Some(value) = map.get(corpus_id) else {
            bail!(
                "No matches for corpus '{}' in {}",
                corpus_id,
                self.path.display()
            );
        };
        self.parse_hits(value, corpus_id)
    }

    fn parse_hits(&self, value: &Value, key: &str) -> Result<Vec<Hit>> {
        if !value.is_array() {
            bail!(
                "Matches under '{}' in {} must be a JSON array of hits",
                key,
                self.path.display()
            );
        }
        Vec::<Hit>::deserialize(value).with_context(|| {
            format!(
                "Malformed hit records under '{}' in {}",
                key,
                self.path.display()
            )
        })
    }
}
