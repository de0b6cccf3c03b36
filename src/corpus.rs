//! Multi-corpus descriptor.
//!
//! A descriptor is a JSON array of corpus entries, each naming an `id` and
//! the `directory` holding its CoNLL-U files:
//!
//! ```json
//! [
//!   { "id": "UD_French-GSD", "directory": "corpora/fr_gsd" },
//!   { "id": "UD_French-PUD", "directory": "corpora/fr_pud" }
//! ]
//! ```
//!
//! Annotated files are the regular files directly inside `directory` whose
//! name matches `*.conll*`, which covers `.conll`, `.conllu` and variants.
//! A directory that does not exist simply has no annotated files.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// File name pattern for annotated files.
const ANNOTATED_FILE_GLOB: &str = "*.conll*";

/// Descriptor problems that abort the run with a diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Could not find \"id\" entry in {0}")]
    MissingId(String),
    #[error("Could not find \"directory\" entry in {0}")]
    MissingDirectory(String),
    #[error("Corpus '{corpus}' is not listed in {path}")]
    UnknownCorpus { corpus: String, path: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// A loaded corpus descriptor.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    path: PathBuf,
    entries: Vec<CorpusEntry>,
}

impl CorpusIndex {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus descriptor: {}", path.display()))?;
        Self::from_json(path, &content)
    }

    pub fn from_json(path: &Path, content: &str) -> Result<Self> {
        let entries: Vec<CorpusEntry> = serde_json::from_str(content).with_context(|| {
            format!(
                "Corpus descriptor must be a JSON array of objects: {}",
                path.display()
            )
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Corpus ids in descriptor order. Every entry must carry an `id`.
    pub fn list_corpus_ids(&self) -> Result<Vec<String>, DescriptorError> {
        self.entries
            .iter()
            .map(|entry| entry.id.clone().ok_or_else(|| self.missing_id()))
            .collect()
    }

    /// Annotated files of one corpus, sorted by file name.
    pub fn list_annotated_files(&self, corpus_id: &str) -> Result<Vec<PathBuf>> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.id.as_deref() == Some(corpus_id))
            .ok_or_else(|| DescriptorError::UnknownCorpus {
                corpus: corpus_id.to_string(),
                path: self.path.display().to_string(),
            })?;
        let directory = entry
            .directory
            .as_ref()
            .ok_or_else(|| DescriptorError::MissingDirectory(self.path.display().to_string()))?;
        scan_annotated_files(directory)
    }

    fn missing_id(&self) -> DescriptorError {
        DescriptorError::MissingId(self.path.display().to_string())
    }
}

/// List the annotated files directly inside `directory`.
pub fn scan_annotated_files(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        tracing::warn!(directory = %directory.display(), "corpus directory does not exist");
        return Ok(Vec::new());
    }

    let matcher = annotated_file_matcher()?;
    let mut files = Vec::new();

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden || !matcher.is_match(entry.file_name()) {
            continue;
        }
        files.push(directory.join(entry.file_name()));
    }

    Ok(files)
}

fn annotated_file_matcher() -> Result<GlobMatcher> {
    Ok(Glob::new(ANNOTATED_FILE_GLOB)?.compile_matcher())
}
