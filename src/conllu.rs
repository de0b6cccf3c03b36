//! CoNLL-U sentence store.
//!
//! Scans an annotated file line by line and groups token lines into
//! [`Sentence`]s keyed by `sent_id`. Only two line shapes carry meaning:
//!
//! - `# sent_id = <id>` sets the id of the sentence being built
//! - `<id>\t<form>\t...` appends a token, where `<id>` is made of digits,
//!   `-` and `.`
//!
//! A whitespace-only line closes the current sentence. Everything else is
//! skipped. Sentences without an explicit id get a Grew-style synthetic one,
//! `<file name>_<NNNNN>`.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::models::Sentence;

static SENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*sent_id\s*=\s*(.*)").expect("valid sent_id pattern"));

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9\-.]+)\t([^\t]+)\t").expect("valid token pattern"));

/// The recognized shapes of an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    SentId(&'a str),
    Token { id: &'a str, form: &'a str },
    Other,
}

/// Classify one line (without its terminator).
pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if let Some(caps) = SENT_ID_RE.captures(line) {
        return Line::SentId(caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = TOKEN_RE.captures(line) {
        return Line::Token {
            id: caps.get(1).map_or("", |m| m.as_str()),
            form: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    Line::Other
}

/// All sentences of one annotated file, keyed by sentence id.
#[derive(Debug, Clone, Default)]
pub struct SentenceStore {
    sentences: HashMap<String, Sentence>,
}

impl SentenceStore {
    /// Read and parse a file. The file name (not the full path) seeds
    /// synthetic sentence ids.
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read annotated file: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let store = Self::parse_str(&name, &content);
        tracing::debug!(
            file = %path.display(),
            sentences = store.len(),
            "parsed annotated file"
        );
        Ok(store)
    }

    pub fn parse_str(file_name: &str, content: &str) -> Self {
        let mut state = ParseState::new(file_name);
        for line in content.lines() {
            state.feed(classify(line));
        }
        state.finish()
    }

    pub fn get(&self, sent_id: &str) -> Option<&Sentence> {
        self.sentences.get(sent_id)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Buffer and pending id carried across lines of a single file.
struct ParseState<'a> {
    file_name: &'a str,
    store: SentenceStore,
    buffer: Sentence,
    pending_id: Option<String>,
}

impl<'a> ParseState<'a> {
    fn new(file_name: &'a str) -> Self {
        Self {
            file_name,
            store: SentenceStore::default(),
            buffer: Sentence::new(),
            pending_id: None,
        }
    }

    fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Blank => {
                if !self.buffer.is_empty() {
                    self.commit();
                }
            }
            Line::SentId(id) => self.pending_id = Some(id.to_string()),
            Line::Token { id, form } => self.buffer.push(id, form),
            Line::Other => {}
        }
    }

    fn commit(&mut self) {
        let sent_id = match self.pending_id.take() {
            Some(id) if !id.is_empty() => id,
            _ => synthetic_id(self.file_name, self.store.len() + 1),
        };
        let sentence = std::mem::take(&mut self.buffer);
        self.store.sentences.insert(sent_id, sentence);
    }

    fn finish(mut self) -> SentenceStore {
        // Files are not required to end with a blank line.
        if !self.buffer.is_empty() {
            self.commit();
        }
        self.store
    }
}

/// Grew-style id for a sentence without `sent_id`.
pub fn synthetic_id(file_name: &str, ordinal: usize) -> String {
    format!("{}_{:0>5}", file_name, ordinal)
}
