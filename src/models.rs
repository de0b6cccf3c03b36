//! Core data models used throughout the converter.
//!
//! Sentences come from CoNLL-U files, hits come from Grew match documents,
//! and context records are what ends up in the output table.

use serde::Deserialize;
use std::collections::HashMap;

/// A single token line: its raw id and surface form.
///
/// The id is kept as text. Plain integers (`3`), multi-word ranges (`3-4`)
/// and empty nodes (`3.1`) are all opaque keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: String,
    pub form: String,
}

/// Ordered token mapping for one sentence, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
    positions: HashMap<String, usize>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token. A repeated id overwrites the form but keeps the
    /// position where the id was first seen.
    pub fn push(&mut self, id: &str, form: &str) {
        match self.positions.get(id) {
            Some(&ix) => self.tokens[ix].form = form.to_string(),
            None => {
                self.positions.insert(id.to_string(), self.tokens.len());
                self.tokens.push(Token {
                    id: id.to_string(),
                    form: form.to_string(),
                });
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Position of a token id in insertion order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Space-joined forms of the tokens in `range`.
    pub fn join_forms(&self, range: std::ops::Range<usize>) -> String {
        self.tokens[range]
            .iter()
            .map(|t| t.form.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One Grew match record.
///
/// Every field is optional at the serde level: a hit without `sent_id` is
/// dropped, a hit without `matching.nodes` reports a missing pivot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(default)]
    pub sent_id: Option<String>,
    #[serde(default)]
    pub matching: Option<Matching>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Matching {
    #[serde(default)]
    pub nodes: Option<HashMap<String, serde_json::Value>>,
}

impl Hit {
    /// Raw value bound to `node` in `matching.nodes`, if any.
    pub fn node(&self, node: &str) -> Option<&serde_json::Value> {
        self.matching.as_ref()?.nodes.as_ref()?.get(node)
    }
}

/// Token id named by a node binding. Only JSON strings can name a token;
/// a number such as `2` never matches the id column `"2"`.
pub fn node_token_id(value: &serde_json::Value) -> Option<&str> {
    value.as_str()
}

/// A row of the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextRecord {
    /// Pivot located: id, left context, pivot form, right context.
    Context {
        id: String,
        left: String,
        pivot: String,
        right: String,
    },
    /// Pivot could not be located; the row carries a short diagnostic.
    Diagnostic { id: String, message: &'static str },
}

impl ContextRecord {
    pub fn id(&self) -> &str {
        match self {
            ContextRecord::Context { id, .. } | ContextRecord::Diagnostic { id, .. } => id,
        }
    }

    /// Output fields in column order.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ContextRecord::Context {
                id,
                left,
                pivot,
                right,
            } => vec![id.as_str(), left.as_str(), pivot.as_str(), right.as_str()],
            ContextRecord::Diagnostic { id, message } => vec![id.as_str(), *message],
        }
    }
}
