//! # grew-tsv
//!
//! Converts Grew query results into a flat concordance table.
//!
//! A Grew match file lists hits, each naming a sentence (`sent_id`) and the
//! token bound to every node of the query pattern. Given the CoNLL-U text
//! the query ran against, each hit becomes one tab-separated row:
//!
//! ```text
//! <sentence id> \t <left context> \t <pivot form> \t <right context>
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌─────────────┐   ┌─────────────┐
//! │ CorpusIndex  │──▶│ SentenceStore │──▶│ HitResolver │──▶│ TableWriter │
//! │ (multi mode) │   │  per file     │   │  per hit    │   │  .tsv       │
//! └──────────────┘   └───────────────┘   └─────────────┘   └─────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Run configuration, mode selection, output path |
//! | [`models`] | Sentences, hits and output records |
//! | [`conllu`] | CoNLL-U parsing into a sentence store |
//! | [`resolve`] | Pivot lookup and context split |
//! | [`table`] | Tab-separated writer |
//! | [`corpus`] | Multi-corpus descriptor |
//! | [`matches`] | Grew match documents |
//! | [`convert`] | Run orchestration |

pub mod config;
pub mod conllu;
pub mod convert;
pub mod corpus;
pub mod matches;
pub mod models;
pub mod resolve;
pub mod table;
