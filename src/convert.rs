//! Conversion run orchestration.
//!
//! Loads the match document, walks the annotated files (one in mono mode,
//! every file of every listed corpus in multi mode), resolves each hit
//! against each file and writes one row per resolved hit.

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{ConvertConfig, Mode};
use crate::conllu::SentenceStore;
use crate::corpus::CorpusIndex;
use crate::matches::MatchDocument;
use crate::models::Hit;
use crate::resolve::{HitResolver, Resolution};
use crate::table::TableWriter;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub corpora: usize,
    pub files: usize,
    pub hits: usize,
    pub rows: u64,
    pub dropped: u64,
}

/// CLI entry point: convert and print a summary.
pub fn run_convert(config: &ConvertConfig) -> Result<()> {
    let summary = convert(config)?;

    println!("convert {}", config.mode.as_str());
    if config.mode == Mode::Multi {
        println!("  corpora: {}", summary.corpora);
    }
    println!("  files: {}", summary.files);
    println!("  hits: {}", summary.hits);
    println!("  rows written: {}", summary.rows);
    println!("  hits without sentence: {}", summary.dropped);
    println!("  output: {}", config.output.display());
    println!("ok");

    Ok(())
}

/// Run one conversion and write the output table.
pub fn convert(config: &ConvertConfig) -> Result<ConvertSummary> {
    tracing::info!(mode = config.mode.as_str(), corpus = %config.corpus.display(), "starting conversion");

    let matches = MatchDocument::load(&config.matches)?;
    let mut writer = TableWriter::create(&config.output)?;
    let resolver = HitResolver::new(&config.pivot);
    let mut summary = ConvertSummary::default();

    match config.mode {
        Mode::Mono => {
            let hits = matches.mono_hits()?;
            let files = vec![config.corpus.clone()];
            write_hits(&resolver, &files, &hits, None, &mut writer, &mut summary)?;
        }
        Mode::Multi => {
            let index = CorpusIndex::load(&config.corpus)?;
            for corpus_id in index.list_corpus_ids()? {
                let files = index.list_annotated_files(&corpus_id)?;
                let hits = matches.corpus_hits(&corpus_id)?;
                tracing::debug!(corpus = %corpus_id, files = files.len(), hits = hits.len(), "processing corpus");
                write_hits(
                    &resolver,
                    &files,
                    &hits,
                    Some(corpus_id.as_str()),
                    &mut writer,
                    &mut summary,
                )?;
                summary.corpora += 1;
            }
        }
    }

    summary.rows = writer.rows();
    writer.finish()?;

    tracing::info!(output = %config.output.display(), rows = summary.rows, "conversion finished");
    Ok(summary)
}

/// Resolve every hit against every file, in file order then hit order.
///
/// A hit counts as dropped only when none of the files holds its sentence.
fn write_hits<W: Write>(
    resolver: &HitResolver<'_>,
    files: &[PathBuf],
    hits: &[Hit],
    corpus_id: Option<&str>,
    writer: &mut TableWriter<W>,
    summary: &mut ConvertSummary,
) -> Result<()> {
    summary.hits += hits.len();
    let mut placed = vec![false; hits.len()];
    for file in files {
        let store = SentenceStore::parse_file(file)?;
        let id_prefix = corpus_id
            .filter(|id| !id.is_empty())
            .map(|id| corpus_file_prefix(id, file))
            .unwrap_or_default();
        for (hit, placed) in hits.iter().zip(placed.iter_mut()) {
            match resolver.resolve(hit, &store, &id_prefix) {
                Resolution::Row(record) => {
                    writer.write_record(&record)?;
                    *placed = true;
                }
                Resolution::UnknownSentence => {
                    tracing::debug!(
                        sent_id = hit.sent_id.as_deref().unwrap_or(""),
                        file = %file.display(),
                        "hit sentence not in file"
                    );
                }
            }
        }
        summary.files += 1;
    }
    summary.dropped += placed.iter().filter(|p| !**p).count() as u64;
    Ok(())
}

/// Row id prefix in multi mode: `<corpus id>/<file name>`.
fn corpus_file_prefix(corpus_id: &str, file: &Path) -> String {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{}/{}", corpus_id, name)
}
