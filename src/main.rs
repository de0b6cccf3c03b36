//! # grew-tsv
//!
//! Turns the JSON output of a Grew query into a concordance table: one
//! tab-separated row per hit with the sentence id, the left context, the
//! pivot token and the right context.
//!
//! ## Usage
//!
//! ```bash
//! # One CoNLL-U file, matches as produced by `grew grep`
//! grew-tsv --corpus fr_gsd-ud-train.conllu --json results.json --pivot N
//!
//! # Several corpora listed in a descriptor, matches keyed by corpus id
//! grew-tsv --corpus corpora.json --json results.json --pivot V --output table.tsv
//! ```
//!
//! Without `--output` the table is written next to the match file, with
//! its extension replaced by `.tsv`. Set `RUST_LOG=debug` to trace which
//! files were parsed and which hits were skipped.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use grew_tsv::config::ConvertConfig;
use grew_tsv::convert;
use grew_tsv::corpus::DescriptorError;

/// Converts a Grew match JSON file into a .tsv concordance.
#[derive(Parser)]
#[command(name = "grew-tsv", version)]
struct Cli {
    /// Source corpus: a .conllu file (single corpus) or a .json corpus
    /// descriptor (several corpora).
    #[arg(long)]
    corpus: PathBuf,

    /// JSON file with matches.
    #[arg(long)]
    json: PathBuf,

    /// Name of the pivot node in the match pattern.
    #[arg(long)]
    pivot: String,

    /// Output file. Defaults to the match file with a .tsv extension.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let cfg = ConvertConfig::from_args(cli.corpus, cli.json, cli.pivot, cli.output);

    if let Err(e) = convert::run_convert(&cfg) {
        if let Some(descriptor_err) = e.downcast_ref::<DescriptorError>() {
            eprintln!("{}", descriptor_err);
            std::process::exit(2);
        }
        return Err(e);
    }

    Ok(())
}
