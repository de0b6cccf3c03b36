use std::path::{Path, PathBuf};

/// How the corpus argument is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The corpus argument is a single annotated file.
    Mono,
    /// The corpus argument is a JSON corpus descriptor.
    Multi,
}

impl Mode {
    /// `.json` selects multi-corpus mode; any other extension is a CoNLL-U file.
    pub fn detect(corpus: &Path) -> Self {
        match corpus.extension() {
            Some(ext) if ext == "json" => Mode::Multi,
            _ => Mode::Mono,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mono => "mono",
            Mode::Multi => "multi",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub mode: Mode,
    pub corpus: PathBuf,
    pub matches: PathBuf,
    pub pivot: String,
    pub output: PathBuf,
}

impl ConvertConfig {
    pub fn from_args(
        corpus: PathBuf,
        matches: PathBuf,
        pivot: String,
        output: Option<PathBuf>,
    ) -> Self {
        let output = output.unwrap_or_else(|| default_output(&matches));

        Self {
            mode: Mode::detect(&corpus),
            corpus,
            matches,
            pivot,
            output,
        }
    }
}

/// The match file path with its extension swapped for `tsv`.
pub fn default_output(matches: &Path) -> PathBuf {
    matches.with_extension("tsv")
}
