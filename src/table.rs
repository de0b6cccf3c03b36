//! Tab-separated output.
//!
//! One [`TableWriter`] owns the output stream for the whole run. Fields are
//! written as-is; source text is assumed free of tabs and newlines.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::ContextRecord;

pub struct TableWriter<W: Write> {
    out: W,
    rows: u64,
}

impl TableWriter<BufWriter<File>> {
    /// Create (or truncate) the output file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, rows: 0 }
    }

    pub fn write_record(&mut self, record: &ContextRecord) -> Result<()> {
        self.write_fields(&record.fields())
    }

    pub fn write_fields(&mut self, fields: &[&str]) -> Result<()> {
        writeln!(self.out, "{}", fields.join("\t"))?;
        self.rows += 1;
        Ok(())
    }

    /// Number of rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and hand back the underlying stream.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
