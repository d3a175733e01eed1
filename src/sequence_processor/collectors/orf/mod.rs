mod scanner;

pub use scanner::{find_orfs, find_orfs_with, Codon, CodonPatterns, Orf, CODON_LEN};

use crate::export::formats::bed::BedWriter;
use crate::sequence_processor::core::{ProcessingStats, Sequence, SequenceProcessor};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::io::Write;

/// Scans each record for ORFs and streams them out as BED lines.
///
/// Output order follows input order, so this processor never runs in
/// parallel.
pub struct OrfProcessor<W: Write + Send> {
    patterns: CodonPatterns,
    writer: BedWriter<W>,
    progress: ProgressBar,
    orfs_found: u64,
}

impl<W: Write + Send> OrfProcessor<W> {
    pub fn new(patterns: CodonPatterns, writer: W, progress: ProgressBar) -> Self {
        Self {
            patterns,
            writer: BedWriter::new(writer),
            progress,
            orfs_found: 0,
        }
    }

    pub fn orfs_found(&self) -> u64 {
        self.orfs_found
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> SequenceProcessor for OrfProcessor<W> {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        let orfs = find_orfs_with(&sequence.data, &self.patterns);
        self.orfs_found += orfs.len() as u64;
        self.writer
            .write_orfs(&sequence.id, &orfs)
            .with_context(|| format!("Failed to write ORFs for {}", sequence.id))
    }

    fn update_progress(&mut self, stats: &ProcessingStats) {
        self.progress.set_message(format!(
            "{} sequences, {} ORFs",
            stats.processed, self.orfs_found
        ));
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush ORF output")
    }
}
