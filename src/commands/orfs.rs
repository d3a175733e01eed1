use super::open_output;
use crate::config::Config;
use crate::sequence_processor::collectors::orf::{Codon, CodonPatterns, OrfProcessor};
use crate::sequence_processor::core::{ProcessingStats, SequenceReader};
use crate::sequence_processor::readers::FastaReader;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(
    inputs: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    start: Codon,
    stops: Vec<Codon>,
    config: &Config,
) -> Result<()> {
    let patterns = if stops.is_empty() {
        CodonPatterns::new(start, CodonPatterns::STOPS.to_vec())?
    } else {
        CodonPatterns::new(start, stops)?
    };

    let progress = ProgressBarBuilder::new("Scanning for ORFs")
        .with_template("{spinner:.green} [{elapsed_precise}] {msg}")
        .with_tick()
        .hidden(!config.show_progress)
        .build()?;

    let writer = open_output(output_file.as_deref())?;
    let mut processor = OrfProcessor::new(patterns, writer, progress.clone());
    let mut totals = ProcessingStats::default();

    for input in &inputs {
        log::debug!("Scanning {}", input.display());
        let mut reader = FastaReader::new(input, config.buffer_capacity)?;
        let stats = reader
            .read_sequences(&mut processor, &progress)
            .with_context(|| format!("Failed to scan {}", input.display()))?;
        totals.merge(&stats);
    }
    progress.finish_and_clear();

    log::info!(
        "Scanned {} sequences from {} input(s), found {} ORFs",
        totals.processed,
        inputs.len(),
        processor.orfs_found()
    );
    Ok(())
}
