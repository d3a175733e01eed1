use super::open_output;
use crate::config::Config;
use crate::export::formats::composition::CompositionTsvWriter;
use crate::export::{AnalysisData, AnalysisExport, CompositionExport};
use crate::sequence_processor::collectors::composition::CompositionAccumulator;
use crate::sequence_processor::core::SequenceReader;
use crate::sequence_processor::readers::{RecordFormat, RecordReader};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn run(
    input: PathBuf,
    format: RecordFormat,
    output_file: Option<PathBuf>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let progress = ProgressBarBuilder::new(format!("Reading {}", input.display()))
        .with_template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} sequences)")
        .with_tick()
        .hidden(!config.show_progress)
        .build()?;

    let mut reader = RecordReader::open(&input, format, config.buffer_capacity)?;
    let mut accumulator = CompositionAccumulator::new(progress.clone());
    let stats = reader
        .read_sequences_with_threads(&mut accumulator, &progress, config.threads)
        .with_context(|| format!("Failed to read {} input {}", format.name(), input.display()))?;
    progress.finish_and_clear();

    let table = accumulator.into_table();
    log::info!(
        "Processed {} sequences ({} empty): {} positions, {} symbols",
        stats.processed,
        stats.empty,
        table.max_position().map_or(0, |max| max + 1),
        table.symbol_count()
    );

    let mut writer = open_output(output_file.as_deref())?;
    if json {
        let export = AnalysisExport::new(AnalysisData::Composition(CompositionExport::from_table(
            input.display().to_string(),
            &table,
        )));
        serde_json::to_writer_pretty(&mut writer, &export)
            .context("Failed to write composition export")?;
        writeln!(writer)?;
        writer.flush()?;
    } else {
        CompositionTsvWriter::new(writer)
            .write_table(&table)
            .context("Failed to write composition table")?;
    }

    if let Some(path) = output_file.as_deref().map(Path::display) {
        log::info!("Composition table written to {}", path);
    }
    Ok(())
}
