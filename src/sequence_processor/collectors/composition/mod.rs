mod table;

pub use table::{CompositionRow, CompositionTable};

use crate::sequence_processor::core::{ProcessingStats, Sequence, SequenceProcessor};
use anyhow::Result;
use indicatif::ProgressBar;
use std::sync::Arc;

/// Feeds every record into a [`CompositionTable`].
#[derive(Clone)]
pub struct CompositionAccumulator {
    table: CompositionTable,
    progress: Arc<ProgressBar>,
}

impl CompositionAccumulator {
    pub fn new(progress: ProgressBar) -> Self {
        Self {
            table: CompositionTable::new(),
            progress: Arc::new(progress),
        }
    }

    pub fn table(&self) -> &CompositionTable {
        &self.table
    }

    pub fn into_table(self) -> CompositionTable {
        self.table
    }
}

impl Default for CompositionAccumulator {
    fn default() -> Self {
        Self::new(ProgressBar::hidden())
    }
}

impl SequenceProcessor for CompositionAccumulator {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        self.table.add_sequence(&sequence.data);
        Ok(())
    }

    fn update_progress(&mut self, stats: &ProcessingStats) {
        self.progress.set_message(format!(
            "{} sequences, {} positions",
            stats.processed,
            self.table.max_position().map_or(0, |max| max + 1)
        ));
    }

    fn supports_parallel(&self) -> bool {
        true
    }

    fn worker(&self) -> Self {
        Self {
            table: CompositionTable::new(),
            progress: Arc::clone(&self.progress),
        }
    }

    fn merge_processor(&mut self, other: &Self) -> Result<()> {
        self.table.merge(&other.table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processor_counts_records() {
        let mut accumulator = CompositionAccumulator::default();
        accumulator
            .process_sequence(&Sequence::new("r1", "ACG"))
            .unwrap();
        accumulator
            .process_sequence(&Sequence::new("r2", "cc"))
            .unwrap();

        let table = accumulator.into_table();
        assert_eq!(table.count(0, b'A'), 1);
        assert_eq!(table.count(0, b'C'), 1);
        assert_eq!(table.count(1, b'C'), 2);
        assert_eq!(table.sequences(), 2);
    }

    #[test]
    fn worker_starts_empty() {
        let mut accumulator = CompositionAccumulator::default();
        accumulator
            .process_sequence(&Sequence::new("r1", "ACG"))
            .unwrap();

        let worker = accumulator.worker();
        assert!(worker.table().is_empty());

        accumulator.merge_processor(&worker).unwrap();
        assert_eq!(accumulator.table().count(0, b'A'), 1);
    }
}
