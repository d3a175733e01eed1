use super::processor::SequenceProcessor;
use super::sequence::Sequence;
use super::stats::ProcessingStats;
use crate::sequence_processor::threading::{merge_processors, ThreadPool};
use anyhow::Result;
use indicatif::ProgressBar;

const BATCH_SIZE: usize = 1000;
const PROGRESS_INTERVAL: u64 = 1000;

/// A lazy source of records.
///
/// Implementors only provide `next_sequence`; the driving loops are shared.
/// `Ok(None)` signals a clean end of stream.
pub trait SequenceReader {
    fn next_sequence(&mut self) -> Result<Option<Sequence>>;

    fn read_sequences<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();

        while let Some(sequence) = self.next_sequence()? {
            if sequence.is_empty() {
                stats.empty += 1;
            }
            processor.process_sequence(&sequence)?;
            stats.processed += 1;

            if stats.processed % PROGRESS_INTERVAL == 0 {
                processor.update_progress(&stats);
                progress.set_position(stats.processed);
            }
        }

        processor.update_progress(&stats);
        progress.set_position(stats.processed);
        processor.finalize()?;
        Ok(stats)
    }

    fn read_sequences_with_threads<P: SequenceProcessor + Clone + 'static>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
        num_threads: usize,
    ) -> Result<ProcessingStats> {
        if num_threads <= 1 || !processor.supports_parallel() {
            return self.read_sequences(processor, progress);
        }

        let pool = ThreadPool::new(processor, num_threads)?;
        let mut stats = ProcessingStats::default();
        let mut batch = Vec::with_capacity(BATCH_SIZE);

        while let Some(sequence) = self.next_sequence()? {
            if sequence.is_empty() {
                stats.empty += 1;
            }
            batch.push(sequence);

            if batch.len() >= BATCH_SIZE {
                pool.send(std::mem::replace(
                    &mut batch,
                    Vec::with_capacity(BATCH_SIZE),
                ))?;
                progress.inc(BATCH_SIZE as u64);
            }
        }

        if !batch.is_empty() {
            progress.inc(batch.len() as u64);
            pool.send(batch)?;
        }

        let (worker_stats, processors) = pool.finish()?;
        stats.processed += worker_stats.processed;
        stats.errors += worker_stats.errors;

        merge_processors(processors, processor)?;
        processor.update_progress(&stats);
        processor.finalize()?;

        if stats.errors > 0 {
            anyhow::bail!("{} sequences failed to process", stats.errors);
        }

        Ok(stats)
    }
}
