use super::core::*;
use anyhow::{anyhow, Result};
use crossbeam_channel::{bounded, Sender};
use std::thread;

/// Upper bound on worker threads; larger requests are clamped.
pub const MAX_THREADS: usize = 256;

pub struct ThreadPool<P: SequenceProcessor> {
    handles: Vec<thread::JoinHandle<(P, ProcessingStats)>>,
    tx: Sender<Vec<Sequence>>,
    num_threads: usize,
}

impl<P: SequenceProcessor + Clone + 'static> ThreadPool<P> {
    pub fn new(processor: &P, num_threads: usize) -> Result<Self> {
        if num_threads > MAX_THREADS {
            log::warn!("Requested {} threads, using {}", num_threads, MAX_THREADS);
        }
        let num_threads = num_threads.clamp(1, MAX_THREADS);
        let (tx, rx) = bounded::<Vec<Sequence>>(num_threads.saturating_mul(2));
        let mut handles = Vec::with_capacity(num_threads);

        for idx in 0..num_threads {
            let rx = rx.clone();
            let mut worker_processor = processor.worker();
            let handle = thread::Builder::new()
                .name(format!("worker-{}", idx))
                .spawn(move || {
                    let mut local_stats = ProcessingStats::default();
                    while let Ok(batch) = rx.recv() {
                        for sequence in &batch {
                            if let Err(e) = worker_processor.process_sequence(sequence) {
                                log::error!("Error processing sequence {}: {:#}", sequence.id, e);
                                local_stats.errors += 1;
                            } else {
                                local_stats.processed += 1;
                            }
                        }
                    }
                    (worker_processor, local_stats)
                })?;
            handles.push(handle);
        }

        Ok(ThreadPool {
            handles,
            tx,
            num_threads,
        })
    }

    pub fn send(&self, batch: Vec<Sequence>) -> Result<()> {
        self.tx
            .send(batch)
            .map_err(|_| anyhow!("all workers have exited"))
    }

    pub fn finish(self) -> Result<(ProcessingStats, Vec<P>)> {
        drop(self.tx);

        let mut stats = ProcessingStats::default();
        let mut processors = Vec::with_capacity(self.handles.len());

        for (idx, handle) in self.handles.into_iter().enumerate() {
            log::debug!("Collecting worker {} of {}", idx + 1, self.num_threads);

            let (worker_processor, worker_stats) = handle
                .join()
                .map_err(|_| anyhow!("worker {} panicked", idx))?;
            processors.push(worker_processor);
            stats.merge(&worker_stats);
        }

        Ok((stats, processors))
    }
}

pub fn merge_processors<P: SequenceProcessor>(
    processors: Vec<P>,
    main_processor: &mut P,
) -> Result<()> {
    for (idx, worker_processor) in processors.iter().enumerate() {
        log::debug!("Merging processor {} of {}", idx + 1, processors.len());
        main_processor.merge_processor(worker_processor)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence_processor::collectors::composition::CompositionAccumulator;

    #[test]
    fn oversized_thread_count_is_clamped() {
        let accumulator = CompositionAccumulator::default();
        let pool = ThreadPool::new(&accumulator, usize::MAX / 2 + 1).unwrap();
        assert_eq!(pool.num_threads, MAX_THREADS);

        pool.send(vec![Sequence::new("r1", "ACG")]).unwrap();
        let (stats, processors) = pool.finish().unwrap();
        assert_eq!(stats.processed, 1);
        assert_eq!(processors.len(), MAX_THREADS);

        let mut merged = CompositionAccumulator::default();
        merge_processors(processors, &mut merged).unwrap();
        assert_eq!(merged.table().count(2, b'G'), 1);
    }
}
