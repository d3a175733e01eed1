use super::stats::ProcessingStats;
use super::sequence::Sequence;
use anyhow::Result;

/// Consumes records one at a time, in arrival order.
///
/// Processors that can split work across threads return `true` from
/// `supports_parallel` and implement `merge_processor` so that partial
/// results from worker clones can be folded back into the original.
pub trait SequenceProcessor: Send {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()>;
    fn update_progress(&mut self, stats: &ProcessingStats);
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
    fn supports_parallel(&self) -> bool {
        false
    }
    /// A worker copy for the thread pool. Processors that accumulate
    /// state must return an empty partial here, not a copy of their state.
    fn worker(&self) -> Self
    where
        Self: Sized + Clone,
    {
        self.clone()
    }
    fn merge_processor(&mut self, _other: &Self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}
