pub mod core;
pub mod collectors;
pub mod readers;
pub mod threading;

// Re-export commonly used items
pub use collectors::composition::{CompositionAccumulator, CompositionTable};
pub use collectors::orf::{find_orfs, OrfProcessor};
pub use core::{Sequence, SequenceProcessor, SequenceReader};
