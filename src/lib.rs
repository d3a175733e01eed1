pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod sequence_processor;
pub mod utils;

// Re-export the two core analyses
pub use sequence_processor::collectors::composition::{CompositionRow, CompositionTable};
pub use sequence_processor::collectors::orf::{find_orfs, find_orfs_with, CodonPatterns, Orf};
