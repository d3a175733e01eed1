mod fasta;
mod fastq;
mod source;

pub use self::fasta::FastaReader;
pub use self::fastq::FastqReader;
pub use source::{open_input, STDIN_PATH};

use super::core::{Sequence, SequenceReader};
use anyhow::Result;
use std::path::Path;

/// Input record layouts understood by the readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Fasta,
    Fastq,
}

impl RecordFormat {
    pub fn name(&self) -> &'static str {
        match self {
            RecordFormat::Fasta => "FASTA",
            RecordFormat::Fastq => "FASTQ",
        }
    }
}

/// A reader whose format is chosen at runtime.
pub enum RecordReader {
    Fasta(FastaReader),
    Fastq(FastqReader),
}

impl RecordReader {
    /// Open `path` (stdin for `-`) as the requested format.
    pub fn open(path: &Path, format: RecordFormat, buffer_capacity: usize) -> Result<Self> {
        Ok(match format {
            RecordFormat::Fasta => RecordReader::Fasta(FastaReader::new(path, buffer_capacity)?),
            RecordFormat::Fastq => RecordReader::Fastq(FastqReader::new(path, buffer_capacity)?),
        })
    }
}

impl SequenceReader for RecordReader {
    fn next_sequence(&mut self) -> Result<Option<Sequence>> {
        match self {
            RecordReader::Fasta(reader) => reader.next_sequence(),
            RecordReader::Fastq(reader) => reader.next_sequence(),
        }
    }
}
