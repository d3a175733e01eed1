use super::source::open_input;
use crate::error::ReaderError;
use crate::sequence_processor::core::{Sequence, SequenceReader};
use anyhow::Result;
use bio::io::fastq;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub struct FastqReader {
    records: fastq::Records<BufReader<Box<dyn Read>>>,
    path: PathBuf,
}

impl FastqReader {
    pub fn new(path: &Path, buffer_capacity: usize) -> Result<Self> {
        let input = open_input(path, buffer_capacity)?;
        Ok(Self::from_bufread(input, path))
    }

    pub(crate) fn from_bufread(input: BufReader<Box<dyn Read>>, path: &Path) -> Self {
        Self {
            records: fastq::Reader::from_bufread(input).records(),
            path: path.to_path_buf(),
        }
    }

    fn create_sequence_from_record(record: &fastq::Record) -> Sequence {
        Sequence {
            id: record.id().to_string(),
            data: record.seq().to_vec(),
            quality: Some(record.qual().to_vec()),
        }
    }
}

impl SequenceReader for FastqReader {
    fn next_sequence(&mut self) -> Result<Option<Sequence>> {
        match self.records.next() {
            None => Ok(None),
            Some(Ok(record)) => Ok(Some(Self::create_sequence_from_record(&record))),
            Some(Err(source)) => Err(ReaderError::Fastq {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_for(text: &'static str) -> FastqReader {
        let input: Box<dyn Read> = Box::new(Cursor::new(text.as_bytes()));
        FastqReader::from_bufread(BufReader::new(input), Path::new("test.fq"))
    }

    #[test]
    fn keeps_sequence_and_quality() {
        let mut reader = reader_for("@read1\nACGN\n+\nIIII\n@read2\ngg\n+\n##\n");

        let first = reader.next_sequence().unwrap().unwrap();
        assert_eq!(first.id, "read1");
        assert_eq!(first.data, b"ACGN");
        assert_eq!(first.quality.as_deref(), Some(&b"IIII"[..]));

        let second = reader.next_sequence().unwrap().unwrap();
        assert_eq!(second.data, b"gg");
        assert!(reader.next_sequence().unwrap().is_none());
    }

    #[test]
    fn record_without_at_is_an_error() {
        let mut reader = reader_for("read1\nACGT\n+\nIIII\n");
        assert!(reader.next_sequence().is_err());
    }
}
