use super::source::open_input;
use crate::error::ReaderError;
use crate::sequence_processor::core::{Sequence, SequenceReader};
use anyhow::Result;
use bio::io::fasta;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub struct FastaReader {
    records: fasta::Records<BufReader<Box<dyn Read>>>,
    path: PathBuf,
}

impl FastaReader {
    pub fn new(path: &Path, buffer_capacity: usize) -> Result<Self> {
        let input = open_input(path, buffer_capacity)?;
        Ok(Self::from_bufread(input, path))
    }

    pub(crate) fn from_bufread(input: BufReader<Box<dyn Read>>, path: &Path) -> Self {
        Self {
            records: fasta::Reader::from_bufread(input).records(),
            path: path.to_path_buf(),
        }
    }
}

impl SequenceReader for FastaReader {
    fn next_sequence(&mut self) -> Result<Option<Sequence>> {
        match self.records.next() {
            None => Ok(None),
            Some(Ok(record)) => Ok(Some(Sequence {
                id: record.id().to_string(),
                data: record.seq().to_vec(),
                quality: None,
            })),
            Some(Err(source)) => Err(ReaderError::Fasta {
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

    fn reader_for(text: &'static str) -> FastaReader {
        let input: Box<dyn Read> = Box::new(Cursor::new(text.as_bytes()));
        FastaReader::from_bufread(BufReader::new(input), Path::new("test.fa"))
    }

    #[test]
    fn reads_multiline_records_in_order() {
        let mut reader = reader_for(">one desc\nACGT\nacgt\n>two\nTT\n");

        let first = reader.next_sequence().unwrap().unwrap();
        assert_eq!(first.id, "one");
        assert_eq!(first.data, b"ACGTacgt");
        assert!(first.quality.is_none());

        let second = reader.next_sequence().unwrap().unwrap();
        assert_eq!(second.id, "two");
        assert_eq!(second.data, b"TT");

        assert!(reader.next_sequence().unwrap().is_none());
    }

    #[test]
    fn empty_input_has_no_records() {
        let mut reader = reader_for("");
        assert!(reader.next_sequence().unwrap().is_none());
    }

    #[test]
    fn missing_header_is_an_error() {
        let mut reader = reader_for("ACGT\n");
        assert!(reader.next_sequence().is_err());
    }
}
