use crate::sequence_processor::collectors::orf::Orf;
use std::io::{self, Write};

/// Placeholder score column.
pub const BED_SCORE: u32 = 0;
/// Forward strand only.
pub const BED_STRAND: char = '+';

/// Writes ORFs as six-column BED lines: `id start end id:index score strand`.
pub struct BedWriter<W: Write> {
    writer: W,
}

impl<W: Write> BedWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write all ORFs of one record; `index` counts from 0 within the record.
    pub fn write_orfs(&mut self, id: &str, orfs: &[Orf]) -> io::Result<()> {
        for (index, orf) in orfs.iter().enumerate() {
            writeln!(
                self.writer,
                "{id}\t{}\t{}\t{id}:{index}\t{BED_SCORE}\t{BED_STRAND}",
                orf.start, orf.end
            )?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
