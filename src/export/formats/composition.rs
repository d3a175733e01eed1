use crate::sequence_processor::collectors::composition::CompositionTable;
use std::io::{self, Write};

pub const COMPOSITION_HEADER: &str = "pos\tnt\tcount\ttotal_count";

pub struct CompositionTsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CompositionTsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Header first, then one line per row. An empty table yields the header only.
    pub fn write_table(&mut self, table: &CompositionTable) -> io::Result<()> {
        writeln!(self.writer, "{}", COMPOSITION_HEADER)?;
        for row in table.rows() {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}",
                row.position, row.symbol as char, row.count, row.total_count
            )?;
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
