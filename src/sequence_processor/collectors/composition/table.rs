use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One emitted line of the composition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionRow {
    pub position: usize,
    #[serde(with = "symbol_as_char")]
    pub symbol: u8,
    pub count: u64,
    pub total_count: u64,
}

/// Per-position symbol counts over a stream of sequences.
///
/// Position `i` of every sequence contributes to the same column regardless
/// of sequence identity or length. Symbols are upper-cased before counting.
/// Lookups of positions or symbols that were never observed read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionTable {
    counts: Vec<HashMap<u8, u64>>,
    symbols: BTreeSet<u8>,
    sequences: u64,
}

impl CompositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a lazily consumed stream of sequences.
    pub fn accumulate<I, S>(sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut table = Self::new();
        for sequence in sequences {
            table.add_sequence(sequence.as_ref());
        }
        table
    }

    pub fn add_sequence(&mut self, sequence: &[u8]) {
        self.sequences += 1;
        if self.counts.len() < sequence.len() {
            self.counts.resize_with(sequence.len(), HashMap::new);
        }

        for (position, &raw) in sequence.iter().enumerate() {
            let symbol = raw.to_ascii_uppercase();
            *self.counts[position].entry(symbol).or_insert(0) += 1;
            self.symbols.insert(symbol);
        }
    }

    /// Fold a partial table into this one.
    pub fn merge(&mut self, other: &CompositionTable) {
        self.sequences += other.sequences;
        if self.counts.len() < other.counts.len() {
            self.counts.resize_with(other.counts.len(), HashMap::new);
        }

        for (column, other_column) in self.counts.iter_mut().zip(&other.counts) {
            for (&symbol, &count) in other_column {
                *column.entry(symbol).or_insert(0) += count;
            }
        }
        self.symbols.extend(other.symbols.iter().copied());
    }

    pub fn count(&self, position: usize, symbol: u8) -> u64 {
        self.counts
            .get(position)
            .and_then(|column| column.get(&symbol.to_ascii_uppercase()))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_at(&self, position: usize) -> u64 {
        self.counts
            .get(position)
            .map_or(0, |column| column.values().sum())
    }

    /// Highest position observed, or `None` if no symbol was ever seen.
    pub fn max_position(&self) -> Option<usize> {
        self.counts.len().checked_sub(1)
    }

    /// Every discovered symbol in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.symbols.iter().copied()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of sequences consumed, including empty ones.
    pub fn sequences(&self) -> u64 {
        self.sequences
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.counts.len() * self.symbols.len()
    }

    /// Rows ordered by position, then symbol.
    pub fn rows(&self) -> impl Iterator<Item = CompositionRow> + '_ {
        self.counts
            .iter()
            .enumerate()
            .flat_map(move |(position, column)| {
                let total_count = column.values().sum();
                self.symbols.iter().map(move |&symbol| CompositionRow {
                    position,
                    symbol,
                    count: column.get(&symbol).copied().unwrap_or(0),
                    total_count,
                })
            })
    }
}

mod symbol_as_char {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(symbol: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(*symbol as char)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let c = char::deserialize(deserializer)?;
        u8::try_from(c).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_position_across_sequences() {
        let table = CompositionTable::accumulate(["ACG", "aTg", "A"]);

        assert_eq!(table.max_position(), Some(2));
        assert_eq!(table.symbols().collect::<Vec<_>>(), b"ACGT".to_vec());
        assert_eq!(table.count(0, b'A'), 3);
        assert_eq!(table.count(0, b'a'), 3);
        assert_eq!(table.count(1, b'C'), 1);
        assert_eq!(table.count(1, b'T'), 1);
        assert_eq!(table.count(2, b'G'), 2);
        assert_eq!(table.total_at(0), 3);
        assert_eq!(table.total_at(2), 2);
        assert_eq!(table.sequences(), 3);
    }

    #[test]
    fn absent_cells_read_as_zero() {
        let table = CompositionTable::accumulate(["AC"]);
        assert_eq!(table.count(0, b'C'), 0);
        assert_eq!(table.count(5, b'A'), 0);
        assert_eq!(table.count(0, b'N'), 0);
        assert_eq!(table.total_at(10), 0);
    }

    #[test]
    fn emits_every_symbol_at_every_position() {
        let table = CompositionTable::accumulate(["AAAA", "C"]);
        let rows: Vec<_> = table.rows().collect();

        assert_eq!(rows.len(), 8);
        assert_eq!(table.row_count(), 8);
        assert_eq!(
            rows[0],
            CompositionRow { position: 0, symbol: b'A', count: 1, total_count: 2 }
        );
        assert_eq!(
            rows[1],
            CompositionRow { position: 0, symbol: b'C', count: 1, total_count: 2 }
        );
        assert_eq!(
            rows[7],
            CompositionRow { position: 3, symbol: b'C', count: 0, total_count: 1 }
        );
    }

    #[test]
    fn rows_are_strictly_ordered() {
        let table = CompositionTable::accumulate(["TGCA", "NNA", "gattaca"]);
        let keys: Vec<_> = table.rows().map(|r| (r.position, r.symbol)).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn totals_match_sum_of_counts() {
        let table = CompositionTable::accumulate(["ACGTN", "acg", "TTTTTTT", ""]);
        for position in 0..=table.max_position().unwrap() {
            let sum: u64 = table
                .rows()
                .filter(|r| r.position == position)
                .map(|r| r.count)
                .sum();
            assert!(table.rows().filter(|r| r.position == position).all(|r| r.total_count == sum));
            assert_eq!(sum, table.total_at(position));
        }
    }

    #[test]
    fn empty_stream_has_no_rows() {
        let table = CompositionTable::accumulate(Vec::<Vec<u8>>::new());
        assert!(table.is_empty());
        assert_eq!(table.max_position(), None);
        assert_eq!(table.rows().count(), 0);
        assert_eq!(table.sequences(), 0);
    }

    #[test]
    fn empty_sequences_contribute_nothing() {
        let table = CompositionTable::accumulate(["", ""]);
        assert_eq!(table.max_position(), None);
        assert_eq!(table.rows().count(), 0);
        assert_eq!(table.sequences(), 2);
    }

    #[test]
    fn doubled_input_doubles_every_count() {
        let input = ["ACGT", "GGA", "tc"];
        let single = CompositionTable::accumulate(input);
        let double = CompositionTable::accumulate(input.iter().chain(input.iter()));

        let halved: Vec<_> = double
            .rows()
            .map(|r| CompositionRow {
                count: r.count / 2,
                total_count: r.total_count / 2,
                ..r
            })
            .collect();
        assert_eq!(halved, single.rows().collect::<Vec<_>>());
    }

    #[test]
    fn merge_matches_single_pass() {
        let whole = CompositionTable::accumulate(["ACGT", "GG", "TTTTT", "a"]);

        let mut left = CompositionTable::accumulate(["ACGT", "GG"]);
        let right = CompositionTable::accumulate(["TTTTT", "a"]);
        left.merge(&right);

        assert_eq!(left, whole);
    }

    #[test]
    fn merge_into_empty_table() {
        let mut table = CompositionTable::new();
        table.merge(&CompositionTable::accumulate(["AC"]));
        assert_eq!(table.count(1, b'C'), 1);
        assert_eq!(table.max_position(), Some(1));
    }
}
