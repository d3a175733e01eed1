#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub processed: u64,
    pub empty: u64,
    pub errors: u64,
}

impl ProcessingStats {
    pub fn merge(&mut self, other: &ProcessingStats) {
        self.processed += other.processed;
        self.empty += other.empty;
        self.errors += other.errors;
    }
}
