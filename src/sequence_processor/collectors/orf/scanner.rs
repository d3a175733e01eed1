use crate::error::CodonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CODON_LEN: usize = 3;

/// A half-open `[start, end)` span from a start codon through the first
/// in-frame stop codon, inclusive of the stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
}

impl Orf {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub fn codons(&self) -> usize {
        self.len() / CODON_LEN
    }
}

/// A nucleotide triplet, stored upper-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([u8; CODON_LEN]);

impl Codon {
    pub const fn new(bases: [u8; CODON_LEN]) -> Self {
        Self(bases)
    }

    pub fn matches(&self, triplet: &[u8]) -> bool {
        self.0 == triplet
    }
}

impl FromStr for Codon {
    type Err = CodonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() {
            return Err(CodonError::Length(s.to_string()));
        }
        let bases: [u8; CODON_LEN] = s
            .as_bytes()
            .try_into()
            .map_err(|_| CodonError::Length(s.to_string()))?;
        Ok(Codon(bases.map(|b| b.to_ascii_uppercase())))
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// The designated start triplet and the set of stop triplets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonPatterns {
    start: Codon,
    stops: Vec<Codon>,
}

impl CodonPatterns {
    pub const START: Codon = Codon::new(*b"ATG");
    pub const STOPS: [Codon; 3] = [
        Codon::new(*b"TAA"),
        Codon::new(*b"TAG"),
        Codon::new(*b"TGA"),
    ];

    pub fn new(start: Codon, stops: Vec<Codon>) -> Result<Self, CodonError> {
        if stops.is_empty() {
            return Err(CodonError::NoStops);
        }
        Ok(Self { start, stops })
    }

    pub fn start(&self) -> Codon {
        self.start
    }

    pub fn stops(&self) -> &[Codon] {
        &self.stops
    }

    fn is_stop(&self, triplet: &[u8]) -> bool {
        self.stops.iter().any(|stop| stop.matches(triplet))
    }
}

impl Default for CodonPatterns {
    fn default() -> Self {
        Self {
            start: Self::START,
            stops: Self::STOPS.to_vec(),
        }
    }
}

/// Every forward-strand ORF using `ATG` and `TAA`/`TAG`/`TGA`.
pub fn find_orfs(sequence: &[u8]) -> Vec<Orf> {
    find_orfs_with(sequence, &CodonPatterns::default())
}

/// Report each start codon independently, paired with its nearest in-frame
/// stop. Nested and overlapping ORFs are all kept, ordered by start.
pub fn find_orfs_with(sequence: &[u8], patterns: &CodonPatterns) -> Vec<Orf> {
    let sequence = sequence.to_ascii_uppercase();
    let mut orfs = Vec::new();

    let Some(last) = sequence.len().checked_sub(CODON_LEN) else {
        return orfs;
    };

    for start in 0..=last {
        if !patterns.start.matches(&sequence[start..start + CODON_LEN]) {
            continue;
        }

        let mut end = None;
        let mut frame = start;
        while frame <= last {
            if patterns.is_stop(&sequence[frame..frame + CODON_LEN]) {
                end = Some(frame + CODON_LEN);
                break;
            }
            frame += CODON_LEN;
        }

        if let Some(end) = end {
            orfs.push(Orf { start, end });
        }
    }

    orfs
}
