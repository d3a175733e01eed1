use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while turning an input source into records.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to detect compression of {path}: {source}")]
    Decompress {
        path: PathBuf,
        source: niffler::Error,
    },

    #[error("malformed FASTA record in {path}: {source}")]
    Fasta {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed FASTQ record in {path}: {source}")]
    Fastq {
        path: PathBuf,
        source: bio::io::fastq::Error,
    },
}

/// Rejected start/stop codon patterns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodonError {
    #[error("codon '{0}' must be exactly three ASCII symbols")]
    Length(String),

    #[error("at least one stop codon is required")]
    NoStops,
}
