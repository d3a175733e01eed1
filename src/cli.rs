use crate::sequence_processor::collectors::orf::Codon;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read settings from this file instead of the user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Hide progress spinners
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Measure nucleotide composition along the sequences of a FASTA/FASTQ file
    #[command(group(ArgGroup::new("format").required(true).args(["fasta", "fastq"])))]
    NtComposition {
        /// Input file (`-` reads from stdin)
        input: PathBuf,

        /// Input is FASTA
        #[arg(long)]
        fasta: bool,

        /// Input is FASTQ
        #[arg(long)]
        fastq: bool,

        /// Write the table here instead of stdout
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,

        /// Emit a JSON export instead of the tab-separated table
        #[arg(long)]
        json: bool,

        /// Worker threads (overrides the config file)
        #[arg(short = 't', long)]
        threads: Option<usize>,
    },

    /// Find potential open reading frames in FASTA files and print them as BED
    Orfs {
        /// Input FASTA file(s) (`-` reads from stdin)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write BED lines here instead of stdout
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,

        /// Start codon
        #[arg(long, default_value = "ATG")]
        start: Codon,

        /// Stop codon; repeat for several (default: TAA, TAG, TGA)
        #[arg(long = "stop")]
        stops: Vec<Codon>,
    },
}
