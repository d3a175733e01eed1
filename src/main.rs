use clap::Parser;
use nt_tools::cli::{Args, Commands};
use nt_tools::config::Config;
use nt_tools::commands;
use nt_tools::sequence_processor::readers::RecordFormat;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = load_config(&args).and_then(|config| {
        let config = Config {
            show_progress: config.show_progress && !args.quiet,
            ..config
        };

        match args.command {
            Commands::NtComposition {
                input,
                fasta: _,
                fastq,
                output_file,
                json,
                threads,
            } => {
                let format = if fastq { RecordFormat::Fastq } else { RecordFormat::Fasta };
                let config = Config {
                    threads: threads.unwrap_or(config.threads),
                    ..config
                };
                commands::nt_composition::run(input, format, output_file, json, &config)
            }
            Commands::Orfs {
                inputs,
                output_file,
                start,
                stops,
            } => commands::orfs::run(inputs, output_file, start, stops, &config),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    match &args.config {
        Some(path) => Config::from_path(path),
        None => Ok(Config::load()),
    }
}
