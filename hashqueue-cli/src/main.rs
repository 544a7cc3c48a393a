use clap::{Parser, Subcommand};
use colored::Colorize;
use hashqueue::{
    buffer::{BufferKind, DemoSettings},
    config::{CliOverrides, CrackConfig},
    results::CrackOutcome,
    search::{reverse_md5, TargetHash},
    HashQueueError,
};
use std::{num::NonZeroUsize, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, HashQueueError>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
struct CrackArgs {
    /// MD5 digest to reverse, as 32 hex digits
    hash_value: String,

    /// Longest plaintext length to try [default: 6]
    #[arg(short = 'm', long)]
    max_length: Option<u32>,

    /// Number of worker threads [default: number of CPUs]
    #[arg(short = 'w', long)]
    num_workers: Option<NonZeroUsize>,

    /// Characters plaintexts are built from [default: a-z]
    #[arg(short = 'a', long)]
    alphabet: Option<String>,

    /// Configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the plaintext of an MD5 digest by brute force
    Crack(CrackArgs),

    /// Build the producer/consumer buffer and describe it
    Buffer {
        /// Buffer discipline (fifo|lifo|heap)
        #[arg(short = 'q', long = "queue", default_value = "fifo", value_parser = parse_kind)]
        queue: BufferKind,

        /// Number of producers
        #[arg(short = 'p', long, default_value = "3")]
        producers: usize,

        /// Number of consumers
        #[arg(short = 'c', long, default_value = "2")]
        consumers: usize,

        /// Producer speed
        #[arg(long, default_value = "1")]
        producer_speed: u32,

        /// Consumer speed
        #[arg(long, default_value = "1")]
        consumer_speed: u32,
    },
}

fn parse_kind(value: &str) -> std::result::Result<BufferKind, String> {
    value.parse().map_err(|e: HashQueueError| e.to_string())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crack(args) => {
            let target: TargetHash = args.hash_value.parse()?;

            let config = CrackConfig::load_from(args.config.as_deref())?.merge_with_cli(
                CliOverrides {
                    alphabet: args.alphabet,
                    max_length: args.max_length,
                    num_workers: args.num_workers,
                    log_level: args.log_level,
                },
            );
            init_tracing(&config.log_level);
            debug!("Effective configuration: {:?}", config);

            let outcome = reverse_md5(&target, &config)?;
            print_outcome(&outcome);
            Ok(())
        }
        Commands::Buffer {
            queue,
            producers,
            consumers,
            producer_speed,
            consumer_speed,
        } => {
            init_tracing("warn");
            let settings = DemoSettings {
                kind: queue,
                producers,
                consumers,
                producer_speed,
                consumer_speed,
            };
            let buffer = settings.build_buffer();
            debug!("Built {} buffer holding {} items", buffer.kind(), buffer.len());
            println!("{}", settings.describe());
            Ok(())
        }
    }
}

fn print_outcome(outcome: &CrackOutcome) {
    match &outcome.plaintext {
        Some(plaintext) => println!(
            "{} (found in {:.1}s)",
            plaintext.green(),
            outcome.elapsed.as_secs_f64()
        ),
        None => println!("{}", outcome.to_string().yellow()),
    }
}
