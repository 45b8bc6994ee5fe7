use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use glyphgen::config::GeneratorConfig;
use glyphgen::generate::generate_with_progress;
use glyphgen::progress::{BarProgress, LogProgress};
use glyphgen::writer::write_dictionary;
use glyphgen::{Alphabet, Generation};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generates dictionaries of unique, visually confusable strings",
    long_about = None
)]
struct Cli {
    /// Number of unique strings to generate
    #[arg(short = 'c', long, value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// Output file, one string per line
    #[arg(short = 'o', long, default_value = "dictionary.txt")]
    outfile: PathBuf,

    /// Symbols to build strings from (e.g. "Il" or "0O")
    #[arg(short = 'a', long)]
    alphabet: Option<String>,

    /// Number of worker threads (default: derived from count and CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show a progress bar during generation
    #[arg(long)]
    progress: bool,

    /// Print the summary as JSON instead of the human-readable report
    #[arg(long)]
    json: bool,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    run()
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let total_started = Instant::now();

    let base = match &cli.config {
        Some(path) => GeneratorConfig::load_from(Some(path))
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GeneratorConfig::load().unwrap_or_default(),
    };

    let alphabet = match &cli.alphabet {
        Some(symbols) => Alphabet::new(symbols.chars().collect())?,
        None => Alphabet::default(),
    };

    let config = base.merge_with_cli(GeneratorConfig {
        count: cli.count,
        alphabet,
        thread_count: cli.threads,
        log_level: if cli.verbose {
            "info".to_string()
        } else {
            "warn".to_string()
        },
        ..GeneratorConfig::default()
    });

    init_tracing(&config.log_level);
    tracing::debug!("effective configuration: {:?}", config);

    let generation = if cli.progress {
        let bar = BarProgress::new(config.count);
        let generation = generate_with_progress(&config, &bar)?;
        bar.finish(generation.len() as u64);
        generation
    } else {
        generate_with_progress(&config, &LogProgress)?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&generation.stats())?);
    } else {
        print_summary(&generation);
    }

    // The generation survives a failed write; report and exit non-zero so
    // callers notice, rather than silently dropping the run.
    let report = write_dictionary(&cli.outfile, &generation)
        .with_context(|| format!("failed to write dictionary to {}", cli.outfile.display()))?;
    println!(
        "Saved {} strings to {} in {}",
        report.written.to_string().green(),
        cli.outfile.display().to_string().blue(),
        humantime::format_duration(report.elapsed)
    );

    println!(
        "Total time: {}",
        humantime::format_duration(total_started.elapsed())
    );

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_summary(generation: &Generation) {
    let stats = generation.stats();

    println!("\n{}", "=== Generation Summary ===".bold());
    println!(
        "Total strings generated: {}",
        stats.total.to_string().green()
    );
    println!("String length: {}", stats.string_length);
    println!("Workers: {}", stats.workers);
    println!("Generation time: {}ms", stats.elapsed_ms);
    println!(
        "Throughput: {:.0} strings/s",
        stats.strings_per_second
    );

    let samples = generation.sample(5);
    if !samples.is_empty() {
        let rendered: Vec<String> = samples.iter().map(|s| format!("{:?}", s)).collect();
        println!("Sample strings: {}", rendered.join(" "));
    }
}
