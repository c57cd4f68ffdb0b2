//! Subtext CLI binary.
//!
//! Subtitle token extraction and compression similarity.
//!
//! # Commands
//!
//! - `detect` - Detect the format of a subtitle file
//! - `tokens` - Print the token stream of a subtitle file
//! - `complexity` - Compressed size of a token stream
//! - `entropy` - LZ match entropy rate of a token stream
//! - `distance` - Normalized distance between two subtitle files
//! - `matrix` - Pairwise distances across many subtitle files

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use subtext::{
    codec::Algorithm,
    config::Config,
    similarity::{CompressionOracle, Corpus, Method},
    LzMatchEntropy, SubtitleDocument, VERSION,
};

#[derive(Parser)]
#[command(name = "subtext")]
#[command(version = VERSION)]
#[command(about = "Subtitle token streams and compression similarity", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/subtext/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Compressor (brotli, zlib, gzip, none)
    #[arg(short, long, global = true)]
    algorithm: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the subtitle format
    Detect {
        /// Subtitle file
        file: PathBuf,
    },

    /// Print the token stream
    Tokens {
        /// Subtitle file
        file: PathBuf,

        /// Stop after this many minutes (numbered subtitles only)
        #[arg(short, long)]
        max_minutes: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compressed size of the token stream
    Complexity {
        /// Subtitle file
        file: PathBuf,

        /// Stop after this many minutes (numbered subtitles only)
        #[arg(short, long)]
        max_minutes: Option<u32>,
    },

    /// Entropy rate of the token stream
    Entropy {
        /// Subtitle file
        file: PathBuf,

        /// Stop after this many minutes (numbered subtitles only)
        #[arg(short, long)]
        max_minutes: Option<u32>,
    },

    /// Distance between two subtitle files
    Distance {
        /// First subtitle file
        a: PathBuf,

        /// Second subtitle file
        b: PathBuf,

        /// Complexity measure (compression, entropy)
        #[arg(short, long)]
        method: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pairwise distances across subtitle files
    Matrix {
        /// Subtitle files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Complexity measure (compression, entropy)
        #[arg(short, long)]
        method: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref(), cli.algorithm.as_deref())?;

    match cli.command {
        Commands::Detect { file } => cmd_detect(&file),
        Commands::Tokens {
            file,
            max_minutes,
            json,
        } => cmd_tokens(&config, &file, max_minutes, json),
        Commands::Complexity { file, max_minutes } => cmd_complexity(&config, &file, max_minutes),
        Commands::Entropy { file, max_minutes } => cmd_entropy(&config, &file, max_minutes),
        Commands::Distance { a, b, method, json } => {
            cmd_distance(&config, &a, &b, method.as_deref(), json)
        },
        Commands::Matrix {
            files,
            method,
            output,
        } => cmd_matrix(&config, &files, method.as_deref(), output),
    }
}

/// File config (explicit or default location), then environment, then flags
fn load_config(path: Option<&Path>, algorithm: Option<&str>) -> anyhow::Result<Config> {
    let file_config = match path {
        Some(path) => Config::from_file(path)?,
        None => match Config::default_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!("Using config file {}", path.display());
                Config::from_file(path)?
            },
            None => Config::default(),
        },
    };

    let mut config = file_config.merge(Config::from_env());
    if let Some(algorithm) = algorithm {
        config.compression.algorithm = algorithm.parse()?;
    }
    Ok(config)
}

fn resolve_method(config: &Config, method: Option<&str>) -> anyhow::Result<Method> {
    Ok(match method {
        Some(m) => m.parse()?,
        None => config.similarity.method,
    })
}

fn read_tokens(config: &Config, file: &Path, max_minutes: Option<u32>) -> anyhow::Result<Vec<String>> {
    let doc = SubtitleDocument::load(file)?;
    let mut options = config.tokenizer_options();
    if max_minutes.is_some() {
        options.max_minutes = max_minutes;
    }
    let tokens = doc.tokenize(&options)?;
    tracing::debug!("{}: {} lines, {} tokens", file.display(), doc.len(), tokens.len());
    Ok(tokens)
}

fn cmd_detect(file: &Path) -> anyhow::Result<()> {
    let doc = SubtitleDocument::load(file)?;
    println!("{}", doc.format());
    Ok(())
}

fn cmd_tokens(
    config: &Config,
    file: &Path,
    max_minutes: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let tokens = read_tokens(config, file, max_minutes)?;
    if json {
        println!("{}", serde_json::to_string(&tokens)?);
    } else {
        println!("{}", tokens.join(" "));
    }
    Ok(())
}

fn cmd_complexity(config: &Config, file: &Path, max_minutes: Option<u32>) -> anyhow::Result<()> {
    let tokens = read_tokens(config, file, max_minutes)?;
    let oracle = config.oracle();
    let result = oracle.measure(&tokens)?;

    println!("Complexity:");
    println!("  Tokens:        {}", tokens.len());
    println!("  Serialization: {:?}", oracle.serialization());
    println!("  Raw:           {} bytes", result.original_bytes);
    println!("  Compressed:    {} bytes ({})", result.compressed_bytes, result.algorithm);
    println!("  Ratio:         {:.4}", result.ratio());

    println!();
    println!("Algorithm Comparison:");
    for algo in Algorithm::all() {
        let other = CompressionOracle::with_algorithm(*algo)
            .with_serialization(oracle.serialization())
            .measure(&tokens)?;
        println!(
            "  {:<8} {} bytes -> {} bytes (ratio: {:.4})",
            algo.name(),
            other.original_bytes,
            other.compressed_bytes,
            other.ratio()
        );
    }

    Ok(())
}

fn cmd_entropy(config: &Config, file: &Path, max_minutes: Option<u32>) -> anyhow::Result<()> {
    let tokens = read_tokens(config, file, max_minutes)?;
    let estimate = LzMatchEntropy::new().estimate(&tokens)?;

    println!("Entropy Rate:");
    println!("  Tokens:       {}", estimate.len);
    println!("  Vocabulary:   {}", estimate.alphabet);
    println!("  Sum Lambda:   {}", estimate.sum_lambda);
    println!("  H:            {:.4} bits/token", estimate.bits_per_token);
    Ok(())
}

fn cmd_distance(
    config: &Config,
    a: &Path,
    b: &Path,
    method: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let method = resolve_method(config, method)?;
    let tokens_a = read_tokens(config, a, None)?;
    let tokens_b = read_tokens(config, b, None)?;
    let report = config.estimator().compare(&tokens_a, &tokens_b, method)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:.6}", report.score);
        eprintln!();
        eprintln!("Distance ({method}):");
        eprintln!("  C(a):      {:.4}", report.complexity_a);
        eprintln!("  C(b):      {:.4}", report.complexity_b);
        eprintln!("  C(a ++ b): {:.4}", report.complexity_joint);
    }
    Ok(())
}

fn cmd_matrix(
    config: &Config,
    files: &[PathBuf],
    method: Option<&str>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let method = resolve_method(config, method)?;
    let documents = load_documents(files);
    if documents.is_empty() {
        anyhow::bail!("none of the {} subtitle files could be read", files.len());
    }

    let corpus = Corpus::from_documents(
        documents.iter().map(|(name, doc)| (name.clone(), doc)),
        &config.tokenizer_options(),
    )?;
    let matrix = corpus.distance_matrix(&config.estimator(), method)?;
    let json = matrix.to_json()?;

    if let Some(path) = output {
        std::fs::write(path, json)?;
    } else {
        println!("{json}");
    }
    Ok(())
}

/// Load every readable file, warning about the rest
fn load_documents(files: &[PathBuf]) -> Vec<(String, SubtitleDocument)> {
    files
        .iter()
        .filter_map(|f| match SubtitleDocument::load(f) {
            Ok(doc) => Some((f.display().to_string(), doc)),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", f.display(), e);
                None
            },
        })
        .collect()
}
