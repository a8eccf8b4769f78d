use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use sufx::output::{self, ColorMode, SearchReport};
use sufx::trie::{SuffixTrie, SuffixTrieBuilder, TrieConfig, DEFAULT_MAX_TEXT_LEN};
use sufx::utils::{load_config, load_text, progress};
use termcolor::StandardStream;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sufx")]
#[command(about = "Find every occurrence of a substring using a suffix trie")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every offset where QUERY starts
    Search {
        /// Substring to look for
        query: String,

        #[command(flatten)]
        input: InputArgs,

        /// Emit a JSON object instead of plain lines
        #[arg(long)]
        json: bool,

        /// When to use colors
        #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
        color: ColorMode,
    },
    /// Dump the trie level by level
    Rows {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show trie statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Index the contents of this file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Index this text
    #[arg(short, long)]
    text: Option<String>,
}

#[derive(Args)]
struct InputArgs {
    #[command(flatten)]
    source: Source,

    /// JSON trie configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fold ASCII case in text and query
    #[arg(short, long)]
    ignore_case: bool,

    /// Show a progress bar while indexing
    #[arg(long)]
    progress: bool,

    /// Refuse texts longer than this many characters unless the config
    /// sets its own limit (0 disables the limit)
    #[arg(long, default_value_t = DEFAULT_MAX_TEXT_LEN)]
    max_len: usize,
}

impl InputArgs {
    fn build(&self) -> Result<(String, SuffixTrie)> {
        let text = load_text(self.source.file.as_deref(), self.source.text.as_deref())?;
        let mut config: TrieConfig = load_config(self.config.as_deref())?;
        if self.ignore_case {
            config.case_insensitive = true;
        }
        if config.max_text_len.is_none() && self.max_len > 0 {
            config.max_text_len = Some(self.max_len);
        }

        let suffixes = text.chars().count() as u64 + 1;
        let pb = progress::suffix_bar(suffixes, self.progress);
        let trie = SuffixTrieBuilder::new(config)
            .build_with_progress(&text, |_| pb.inc(1))
            .context("Failed to build suffix trie")?;
        pb.finish_and_clear();

        tracing::info!(nodes = trie.node_count(), "suffix trie ready");
        Ok((text, trie))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search {
            query,
            input,
            json,
            color,
        } => {
            let (text, trie) = input.build()?;
            let offsets = trie.search(&query);
            tracing::debug!(query = %query, found = offsets.is_some(), "search");

            if json {
                let report = SearchReport {
                    query: &query,
                    found: offsets.is_some(),
                    offsets: offsets.as_deref().unwrap_or(&[]),
                };
                output::print_json(&mut io::stdout().lock(), &report)?;
            } else if let Some(offsets) = &offsets {
                // Case folding is ASCII-only, so folded and original chars align
                let chars: Vec<char> = text.chars().collect();
                let mut stdout = StandardStream::stdout(color.into());
                output::print_matches(&mut stdout, &chars, query.chars().count(), offsets)?;
            }

            if offsets.is_none() {
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Rows { input } => {
            let (_, trie) = input.build()?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", trie)?;
        }
        Commands::Stats { input, json } => {
            let (_, trie) = input.build()?;
            let stats = trie.stats();
            if json {
                output::print_json(&mut io::stdout().lock(), &stats)?;
            } else {
                print!("{}", stats);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
