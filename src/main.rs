//! freqsum CLI - extractive text summarisation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use freqsum::source::Source;
use freqsum::{demo, logging, stopwords, Config, RequestHandler, Summarizer, Summary};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "freqsum")]
#[command(author, version, about = "Extractive text summarisation by word frequency", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by FREQSUM_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise text, a local file, a web page, or stdin
    Summarise {
        /// Text to summarise; stdin is read when no source is given
        #[arg(conflicts_with_all = ["file", "url"])]
        text: Option<String>,
        /// Read the document from a file (plain text, .pdf or .pptx)
        #[arg(short, long, conflicts_with = "url")]
        file: Option<PathBuf>,
        /// Fetch the document from a web page
        #[arg(short, long)]
        url: Option<String>,
        /// Number of sentences to keep
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        sentences: Option<i64>,
        /// Show lengths, sentence counts and the most frequent words
        #[arg(long)]
        stats: bool,
        /// Print the summary and its statistics as JSON
        #[arg(long, conflicts_with = "stats")]
        json: bool,
    },
    /// Handle a JSON request body (file or stdin) and print the response
    Request {
        /// File holding the request body
        file: Option<PathBuf>,
    },
    /// Summarise the built-in example text
    Demo,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Commands::Summarise {
            text,
            file,
            url,
            sentences,
            stats,
            json,
        } => {
            let (config, summarizer) = load()?;

            let source = match (text, file, url) {
                (_, Some(path), _) => Source::File(path),
                (_, _, Some(url)) => Source::Url(url),
                (Some(text), _, _) => Source::Inline(text),
                (None, None, None) => {
                    if atty::is(atty::Stream::Stdin) {
                        anyhow::bail!("no input: pass TEXT, --file, --url, or pipe text on stdin");
                    }
                    Source::Stdin
                }
            };

            let text = source
                .load(Duration::from_secs(config.fetch.timeout_secs))
                .await?;
            let requested = sentences.unwrap_or(config.summarizer.default_sentences);
            let summary = Summary::create(&summarizer, &text, requested);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.summary);
                if stats {
                    print_stats(&summary, &summarizer, &text);
                }
            }
        }
        Commands::Request { file } => {
            let (config, summarizer) = load()?;
            let source = file.map_or(Source::Stdin, Source::File);
            let body = source
                .load(Duration::from_secs(config.fetch.timeout_secs))
                .await?;

            let response = RequestHandler::from_config(summarizer, &config).handle(&body);
            let status = if response.status == 200 {
                response.status.to_string().green()
            } else {
                response.status.to_string().red()
            };
            eprintln!("{} {}", "Status:".bold(), status);
            println!("{}", serde_json::to_string_pretty(&response.body)?);

            if response.status != 200 {
                std::process::exit(1);
            }
        }
        Commands::Demo => {
            let (_, summarizer) = load()?;
            let summary = demo::example(&summarizer);

            println!("{}\n", "=== Original text ===".bold());
            println!("{}\n", demo::EXAMPLE_TEXT);
            println!(
                "{}\n",
                format!("=== Summary ({} sentences) ===", demo::EXAMPLE_SENTENCES).bold()
            );
            println!("{}", summary.summary);
            print_stats(&summary, &summarizer, demo::EXAMPLE_TEXT);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "freqsum", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration and initialize the stop-word set
fn load() -> anyhow::Result<(Config, Summarizer<'static>)> {
    let config = Config::load()?;
    let stop_words = stopwords::init(config.stop_words.extra.as_slice())?;
    Ok((config, Summarizer::new(stop_words)))
}

fn print_stats(summary: &Summary, summarizer: &Summarizer<'_>, text: &str) {
    println!("\n📊 {}", "Details:".bold());
    println!("  Original length:    {} characters", summary.original_length);
    println!("  Summary length:     {} characters", summary.summary_length);
    println!("  Original sentences: {}", summary.sentences_in_original);
    println!("  Summarised to:      {} sentences", summary.sentences_requested);
    println!("  Compression ratio:  {}%", summary.compression_percent());

    let table = summarizer.frequency_table(text);
    let top: Vec<String> = table
        .top(5)
        .into_iter()
        .map(|(word, count)| format!("{} ({})", word, count))
        .collect();
    if !top.is_empty() {
        println!("  Top words:          {}", top.join(", ").dimmed());
    }
}
