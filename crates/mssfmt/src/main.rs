//! mssfmt CLI
//!
//! Command-line tool for inspecting and formatting T-SQL scripts.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use mssfmt::{load_script, render, KeywordCase, ParseReport};

/// T-SQL script formatter.
#[derive(Parser)]
#[command(name = "mssfmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every word of a script with its position.
    Tokens {
        /// Script to scan.
        path: PathBuf,
    },

    /// Print the SELECT statements of a script.
    Parse {
        /// Script to parse.
        path: PathBuf,

        /// Print JSON instead of the debug tree.
        #[arg(long)]
        json: bool,
    },

    /// Rewrite keyword case, leaving everything else as written.
    Format {
        /// Script to format.
        path: PathBuf,

        /// Write here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keyword case.
        #[arg(
            short,
            long,
            value_enum,
            env = "MSSFMT_KEYWORD_CASE",
            default_value_t = KeywordCase::Upper
        )]
        keyword_case: KeywordCase,
    },
}

fn report_diagnostics<E: std::fmt::Display>(diagnostics: &[E]) {
    for diagnostic in diagnostics {
        warn!("{diagnostic}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the output.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Tokens { path } => {
            let script = load_script(&path)?;
            let words = script.scan();
            for word in &words {
                writeln!(
                    out,
                    "{}\t{}\t{:?}",
                    words.position(word.span.start),
                    word.token,
                    word.literal
                )?;
            }
            report_diagnostics(words.diagnostics());
        }

        Commands::Parse { path, json } => {
            let script = load_script(&path)?;
            let parsed = script.parse();
            if json {
                writeln!(out, "{}", ParseReport::new(&parsed).to_json()?)?;
            } else {
                for query in &parsed.queries {
                    writeln!(out, "{query:#?}")?;
                }
            }
            report_diagnostics(&parsed.diagnostics);
            info!(
                "{}: {} SELECT statement(s), {} diagnostic(s)",
                script.name,
                parsed.queries.len(),
                parsed.diagnostics.len()
            );
        }

        Commands::Format {
            path,
            output,
            keyword_case,
        } => {
            let script = load_script(&path)?;
            let words = script.scan();
            report_diagnostics(words.diagnostics());
            let formatted = render(&words, keyword_case);

            if let Some(output) = output {
                fs::write(&output, formatted)?;
                info!("Wrote {}", output.display());
            } else {
                out.write_all(formatted.as_bytes())?;
            }
            debug!(keyword_case = ?keyword_case, "formatted {}", script.name);
        }
    }

    out.flush()?;
    Ok(())
}
