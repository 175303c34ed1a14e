use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use linedex::{Corpus, SearchSession};

mod cli;
use cli::display::{error_label, use_colors};
use cli::shell::{acquire_console_corpus, render, run_menu, ShellOptions};
use cli::{Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();
    linedex::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", error_label(use_colors()), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let options = ShellOptions {
        backend: cli.backend,
        format: cli.format,
        colors: cli.format == OutputFormat::Text && use_colors(),
    };

    let corpus = load_corpus(&cli, &mut input, &mut out)?;
    let session = SearchSession::new(corpus);
    tracing::info!(stats = %session.stats(), "session ready");

    match cli.query {
        // One-shot: evaluate, print, exit
        Some(query) => {
            let result = session.search(&query, cli.strategy, cli.backend)?;
            writeln!(out, "{}", render(&result, &options)?)?;
        }
        None => run_menu(&session, &mut input, &mut out, &options)?,
    }

    out.flush()?;
    Ok(())
}

/// `--data` wins; otherwise one-shot mode reads plain lines from stdin and
/// the menu uses the prompted console protocol.
fn load_corpus<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<Corpus> {
    match (&cli.data, &cli.query) {
        (Some(path), _) => Corpus::from_path(path)
            .with_context(|| format!("failed to load data from {}", path.display())),
        (None, Some(_)) => Corpus::from_reader(input).context("failed to read lines from stdin"),
        (None, None) => acquire_console_corpus(input, out),
    }
}
