// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive shell: corpus acquisition and the menu loop.
//!
//! Everything here is I/O and input validation. Each menu action is turned
//! into a [`Command`] and handed to [`SearchSession::dispatch`]; the shell
//! never evaluates anything itself. Generic over `BufRead`/`Write` so tests
//! drive it with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use linedex::{
    format_result, format_result_json, parse_line_count, read_trimmed, Backend, Command, Corpus,
    Outcome, SearchResult, SearchSession, Strategy,
};

use super::display::paint_results;
use super::OutputFormat;

pub const MENU: &str = "=== Menu ===\n1. Find a person\n2. Print all people\n0. Exit";
pub const INCORRECT_OPTION: &str = "Incorrect option! Try again.";
pub const STRATEGY_PROMPT: &str = "Select a matching strategy: ALL, ANY, NONE";
pub const QUERY_PROMPT: &str = "Enter a name or email to search all suitable people.";
pub const BYE: &str = "Bye!";

/// How results are rendered.
#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub backend: Backend,
    pub format: OutputFormat,
    pub colors: bool,
}

/// Read the corpus with the console protocol, prompting along the way.
pub fn acquire_console_corpus<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Corpus> {
    writeln!(out, "Enter the number of lines with data:")?;
    let header = read_trimmed(input)?.unwrap_or_default();
    let expected = parse_line_count(&header)?;
    writeln!(out, "Enter all lines with data:")?;
    Ok(Corpus::read_lines(input, expected)?)
}

/// Render a search result as the user asked for it.
pub fn render(result: &SearchResult, options: &ShellOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(paint_results(&format_result(result), options.colors)),
        OutputFormat::Json => format_result_json(result).context("failed to serialize result"),
    }
}

enum MenuChoice {
    Find,
    ListAll,
    Exit,
}

fn parse_menu_choice(text: &str) -> Option<MenuChoice> {
    match text.trim() {
        "1" => Some(MenuChoice::Find),
        "2" => Some(MenuChoice::ListAll),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Run the menu until the user exits or input ends.
///
/// Bad menu choices, unknown strategies and empty queries are reported and
/// the menu is shown again. Anything else propagates.
pub fn run_menu<R: BufRead, W: Write>(
    session: &SearchSession,
    input: &mut R,
    out: &mut W,
    options: &ShellOptions,
) -> Result<()> {
    loop {
        writeln!(out, "\n{}", MENU)?;
        let Some(choice) = read_trimmed(input)? else {
            writeln!(out, "\n{}", BYE)?;
            return Ok(());
        };

        let command = match parse_menu_choice(&choice) {
            Some(MenuChoice::Find) => match read_find_command(input, out, options.backend)? {
                Some(command) => command,
                None => continue,
            },
            Some(MenuChoice::ListAll) => Command::ListAll,
            Some(MenuChoice::Exit) => Command::Exit,
            None => {
                writeln!(out, "\n{}", INCORRECT_OPTION)?;
                continue;
            }
        };

        match session.dispatch(&command) {
            Ok(Outcome::Results(result)) => writeln!(out, "\n{}", render(&result, options)?)?,
            Ok(Outcome::Listing(listing)) => writeln!(out, "\n{}", listing)?,
            Ok(Outcome::Exit) => {
                writeln!(out, "\n{}", BYE)?;
                return Ok(());
            }
            Err(e) if e.is_recoverable() => writeln!(out, "\n{}", e)?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Prompt for a strategy and a query. `None` means the input was rejected
/// (and reported) or ended.
fn read_find_command<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    backend: Backend,
) -> Result<Option<Command>> {
    writeln!(out, "\n{}", STRATEGY_PROMPT)?;
    let Some(name) = read_trimmed(input)? else {
        return Ok(None);
    };
    let strategy: Strategy = match name.parse() {
        Ok(strategy) => strategy,
        Err(e) => {
            tracing::debug!(%name, "rejected strategy");
            writeln!(out, "\n{}", e)?;
            return Ok(None);
        }
    };

    writeln!(out, "\n{}", QUERY_PROMPT)?;
    let Some(query) = read_trimmed(input)? else {
        return Ok(None);
    };
    Ok(Some(Command::Find {
        strategy,
        backend,
        query,
    }))
}
