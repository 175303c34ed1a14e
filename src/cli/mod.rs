// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the linedex command-line interface.
//!
//! Two modes. Without `--query` the binary runs the interactive menu: the
//! corpus comes from `--data` or from the console (a line count, then the
//! lines), and queries are entered one at a time. With `--query` it evaluates
//! that single query against the corpus (from `--data` or piped on stdin),
//! prints the result and exits.

pub mod display;
pub mod shell;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use linedex::{Backend, Strategy};

#[derive(Parser, Debug)]
#[command(
    name = "linedex",
    about = "Search a fixed set of lines with ALL / ANY / NONE keyword queries",
    version
)]
pub struct Cli {
    /// File to read lines from, one entry per line
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Evaluate a single query and exit instead of running the menu
    #[arg(short, long)]
    pub query: Option<String>,

    /// Matching strategy for --query: all, any or none
    #[arg(short, long, default_value = "all")]
    pub strategy: Strategy,

    /// Answer queries from the inverted index or by scanning every line
    #[arg(short, long, default_value = "index")]
    pub backend: Backend,

    /// Result rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log index statistics and per-query timings to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// "N results." header followed by the matched lines
    Text,
    /// Pretty-printed JSON search result
    Json,
}
