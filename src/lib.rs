//! Boolean keyword search over a fixed collection of lines.
//!
//! A corpus of lines is tokenized once into an inverted index. Queries are
//! tokenized the same way and combined with ALL, ANY or NONE semantics,
//! answered either from the index or by scanning the lines directly. Both
//! backends return the same lines, in corpus order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ tokenize.rs │────▶│ inverted.rs  │────▶│  search/     │────▶│  format.rs  │
//! │ (tokenize)  │     │ (build,      │     │ (Query,      │     │ (format_    │
//! │             │     │  lookup)     │     │  evaluate)   │     │  results)   │
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!        ▲                                        │
//!        └──────────── ScanSource ────────────────┘
//!
//!                 session.rs: build_index + run_query + dispatch
//! ```
//!
//! # Usage
//!
//! ```
//! use linedex::{build_index, Strategy};
//!
//! let session = build_index(vec![
//!     "The Brown FoX".to_string(),
//!     "fox jumps".to_string(),
//!     "no match here".to_string(),
//! ])?;
//!
//! let shown = session.run_query("fox", Strategy::All, true)?;
//! assert_eq!(shown, "2 results.\nThe Brown FoX\nfox jumps");
//! # Ok::<(), linedex::SearchError>(())
//! ```

// Module declarations
pub mod contracts;
mod corpus;
mod error;
mod format;
mod inverted;
pub mod logging;
pub mod search;
mod session;
mod tokenize;
mod types;

pub mod testing;

// Re-exports for public API
pub use corpus::{parse_line_count, read_trimmed, Corpus};
pub use error::{Result, SearchError};
pub use format::{
    format_listing, format_result, format_result_json, format_results, results_header, NO_RESULTS,
};
pub use inverted::{build_inverted_index, build_inverted_index_parallel, InvertedIndex};
pub use search::{evaluate, evaluate_with, IndexSource, MembershipSource, Query, ScanSource};
pub use session::{
    build_index, Command, Outcome, SearchSession, LISTING_TITLE, PARALLEL_BUILD_THRESHOLD,
};
pub use tokenize::{is_separator, tokenize, tokenize_unique, SEPARATORS};
pub use types::{Backend, Hit, IndexStats, LineId, SearchResult, Strategy};
