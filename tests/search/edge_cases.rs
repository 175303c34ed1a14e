//! Edge cases: punctuation, repeats, absent tokens, degenerate corpora.

use super::common::{run_both, session};
use linedex::{Backend, Strategy};

#[test]
fn test_absent_token_makes_all_empty_not_an_error() {
    let s = session(&["alpha beta", "beta gamma"]);
    assert_eq!(run_both(&s, "beta zeta", Strategy::All), "No data found.");
}

#[test]
fn test_absent_tokens_are_ignored_by_any() {
    let s = session(&["alpha beta", "beta gamma"]);
    assert_eq!(
        run_both(&s, "zeta gamma", Strategy::Any),
        "1 result.\nbeta gamma"
    );
}

#[test]
fn test_none_of_absent_tokens_matches_everything() {
    let s = session(&["alpha beta", "beta gamma"]);
    assert_eq!(
        run_both(&s, "zeta", Strategy::None),
        "2 results.\nalpha beta\nbeta gamma"
    );
}

#[test]
fn test_punctuation_and_separator_runs() {
    let s = session(&["Hello, world!", "...what?!", "hello\tthere"]);
    assert_eq!(
        run_both(&s, "  HELLO!! ", Strategy::All),
        "2 results.\nHello, world!\nhello\tthere"
    );
    assert_eq!(run_both(&s, "what", Strategy::All), "1 result.\n...what?!");
}

#[test]
fn test_other_punctuation_stays_inside_tokens() {
    let s = session(&["rock-n-roll", "rock n roll"]);
    assert_eq!(run_both(&s, "rock", Strategy::All), "1 result.\nrock n roll");
    assert_eq!(
        run_both(&s, "rock-n-roll", Strategy::All),
        "1 result.\nrock-n-roll"
    );
}

#[test]
fn test_repeated_query_tokens_do_not_change_result() {
    let s = session(&["a b", "b c", "c d"]);
    assert_eq!(
        run_both(&s, "b b B", Strategy::All),
        run_both(&s, "b", Strategy::All)
    );
    assert_eq!(
        run_both(&s, "b b", Strategy::None),
        run_both(&s, "b", Strategy::None)
    );
}

#[test]
fn test_token_repeated_within_line_listed_once() {
    let s = session(&["go go go", "stop"]);
    assert_eq!(s.index().lookup("go"), Some(&[0][..]));
    assert_eq!(run_both(&s, "go", Strategy::Any), "1 result.\ngo go go");
}

#[test]
fn test_blank_lines_only_match_none() {
    let s = session(&["", "x", "  ,  "]);
    assert_eq!(run_both(&s, "x", Strategy::Any), "1 result.\nx");
    let result = s.search("x", Strategy::None, Backend::Scan).unwrap();
    assert_eq!(result.line_ids(), vec![0, 2]);
}

#[test]
fn test_duplicate_lines_are_distinct_results() {
    let s = session(&["same line", "same line"]);
    assert_eq!(
        run_both(&s, "same", Strategy::All),
        "2 results.\nsame line\nsame line"
    );
}

#[test]
fn test_non_ascii_text_is_lowercased() {
    let s = session(&["Ärger ÜBER alles", "über"]);
    assert_eq!(
        run_both(&s, "über", Strategy::All),
        "2 results.\nÄrger ÜBER alles\nüber"
    );
}
