//! Repeated evaluation and rebuilding give identical answers.

use std::sync::Arc;
use std::thread;

use super::common::{session, PEOPLE_LINES};
use linedex::{Backend, Strategy};

#[test]
fn test_repeated_queries_are_identical() {
    let s = session(PEOPLE_LINES);
    let first = s.search("erick webb", Strategy::Any, Backend::Index).unwrap();
    for _ in 0..10 {
        let again = s.search("erick webb", Strategy::Any, Backend::Index).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_rebuilt_sessions_agree() {
    let a = session(PEOPLE_LINES);
    let b = session(PEOPLE_LINES);
    assert_eq!(a.stats(), b.stats());
    for (term, postings) in a.index().terms() {
        assert_eq!(b.index().lookup(term), Some(postings));
    }
}

#[test]
fn test_concurrent_readers_see_the_same_results() {
    let s = Arc::new(session(PEOPLE_LINES));
    let expected = s.run_query("erick", Strategy::All, true).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let s = Arc::clone(&s);
            thread::spawn(move || s.run_query("erick", Strategy::All, i % 2 == 0).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
