//! Same corpus, same query, same answer.

use std::sync::Arc;
use std::thread;

use crate::common::{make_corpus, result_paths, run};

#[test]
fn test_repeated_queries_agree() {
    let corpus = make_corpus(&[
        ("/a", "one two three two"),
        ("/b", "two two two"),
        ("/c", "three one"),
    ]);
    let first = run(&corpus, "two one");
    for _ in 0..10 {
        assert_eq!(result_paths(&run(&corpus, "two one")), result_paths(&first));
    }
}

#[test]
fn test_concurrent_queries_share_one_corpus() {
    let corpus = Arc::new(make_corpus(&[
        ("/wiki/A.html", "cat cat dog"),
        ("/wiki/B.html", "dog dog dog"),
    ]));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let corpus = Arc::clone(&corpus);
            thread::spawn(move || {
                let query = if i % 2 == 0 { "cat" } else { "dog" };
                (query, run(&corpus, query))
            })
        })
        .collect();

    for handle in handles {
        let (query, response) = handle.join().unwrap();
        let expected = if query == "cat" {
            vec!["/wiki/A.html"]
        } else {
            vec!["/wiki/B.html", "/wiki/A.html"]
        };
        assert_eq!(result_paths(&response), expected);
    }
}
