//! End-to-end tests of the composition algebra over integer leaf filters.

use std::collections::HashSet;
use std::sync::atomic::Ordering;

use nodesieve::prelude::*;
use nodesieve_test::{IsEven, IsPositive, SpyFilter};

#[test]
fn conjunction_truth_table() {
    let even_and_positive = IsEven.and(IsPositive);
    assert!(even_and_positive.test(&4));
    assert!(!even_and_positive.test(&-4));
    assert!(!even_and_positive.test(&3));
}

#[test]
fn disjunction_truth_table() {
    let even_or_positive = IsEven.or(IsPositive);
    assert!(even_or_positive.test(&3)); // positive, odd
    assert!(!even_or_positive.test(&-3)); // neither
    assert!(even_or_positive.test(&-4)); // even, negative
}

#[test]
fn conjunction_chains_the_narrowed_value() {
    let chain = IsEven.and(IsPositive);
    let candidate = 4;
    let narrowed_by_left = IsEven.narrow(&candidate).unwrap();
    assert_eq!(chain.narrow(&candidate), IsPositive.narrow(narrowed_by_left));
}

#[test]
fn conjunction_skips_right_when_left_rejects() {
    let spy = SpyFilter::new(IsPositive);
    let calls = spy.counter();
    let even_and_positive = IsEven.and(spy);

    assert!(!even_and_positive.test(&3));
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    assert!(even_and_positive.test(&4));
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn disjunction_skips_right_when_left_accepts() {
    let spy = SpyFilter::new(IsPositive);
    let calls = spy.counter();
    let even_or_positive = IsEven.or(spy);

    assert!(even_or_positive.test(&4));
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    assert!(even_or_positive.test(&3));
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn negation_completes_the_algebra() {
    let odd = IsEven.negate();
    assert!(odd.test(&3));
    assert!(!odd.test(&4));

    // De Morgan spot check: !(even || positive) == !even && !positive.
    let neither = IsEven.or(IsPositive).negate();
    assert_eq!(neither.test(&-3), IsEven.negate().and(IsPositive.negate()).test(&-3));
    assert!(neither.test(&-3));
    assert!(!neither.test(&4));
}

#[test]
fn commutative_trees_deduplicate() {
    let mut set: HashSet<BoxedFilter<i32, i32>> = HashSet::new();
    set.insert(IsEven.boxed().and(IsPositive.boxed()));
    set.insert(IsPositive.boxed().and(IsEven.boxed()));
    assert_eq!(set.len(), 1);

    set.insert(IsEven.boxed().or(IsPositive.boxed()));
    set.insert(IsPositive.boxed().or(IsEven.boxed()));
    assert_eq!(set.len(), 2);

    // Same operands under a different combinator kind stay distinct.
    assert!(set.contains(&IsEven.boxed().and(IsPositive.boxed())));
    assert!(set.contains(&IsPositive.boxed().or(IsEven.boxed())));
}

#[test]
fn deep_tree_evaluates_correctly() {
    let accept = filters::pass::<i32>().boxed();
    let reject = filters::pass::<i32>().negate().boxed();

    // OR spine, depth > 50, true only via the single accepting leaf.
    let mut deep = accept.clone();
    for _ in 0..64 {
        deep = reject.clone().or(deep);
    }
    assert!(deep.test(&7));

    // AND spine with one rejecting leaf at the bottom is false throughout.
    let mut strict = reject;
    for _ in 0..64 {
        strict = accept.clone().and(strict);
    }
    assert!(!strict.test(&7));
}

#[test]
fn shared_trees_evaluate_from_multiple_threads() {
    let filter = IsEven.boxed().and(IsPositive.boxed());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let filter = filter.clone();
            std::thread::spawn(move || (0..100).filter(|n| filter.test(n)).count())
        })
        .collect();

    // 2, 4, ..., 98: the even positives below 100.
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 49);
    }
}

#[test]
fn mixed_model_and_numeric_filters_coexist_by_type() {
    // The contract is generic over the candidate type: document filters and
    // integer filters live in differently typed worlds and never compare
    // equal.
    let doc_filter = filters::any_content().boxed();
    let int_filter = IsEven.boxed();
    assert!(!doc_filter.structural_eq(&int_filter));

    let node: Content = Text::new("t").into();
    assert!(doc_filter.test(&node));
    assert!(int_filter.test(&2));
}
