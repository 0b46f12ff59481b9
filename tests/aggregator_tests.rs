use pte_stats_analyzer::aggregator::{merge_max, GlobalFlagSet, ProcessAggregate};
use pte_stats_analyzer::parser::{parse_sample, FlagCounts};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn sample(pairs: &[(u64, u64)]) -> FlagCounts {
    pairs.iter().copied().collect()
}

#[test]
fn test_duplicate_record_in_one_file() {
    let parsed = parse_sample("Flags: 0x3 Count: 5\nFlags: 0x3 Count: 5\n");
    let agg = ProcessAggregate::from_samples(100, [&parsed]);

    assert_eq!(agg.unique_configurations(), 1);
    assert_eq!(agg.total_events(), 5);
}

#[test]
fn test_max_wins_across_files() {
    let first = parse_sample("Flags: 0x1 Count: 10\n");
    let second = parse_sample("Flags: 0x1 Count: 3\nFlags: 0x5 Count: 7\n");

    let agg = ProcessAggregate::from_samples(200, [&first, &second]);

    let expected: BTreeMap<u64, u64> = [(0x1, 10), (0x5, 7)].into_iter().collect();
    assert_eq!(agg.counts, expected);
    assert_eq!(agg.unique_configurations(), 2);
    assert_eq!(agg.total_events(), 17);
}

#[test]
fn test_merge_is_commutative_and_associative() {
    let a = sample(&[(0x1, 4), (0x2, 9)]);
    let b = sample(&[(0x1, 6), (0x3, 1)]);
    let c = sample(&[(0x2, 2), (0x3, 8), (0x4, 1)]);

    let abc = ProcessAggregate::from_samples(1, [&a, &b, &c]);
    let cba = ProcessAggregate::from_samples(1, [&c, &b, &a]);
    let bac = ProcessAggregate::from_samples(1, [&b, &a, &c]);

    assert_eq!(abc, cba);
    assert_eq!(abc, bac);

    // (a + b) + c == a + (b + c)
    let mut left = BTreeMap::new();
    merge_max(&mut left, &a);
    merge_max(&mut left, &b);
    merge_max(&mut left, &c);

    let mut bc = BTreeMap::new();
    merge_max(&mut bc, &b);
    merge_max(&mut bc, &c);
    let bc: FlagCounts = bc.into_iter().collect();
    let mut right = BTreeMap::new();
    merge_max(&mut right, &a);
    merge_max(&mut right, &bc);

    assert_eq!(left, right);
}

#[test]
fn test_unique_configurations_is_union_cardinality() {
    let a = sample(&[(0x1, 1), (0x2, 1)]);
    let b = sample(&[(0x2, 5), (0x7, 1)]);

    let agg = ProcessAggregate::from_samples(1, [&a, &b]);

    assert_eq!(agg.unique_configurations(), 3);
}

#[test]
fn test_global_set_is_union_of_processes() {
    let p1 = ProcessAggregate::from_samples(1, [&sample(&[(0x1, 1), (0x3, 2)])]);
    let p2 = ProcessAggregate::from_samples(2, [&sample(&[(0x3, 1), (0x67, 2)])]);
    let p3 = ProcessAggregate::from_samples(3, [&FlagCounts::new()]);
    let procs = vec![p1, p2, p3];

    let global = GlobalFlagSet::from_processes(&procs);

    assert_eq!(global.iter().collect::<Vec<_>>(), vec![0x1, 0x3, 0x67]);
    for p in &procs {
        assert!(global.len() >= p.unique_configurations());
        assert!(p.counts.keys().all(|&f| global.contains(f)));
    }
}

#[test]
fn test_process_without_records() {
    let agg = ProcessAggregate::from_samples(300, [&parse_sample("no records here\n")]);

    assert_eq!(agg.unique_configurations(), 0);
    assert_eq!(agg.total_events(), 0);
    assert_eq!(agg.sample_files, 1);
}
