use pte_stats_analyzer::discovery::SampleFile;
use pte_stats_analyzer::parser::{parse_sample, parse_sample_file, read_sample_or_empty};
use pretty_assertions::assert_eq;
use std::fs;

const SAMPLE: &str = "\
PTE stats for pid 100
Flags: 0x8000000000000067 Count: 120
garbage text

Flags: 0x25 Count: 3
    Flags: 0xABC   Count: 9
";

#[test]
fn test_parse_sample_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pte_stats_pid100_1.txt");
    fs::write(&path, SAMPLE).unwrap();

    let counts = parse_sample_file(&path).unwrap();

    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&0x8000000000000067], 120);
    assert_eq!(counts[&0x25], 3);
    assert_eq!(counts[&0xabc], 9);
}

#[test]
fn test_parsing_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pte_stats_pid1_1.txt");
    fs::write(&path, SAMPLE).unwrap();

    assert_eq!(
        parse_sample_file(&path).unwrap(),
        parse_sample_file(&path).unwrap()
    );
}

#[test]
fn test_garbage_lines_do_not_affect_valid_lines() {
    let clean = parse_sample("Flags: 0x1 Count: 1\nFlags: 0x2 Count: 2\n");
    let noisy = parse_sample("garbage text\nFlags: 0x1 Count: 1\ngarbage text\nFlags: 0x2 Count: 2\n");

    assert_eq!(clean, noisy);
}

#[test]
fn test_empty_file() {
    assert!(parse_sample("").is_empty());
    assert!(parse_sample("\n\n   \n").is_empty());
}

#[test]
fn test_unreadable_file_becomes_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pte_stats_pid9_1.txt");
    fs::write(&path, b"\xff\xfe\x00").unwrap();

    let sample = SampleFile {
        pid: 9,
        sample_index: 1,
        path: path.clone(),
    };
    let (counts, err) = read_sample_or_empty(&sample);

    assert!(counts.is_empty());
    let err = err.expect("invalid UTF-8 should be reported");
    assert_eq!(err.path, path);
    assert!(err.to_string().contains("pte_stats_pid9_1.txt"));
}
