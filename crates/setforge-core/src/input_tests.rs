//! Tests for the instance reader.

use crate::domain::{Item, ItemId};
use crate::error::SetForgeError;
use crate::input::{parse_instance, Instance};

const EXAMPLE: &str = "\
10 4
dp graphs arrays
1 5 3 dp 120
2 6 5 graphs 200
3 4 1 arrays 50
4 8 4 dp 300
";

fn parse_error_line(text: &str) -> usize {
    match parse_instance(text) {
        Err(SetForgeError::Parse { line, .. }) => line,
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_example() {
    let instance = parse_instance(EXAMPLE).unwrap();
    assert_eq!(instance.target, 10);
    assert_eq!(instance.problems.len(), 4);
    assert_eq!(instance.problems.preferences().len(), 3);

    let third = instance.problems.find(3).unwrap();
    assert_eq!(third.points(), 4);
    assert_eq!(third.difficulty(), 1);
    assert_eq!(third.topic(), "arrays");
    assert_eq!(third.length(), 50);
    assert_eq!(third.rank(), 1);
}

#[test]
fn test_from_str_and_reader() {
    let a: Instance = EXAMPLE.parse().unwrap();
    let b = Instance::read_from(EXAMPLE.as_bytes()).unwrap();
    assert_eq!(a.target, b.target);
    assert_eq!(a.problems.items(), b.problems.items());
}

#[test]
fn test_items_sorted_regardless_of_line_order() {
    let text = "5 3\nx\n3 1 1 x 1\n1 1 1 x 1\n2 1 1 x 1\n";
    let instance = parse_instance(text).unwrap();
    let ids: Vec<ItemId> = instance.problems.items().iter().map(Item::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_large_points() {
    let text = "100000000000000000000 2\ndp\n1 99999999999999999999 1 dp 1\n2 1000000000000000 2 dp 1\n";
    let instance = parse_instance(text).unwrap();
    assert_eq!(instance.target, 100_000_000_000_000_000_000);
    assert_eq!(
        instance.problems.total_points(),
        99_999_999_999_999_999_999 + 1_000_000_000_000_000
    );
}

#[test]
fn test_zero_target() {
    let instance = parse_instance("0 1\ndp\n1 3 2 dp 10\n").unwrap();
    assert_eq!(instance.target, 0);
}

#[test]
fn test_unlisted_topic_accepted() {
    let instance = parse_instance("3 1\ndp\n1 3 2 geometry 10\n").unwrap();
    assert_eq!(instance.problems.items()[0].rank(), 0);
}

#[test]
fn test_blank_lines_between_problems_skipped() {
    let instance = parse_instance("3 2\ndp\n\n1 3 2 dp 10\n\n2 1 1 dp 5\n\n").unwrap();
    assert_eq!(instance.problems.len(), 2);
}

#[test]
fn test_crlf_line_endings() {
    let instance = parse_instance("3 1\r\ndp graphs\r\n1 3 2 dp 10\r\n").unwrap();
    assert_eq!(instance.problems.preferences().rank_of("graphs"), 1);
}

#[test]
fn test_missing_header() {
    assert_eq!(parse_error_line(""), 1);
}

#[test]
fn test_bad_header_field_count() {
    assert_eq!(parse_error_line("10\ndp\n"), 1);
    assert_eq!(parse_error_line("10 1 7\ndp\n"), 1);
}

#[test]
fn test_non_numeric_header() {
    assert_eq!(parse_error_line("ten 1\ndp\n1 1 1 dp 1\n"), 1);
    assert_eq!(parse_error_line("-5 1\ndp\n1 1 1 dp 1\n"), 1);
}

#[test]
fn test_missing_or_empty_topics() {
    assert_eq!(parse_error_line("10 1"), 2);
    assert_eq!(parse_error_line("10 1\n\n1 1 1 dp 1\n"), 2);
}

#[test]
fn test_duplicate_topic() {
    let err = parse_instance("1 1\ndp dp\n1 1 1 dp 1\n").unwrap_err();
    assert!(matches!(err, SetForgeError::DuplicateTopic(_)));
}

#[test]
fn test_wrong_field_count() {
    assert_eq!(parse_error_line("1 1\ndp\n1 1 1 dp\n"), 3);
    assert_eq!(parse_error_line("1 1\ndp\n1 1 1 dp 1 extra\n"), 3);
}

#[test]
fn test_non_numeric_field() {
    let err = parse_instance("1 2\ndp\n1 1 1 dp 1\n2 x 1 dp 1\n").unwrap_err();
    match err {
        SetForgeError::Parse { line, message } => {
            assert_eq!(line, 4);
            assert!(message.contains("points"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_negative_difficulty_rejected() {
    assert_eq!(parse_error_line("1 1\ndp\n1 1 -3 dp 1\n"), 3);
}

#[test]
fn test_too_few_problems() {
    let err = parse_instance("1 3\ndp\n1 1 1 dp 1\n").unwrap_err();
    assert!(err.to_string().contains("expected 3 problems, found 1"));
}

#[test]
fn test_too_many_problems() {
    assert_eq!(parse_error_line("1 1\ndp\n1 1 1 dp 1\n2 1 1 dp 1\n"), 4);
}

#[test]
fn test_duplicate_id() {
    let err = parse_instance("1 2\ndp\n7 1 1 dp 1\n7 2 2 dp 2\n").unwrap_err();
    assert!(matches!(err, SetForgeError::DuplicateItem(7)));
}

#[test]
fn test_huge_problem_count_is_parse_error() {
    let err = parse_instance("10 18446744073709551615\ndp\n1 5 3 dp 120\n").unwrap_err();
    match err {
        SetForgeError::Parse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("found 1"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_large_problem_count_is_parse_error() {
    assert_eq!(parse_error_line("10 100000000000\ndp\n1 5 3 dp 120\n"), 3);
}
