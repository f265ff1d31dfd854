//! Tests for termination conditions.

use std::time::Duration;

use super::*;

fn stats_with_nodes(nodes: u64) -> SearchStats {
    let mut stats = SearchStats::default();
    stats.start();
    for _ in 0..nodes {
        stats.record_expansion();
    }
    stats
}

#[test]
fn test_no_termination() {
    assert!(!NoTermination.is_terminated(&stats_with_nodes(1_000)));
}

#[test]
fn test_node_count_termination() {
    let term = NodeCountTermination::new(3);
    assert!(!term.is_terminated(&stats_with_nodes(0)));
    assert!(!term.is_terminated(&stats_with_nodes(2)));
    assert!(term.is_terminated(&stats_with_nodes(3)));
    assert!(term.is_terminated(&stats_with_nodes(4)));
}

#[test]
fn test_time_termination() {
    let stats = stats_with_nodes(0);
    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&stats));
    assert!(!TimeTermination::seconds(3_600).is_terminated(&stats));
}

#[test]
fn test_option_termination() {
    let stats = stats_with_nodes(5);
    assert!(!None::<NodeCountTermination>.is_terminated(&stats));
    assert!(Some(NodeCountTermination::new(5)).is_terminated(&stats));
}

#[test]
fn test_or_termination() {
    let term = OrTermination::new((
        TimeTermination::seconds(3_600),
        NodeCountTermination::new(2),
    ));
    assert!(!term.is_terminated(&stats_with_nodes(1)));
    assert!(term.is_terminated(&stats_with_nodes(2)));

    let single = OrTermination::new((NoTermination,));
    assert!(!single.is_terminated(&stats_with_nodes(10)));
}

#[test]
fn test_configured_termination_defaults_to_unbounded() {
    let term = ConfiguredTermination::from_config(&SearchConfig::default());
    assert!(!term.is_terminated(&stats_with_nodes(100_000)));
}

#[test]
fn test_configured_termination_time_limit() {
    let config = SearchConfig::from_toml_str("[termination]\nmillis_spent_limit = 1\n").unwrap();
    let term = ConfiguredTermination::from_config(&config);

    let stats = stats_with_nodes(0);
    std::thread::sleep(Duration::from_millis(5));
    assert!(term.is_terminated(&stats));
}
