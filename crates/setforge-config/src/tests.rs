//! Tests for search configuration.

use super::*;

use std::io::Write;

#[test]
fn test_defaults() {
    let config = SearchConfig::default();
    assert_eq!(config.dominance, DominanceMode::Pareto);
    assert!(config.termination.is_none());
    assert!(config.time_limit().is_none());
    assert!(config.node_count_limit().is_none());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        dominance = "off"

        [termination]
        seconds_spent_limit = 2
        millis_spent_limit = 500
        node_count_limit = 42
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.dominance, DominanceMode::Off);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
    assert_eq!(config.node_count_limit(), Some(42));
}

#[test]
fn test_empty_toml_is_default() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        dominance: cost
        termination:
          millis_spent_limit: 250
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.dominance, DominanceMode::Cost);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
    assert!(config.node_count_limit().is_none());
}

#[test]
fn test_unknown_dominance_rejected() {
    let err = SearchConfig::from_toml_str(r#"dominance = "greedy""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_zero_node_limit_rejected() {
    let err = SearchConfig::from_toml_str("[termination]\nnode_count_limit = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_dominance(DominanceMode::Cost)
        .with_termination_seconds(60)
        .with_node_count_limit(1000);

    assert_eq!(config.dominance, DominanceMode::Cost);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(config.node_count_limit(), Some(1000));
}

#[test]
fn test_dominance_from_str() {
    assert_eq!("pareto".parse::<DominanceMode>().unwrap(), DominanceMode::Pareto);
    assert_eq!(" COST ".parse::<DominanceMode>().unwrap(), DominanceMode::Cost);
    assert_eq!("none".parse::<DominanceMode>().unwrap(), DominanceMode::Off);
    assert!("fast".parse::<DominanceMode>().is_err());
}

#[test]
fn test_dominance_display_round_trips() {
    for mode in [DominanceMode::Pareto, DominanceMode::Cost, DominanceMode::Off] {
        assert_eq!(mode.to_string().parse::<DominanceMode>().unwrap(), mode);
    }
}

#[test]
fn test_load_picks_format_by_extension() {
    let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml_file, "dominance = \"cost\"").unwrap();
    let config = SearchConfig::load(toml_file.path()).unwrap();
    assert_eq!(config.dominance, DominanceMode::Cost);

    let mut yaml_file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(yaml_file, "dominance: \"off\"").unwrap();
    let config = SearchConfig::load(yaml_file.path()).unwrap();
    assert_eq!(config.dominance, DominanceMode::Off);
}

#[test]
fn test_load_missing_file() {
    let err = SearchConfig::load("/nonexistent/setforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(
        SearchConfig::load("/nonexistent/setforge.toml").unwrap_or_default(),
        SearchConfig::default()
    );
}
