//! Tests for the command line front end.

use std::io::Write as _;

use clap::Parser;
use tempfile::NamedTempFile;

use super::*;

const EXAMPLE: &str = "\
10 4
dp graphs arrays
1 5 3 dp 120
2 6 5 graphs 200
3 4 1 arrays 50
4 8 4 dp 300
";

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_args(args: &[&str]) -> (u8, String, String) {
    let cli = Cli::try_parse_from(std::iter::once("setforge").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(&cli, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_prints_selection() {
    let input = temp_file(".txt", EXAMPLE);
    let (code, out, err) = run_args(&[input.path().to_str().unwrap()]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(out, "3 4\n");
    assert!(err.is_empty());
}

#[test]
fn test_zero_target_prints_empty_line() {
    let input = temp_file(".txt", "0 1\ndp\n1 3 2 dp 10\n");
    let (code, out, _) = run_args(&[input.path().to_str().unwrap()]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(out, "\n");
}

#[test]
fn test_infeasible_prints_minus_one() {
    let input = temp_file(".txt", "100 1\ndp\n1 3 2 dp 10\n");
    let (code, out, _) = run_args(&[input.path().to_str().unwrap()]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(out, "-1\n");
}

#[test]
fn test_node_limit_exhausts_budget() {
    let input = temp_file(".txt", EXAMPLE);
    let (code, out, err) = run_args(&["--node-limit", "1", input.path().to_str().unwrap()]);
    assert_eq!(code, EXIT_BUDGET_EXHAUSTED);
    assert!(out.is_empty());
    assert!(err.contains("budget exhausted"));
}

#[test]
fn test_zero_node_limit_rejected_by_parser() {
    assert!(Cli::try_parse_from(["setforge", "--node-limit", "0"]).is_err());
}

#[test]
fn test_parse_error_exits_one() {
    let input = temp_file(".txt", "10 2\ndp\n1 5 3 dp 120\n");
    let (code, out, err) = run_args(&[input.path().to_str().unwrap()]);
    assert_eq!(code, EXIT_ERROR);
    assert!(out.is_empty());
    assert!(err.contains("expected 2 problems, found 1"));
}

#[test]
fn test_missing_input_exits_one() {
    let (code, _, err) = run_args(&["/nonexistent/instance.txt"]);
    assert_eq!(code, EXIT_ERROR);
    assert!(err.contains("cannot open"));
}

#[test]
fn test_stats_written_to_stderr() {
    let input = temp_file(".txt", EXAMPLE);
    let (code, out, err) = run_args(&["--stats", input.path().to_str().unwrap()]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(out, "3 4\n");
    assert!(err.contains("cost: 5difficulty/2count/-4rank/350length"));
    assert!(err.contains("nodes expanded:"));
    assert!(err.contains("nodes/s)"));
    assert!(err.contains("memo size:"));
}

#[test]
fn test_config_file_and_overrides() {
    let config = temp_file(".toml", "dominance = \"cost\"\n\n[termination]\nnode_count_limit = 5\n");
    let path = config.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["setforge", "--config", path]).unwrap();
    let resolved = cli.search_config().unwrap();
    assert_eq!(resolved.dominance, DominanceMode::Cost);
    assert_eq!(resolved.node_count_limit(), Some(5));

    let cli = Cli::try_parse_from([
        "setforge",
        "--config",
        path,
        "--dominance",
        "off",
        "--node-limit",
        "9",
    ])
    .unwrap();
    let resolved = cli.search_config().unwrap();
    assert_eq!(resolved.dominance, DominanceMode::Off);
    assert_eq!(resolved.node_count_limit(), Some(9));
}

#[test]
fn test_yaml_config() {
    let config = temp_file(".yaml", "dominance: \"off\"\n");
    let cli = Cli::try_parse_from(["setforge", "-c", config.path().to_str().unwrap()]).unwrap();
    assert_eq!(cli.search_config().unwrap().dominance, DominanceMode::Off);
}

#[test]
fn test_bad_config_exits_one() {
    let config = temp_file(".toml", "dominance = \"greedy\"\n");
    let input = temp_file(".txt", EXAMPLE);
    let (code, out, err) = run_args(&[
        "--config",
        config.path().to_str().unwrap(),
        input.path().to_str().unwrap(),
    ]);
    assert_eq!(code, EXIT_ERROR);
    assert!(out.is_empty());
    assert!(err.contains("config"));
}

#[test]
fn test_unknown_dominance_flag_rejected() {
    assert!(Cli::try_parse_from(["setforge", "--dominance", "greedy"]).is_err());
}

#[test]
fn test_dash_means_stdin() {
    let cli = Cli::try_parse_from(["setforge", "-"]).unwrap();
    assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("-")));
}

#[test]
fn test_verbosity_raises_default_directive() {
    assert_eq!(logging::default_directive(0), "setforge_solver=warn");
    assert_eq!(logging::default_directive(1), "setforge_solver=info");
    assert_eq!(logging::default_directive(2), "setforge_solver=debug");
    assert_eq!(logging::default_directive(3), "setforge_solver=trace");
    assert_eq!(logging::default_directive(9), "setforge_solver=trace");
}

#[test]
fn test_verbose_flag_counts() {
    let cli = Cli::try_parse_from(["setforge", "-vv", "-"]).unwrap();
    assert_eq!(cli.verbose, 2);
}
