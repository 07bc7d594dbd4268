use std::time::Duration;

use figment::Figment;
use maze_pursuit::config::{Difficulty, SessionConfig};
use maze_pursuit::constants::{DEFAULT_MOVE_INTERVAL, DEFAULT_PURSUIT_INTERVAL};
use maze_pursuit::error::ConfigError;
use maze_pursuit::pursuit::PursuitAlgorithm;
use pretty_assertions::assert_eq;

#[test]
fn test_empty_figment_uses_defaults() {
    let config = SessionConfig::from_figment(Figment::new()).unwrap();
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.pursuer_count, 1);
    assert_eq!(config.move_interval, DEFAULT_MOVE_INTERVAL);
    assert_eq!(config.pursuit_interval, DEFAULT_PURSUIT_INTERVAL);
}

#[test]
fn test_difficulty_sets_pursuers() {
    let config = SessionConfig::from_figment(Figment::new().merge(("difficulty", "hard"))).unwrap();
    assert_eq!(config.pursuer_count, 3);

    let config = SessionConfig::from_figment(
        Figment::new()
            .merge(("difficulty", "hard"))
            .merge(("pursuers", 2)),
    )
    .unwrap();
    assert_eq!(config.pursuer_count, 2);
}

#[test]
fn test_algorithm_aliases() {
    for (name, expected) in [
        ("shortest_path", PursuitAlgorithm::ShortestPath),
        ("dijkstra", PursuitAlgorithm::ShortestPath),
        ("spanning_tree", PursuitAlgorithm::SpanningTree),
        ("kruskal", PursuitAlgorithm::SpanningTree),
    ] {
        let config = SessionConfig::from_figment(Figment::new().merge(("algorithm", name))).unwrap();
        assert_eq!(config.algorithm, expected, "algorithm name {name}");
    }
}

#[test]
fn test_intervals_in_milliseconds() {
    let config = SessionConfig::from_figment(
        Figment::new()
            .merge(("move_interval_ms", 80))
            .merge(("pursuit_interval_ms", 400)),
    )
    .unwrap();
    assert_eq!(config.move_interval, Duration::from_millis(80));
    assert_eq!(config.pursuit_interval, Duration::from_millis(400));
}

#[test]
fn test_out_of_range_values() {
    let result = SessionConfig::from_figment(Figment::new().merge(("pursuers", 5)));
    assert!(matches!(
        result,
        Err(ConfigError::PursuerCount {
            count: 5,
            min: 1,
            max: 3
        })
    ));

    let result = SessionConfig::from_figment(Figment::new().merge(("move_interval_ms", 0)));
    assert!(matches!(result, Err(ConfigError::Interval { name: "move", .. })));
}

#[test]
fn test_unknown_values_fail_to_load() {
    let result = SessionConfig::from_figment(Figment::new().merge(("algorithm", "astar")));
    assert!(matches!(result, Err(ConfigError::Load(_))));

    let result = SessionConfig::from_figment(Figment::new().merge(("difficulty", "nightmare")));
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn test_difficulty_names() {
    assert_eq!(Difficulty::Hard.to_string(), "hard");
    assert_eq!("medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
}
