use maze_pursuit::map::builder::Maze;
use maze_pursuit::map::cell::Cell;
use maze_pursuit::pursuit::{Planner, ShortestPathPlanner};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{bfs_distances, default_maze, is_contiguous, open_maze, SPLIT};

fn assert_shortest_everywhere(maze: &Maze) {
    let graph = maze.graph();
    let planner = ShortestPathPlanner;

    for start in graph.nodes() {
        let distances = bfs_distances(maze, start);
        for goal in graph.nodes() {
            let path = planner.plan(&graph, start, goal);
            if start == goal {
                assert_that(&path).is_empty();
                continue;
            }

            assert_eq!(path.len(), distances[&goal], "length of {start} -> {goal}");
            assert_eq!(path.last(), Some(&goal));
            assert!(is_contiguous(maze, start, &path), "{start} -> {goal} is not a walk: {path:?}");
        }
    }
}

#[test]
fn test_shortest_path_lengths_default_board() {
    assert_shortest_everywhere(&default_maze());
}

#[test]
fn test_shortest_path_lengths_open_room() {
    assert_shortest_everywhere(&open_maze());
}

#[test]
fn test_shortest_path_tie_break() {
    let maze = open_maze();
    let graph = maze.graph();
    let planner = ShortestPathPlanner;

    // Several equal-length routes exist; discovery order favours going down first.
    assert_eq!(
        planner.plan(&graph, Cell::new(1, 1), Cell::new(3, 3)),
        vec![Cell::new(2, 1), Cell::new(3, 1), Cell::new(3, 2), Cell::new(3, 3)]
    );
    assert_eq!(
        planner.plan(&graph, Cell::new(3, 3), Cell::new(1, 1)),
        vec![Cell::new(2, 3), Cell::new(1, 3), Cell::new(1, 2), Cell::new(1, 1)]
    );
}

#[test]
fn test_shortest_path_is_deterministic() {
    let maze = default_maze();
    let graph = maze.graph();
    let planner = ShortestPathPlanner;

    let first = planner.plan(&graph, Cell::new(7, 13), Cell::new(1, 1));
    for _ in 0..10 {
        assert_eq!(planner.plan(&graph, Cell::new(7, 13), Cell::new(1, 1)), first);
    }
    assert_eq!(first.len(), 18);
    assert_eq!(first.first(), Some(&Cell::new(7, 12)));
}

#[test]
fn test_shortest_path_unreachable() {
    let maze = Maze::parse(&SPLIT).unwrap();
    let graph = maze.graph();
    let planner = ShortestPathPlanner;

    assert_that(&planner.plan(&graph, Cell::new(1, 1), Cell::new(1, 5))).is_empty();
    assert_that(&planner.plan(&graph, Cell::new(2, 5), Cell::new(2, 1))).is_empty();
    assert_eq!(
        planner.plan(&graph, Cell::new(1, 1), Cell::new(2, 2)).len(),
        2
    );
}

#[test]
fn test_shortest_path_rejects_walls() {
    let maze = open_maze();
    let graph = maze.graph();
    let planner = ShortestPathPlanner;

    assert_that(&planner.plan(&graph, Cell::new(0, 0), Cell::new(1, 1))).is_empty();
    assert_that(&planner.plan(&graph, Cell::new(1, 1), Cell::new(0, 2))).is_empty();
}

#[test]
fn test_shortest_path_follows_wall_edits() {
    let mut maze = open_maze();
    maze.set_wall(Cell::new(1, 2), true).unwrap();
    maze.set_wall(Cell::new(2, 2), true).unwrap();

    let graph = maze.graph();
    let path = ShortestPathPlanner.plan(&graph, Cell::new(1, 1), Cell::new(1, 3));
    assert_eq!(path.len(), 6);
    assert!(!path.contains(&Cell::new(1, 2)));
    assert!(!path.contains(&Cell::new(2, 2)));
}
