#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use maze_pursuit::config::SessionConfig;
use maze_pursuit::constants::DEFAULT_BOARD;
use maze_pursuit::game::Session;
use maze_pursuit::map::builder::Maze;
use maze_pursuit::map::cell::Cell;
use maze_pursuit::pursuit::PursuitAlgorithm;

/// A 3x3 open interior surrounded by walls. Player at (1, 1), pursuer at (1, 3).
pub const OPEN_3X3: [&str; 5] = ["#####", "#0.1#", "#...#", "#...#", "#####"];

/// Two open regions separated by a wall column.
pub const SPLIT: [&str; 4] = ["#######", "#0.#.1#", "#..#..#", "#######"];

pub fn default_maze() -> Maze {
    Maze::parse(&DEFAULT_BOARD).unwrap()
}

pub fn open_maze() -> Maze {
    Maze::parse(&OPEN_3X3).unwrap()
}

/// Session whose intervals make every pursuit tick exactly one `PURSUIT_STEP`.
pub fn session_with(maze: Maze, pursuers: u8, algorithm: PursuitAlgorithm) -> Session {
    let config = SessionConfig::default()
        .with_pursuers(pursuers)
        .with_intervals(MOVE_STEP, PURSUIT_STEP);
    let config = SessionConfig { algorithm, ..config };
    Session::new(maze, config).unwrap()
}

pub const MOVE_STEP: Duration = Duration::from_millis(120);
pub const PURSUIT_STEP: Duration = Duration::from_millis(600);

/// Brute-force breadth-first distances from `start` to every reachable cell.
pub fn bfs_distances(maze: &Maze, start: Cell) -> HashMap<Cell, usize> {
    let graph = maze.graph();
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        let distance = distances[&cell];
        for next in graph.neighbors(cell) {
            if !distances.contains_key(&next) {
                distances.insert(next, distance + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// Checks that `path` is a walk of adjacent traversable cells starting next to `start`.
pub fn is_contiguous(maze: &Maze, start: Cell, path: &[Cell]) -> bool {
    let mut previous = start;
    for &cell in path {
        if !maze.is_traversable(cell) || previous.distance(cell) != 1 {
            return false;
        }
        previous = cell;
    }
    true
}
