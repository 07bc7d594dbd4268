//! This module contains all the constants used in the game.

use std::time::Duration;

/// Target frame time for the demo loop (30 frames per second).
pub const FRAME_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 30.0) as u64);

/// Default interval between player move attempts.
pub const DEFAULT_MOVE_INTERVAL: Duration = Duration::from_millis(120);
/// Default interval between pursuit rounds. Slower than the player on purpose.
pub const DEFAULT_PURSUIT_INTERVAL: Duration = Duration::from_millis(600);

/// Shortest accepted movement or pursuit interval.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);
/// Longest accepted movement or pursuit interval.
pub const MAX_INTERVAL: Duration = Duration::from_secs(10);

/// Fewest pursuers a session may have.
pub const MIN_PURSUERS: u8 = 1;
/// Most pursuers a session may have.
pub const MAX_PURSUERS: u8 = 3;

/// Board character for a wall.
pub const WALL_CHAR: char = '#';
/// Board character for a cell holding a point.
pub const POINT_CHAR: char = '.';
/// Board character for a cell whose point is already gone.
pub const COLLECTED_CHAR: char = ' ';
/// Board character for the player's starting cell.
pub const PLAYER_START_CHAR: char = '0';

/// The default board. `1`-`3` mark pursuer starts in the order they are added by difficulty.
pub const DEFAULT_BOARD: [&str; 9] = [
    "###############",
    "#0...#...#...2#",
    "#.##.#.#.#.##.#",
    "#..#...#...#..#",
    "##.###.#.###.##",
    "#......#......#",
    "#.####.#.####.#",
    "#3...........1#",
    "###############",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time() {
        // 30 FPS = 33.33ms per frame
        let expected_nanos = (1_000_000_000.0 / 30.0) as u64;
        assert_eq!(FRAME_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_pursuers_slower_than_player() {
        assert!(DEFAULT_PURSUIT_INTERVAL > DEFAULT_MOVE_INTERVAL);
    }

    #[test]
    fn test_default_intervals_within_bounds() {
        for interval in [DEFAULT_MOVE_INTERVAL, DEFAULT_PURSUIT_INTERVAL] {
            assert!(interval >= MIN_INTERVAL);
            assert!(interval <= MAX_INTERVAL);
        }
    }

    #[test]
    fn test_default_board_dimensions() {
        let width = DEFAULT_BOARD[0].len();
        assert_eq!(width, 15);
        for row in DEFAULT_BOARD.iter() {
            assert_eq!(row.len(), width);
        }
    }

    #[test]
    fn test_default_board_boundaries() {
        assert!(DEFAULT_BOARD[0].chars().all(|c| c == WALL_CHAR));
        assert!(DEFAULT_BOARD[DEFAULT_BOARD.len() - 1].chars().all(|c| c == WALL_CHAR));
        for row in DEFAULT_BOARD.iter() {
            assert!(row.starts_with(WALL_CHAR));
            assert!(row.ends_with(WALL_CHAR));
        }
    }

    #[test]
    fn test_default_board_starting_positions() {
        let markers: String = DEFAULT_BOARD
            .iter()
            .flat_map(|row| row.chars())
            .filter(|c| c.is_ascii_digit())
            .collect();
        assert_eq!(markers.len(), 1 + MAX_PURSUERS as usize);
        for marker in ['0', '1', '2', '3'] {
            assert!(markers.contains(marker));
        }
    }
}
