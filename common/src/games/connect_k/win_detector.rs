use super::board::Board;
use super::types::{Mark, Player, Position, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

/// Scan order. The first family that contains a run decides the reported line.
const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagonalDownRight,
    Direction::DiagonalDownLeft,
];

pub fn check_win(board: &Board, player: Player, win_length: usize) -> bool {
    find_winning_line(board, player, win_length).is_some()
}

/// First run of exactly `win_length` cells owned by `player`.
///
/// Each direction family is scanned fully before the next, anchors in
/// row-major order. Down-left runs are anchored at their top-right cell.
pub fn find_winning_line(board: &Board, player: Player, win_length: usize) -> Option<WinningLine> {
    if win_length == 0 || win_length > board.size() {
        return None;
    }

    let mark = Mark::from(player);
    for direction in DIRECTIONS {
        for row in 0..board.size() {
            for col in 0..board.size() {
                if check_run(board, row, col, direction, mark, win_length) {
                    let start = Position::new(row, col);
                    let end = run_end(row, col, direction, win_length);
                    return Some(WinningLine::new(player, start, end));
                }
            }
        }
    }

    None
}

fn check_run(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    mark: Mark,
    win_count: usize,
) -> bool {
    if !run_fits(board.size(), row, col, direction, win_count) {
        return false;
    }

    for i in 0..win_count {
        let (r, c) = cell_in_run(row, col, direction, i);
        if board.get(r, c) != Some(mark) {
            return false;
        }
    }
    true
}

fn run_fits(size: usize, row: usize, col: usize, direction: Direction, win_count: usize) -> bool {
    match direction {
        Direction::Horizontal => col + win_count <= size,
        Direction::Vertical => row + win_count <= size,
        Direction::DiagonalDownRight => row + win_count <= size && col + win_count <= size,
        Direction::DiagonalDownLeft => row + win_count <= size && col + 1 >= win_count,
    }
}

fn cell_in_run(row: usize, col: usize, direction: Direction, i: usize) -> (usize, usize) {
    match direction {
        Direction::Horizontal => (row, col + i),
        Direction::Vertical => (row + i, col),
        Direction::DiagonalDownRight => (row + i, col + i),
        Direction::DiagonalDownLeft => (row + i, col - i),
    }
}

fn run_end(row: usize, col: usize, direction: Direction, win_count: usize) -> Position {
    let (r, c) = cell_in_run(row, col, direction, win_count - 1);
    Position::new(r, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, cells: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, mark) in cells {
            board.set(row, col, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_line() {
        let board = Board::new(12);
        assert!(!check_win(&board, Player::X, 5));
        assert!(!check_win(&board, Player::O, 5));
    }

    #[test]
    fn test_horizontal_line() {
        let cells: Vec<_> = (3..8).map(|c| (6, c, Mark::X)).collect();
        let board = board_with(12, &cells);

        let line = find_winning_line(&board, Player::X, 5).unwrap();
        assert_eq!(line.start, Position::new(6, 3));
        assert_eq!(line.end, Position::new(6, 7));
        assert!(!check_win(&board, Player::O, 5));
    }

    #[test]
    fn test_vertical_line_at_bottom_edge() {
        let cells: Vec<_> = (7..12).map(|r| (r, 11, Mark::O)).collect();
        let board = board_with(12, &cells);

        let line = find_winning_line(&board, Player::O, 5).unwrap();
        assert_eq!(line.start, Position::new(7, 11));
        assert_eq!(line.end, Position::new(11, 11));
    }

    #[test]
    fn test_diagonal_down_right_line() {
        let cells: Vec<_> = (0..5).map(|i| (i + 2, i + 1, Mark::X)).collect();
        let board = board_with(12, &cells);

        let line = find_winning_line(&board, Player::X, 5).unwrap();
        assert_eq!(line.start, Position::new(2, 1));
        assert_eq!(line.end, Position::new(6, 5));
    }

    #[test]
    fn test_diagonal_down_left_line_anchored_top_right() {
        let cells: Vec<_> = (0..5).map(|i| (i, 4 - i, Mark::O)).collect();
        let board = board_with(12, &cells);

        let line = find_winning_line(&board, Player::O, 5).unwrap();
        assert_eq!(line.start, Position::new(0, 4));
        assert_eq!(line.end, Position::new(4, 0));
    }

    #[test]
    fn test_four_in_a_row_is_not_a_win() {
        let cells: Vec<_> = (0..4).map(|c| (0, c, Mark::X)).collect();
        let board = board_with(12, &cells);
        assert!(!check_win(&board, Player::X, 5));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let board = board_with(
            12,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::X),
                (0, 2, Mark::O),
                (0, 3, Mark::X),
                (0, 4, Mark::X),
                (0, 5, Mark::X),
            ],
        );
        assert!(!check_win(&board, Player::X, 5));
    }

    #[test]
    fn test_horizontal_reported_before_vertical() {
        let mut cells: Vec<_> = (0..5).map(|r| (r, 0, Mark::X)).collect();
        cells.extend((1..6).map(|c| (9, c, Mark::X)));
        let board = board_with(12, &cells);

        let line = find_winning_line(&board, Player::X, 5).unwrap();
        assert_eq!(line.start, Position::new(9, 1));
        assert_eq!(line.end, Position::new(9, 5));
    }

    #[test]
    fn test_longer_run_reports_first_window() {
        let cells: Vec<_> = (2..9).map(|c| (4, c, Mark::O)).collect();
        let board = board_with(12, &cells);

        let line = find_winning_line(&board, Player::O, 5).unwrap();
        assert_eq!(line.start, Position::new(4, 2));
        assert_eq!(line.end, Position::new(4, 6));
    }

    #[test]
    fn test_win_length_larger_than_board() {
        let cells: Vec<_> = (0..4).map(|c| (0, c, Mark::X)).collect();
        let board = board_with(4, &cells);
        assert!(!check_win(&board, Player::X, 5));
        assert!(check_win(&board, Player::X, 4));
    }
}
