//! Tests for board placement and terminal-state detection.

use tictactoe_arena::{Board, Cell, Mark};

/// Builds a board from base-3 digits (0 empty, 1 First, 2 Second),
/// row-major. Every configuration is constructible because `place`
/// only refuses occupied cells, not turn-order violations.
fn board_from_digits(digits: &[u8; 9]) -> Board {
    let mut board = Board::new();
    for (idx, digit) in digits.iter().enumerate() {
        let mark = match digit {
            0 => continue,
            1 => Mark::First,
            2 => Mark::Second,
            _ => unreachable!(),
        };
        assert!(board.place(idx / 3, idx % 3, mark));
    }
    board
}

/// Independent scan over the same line geometry, written against the
/// read-only cell accessor rather than the index table.
fn reference_winner(board: &Board) -> Option<Mark> {
    let at = |row: usize, col: usize| match board.get(row, col) {
        Some(Cell::Occupied(mark)) => Some(mark),
        _ => None,
    };

    for row in 0..3 {
        if let Some(mark) = at(row, 0)
            && at(row, 1) == Some(mark)
            && at(row, 2) == Some(mark)
        {
            return Some(mark);
        }
    }
    for col in 0..3 {
        if let Some(mark) = at(0, col)
            && at(1, col) == Some(mark)
            && at(2, col) == Some(mark)
        {
            return Some(mark);
        }
    }
    if let Some(mark) = at(0, 0)
        && at(1, 1) == Some(mark)
        && at(2, 2) == Some(mark)
    {
        return Some(mark);
    }
    if let Some(mark) = at(0, 2)
        && at(1, 1) == Some(mark)
        && at(2, 0) == Some(mark)
    {
        return Some(mark);
    }
    None
}

#[test]
fn test_winning_mark_matches_reference_for_every_configuration() {
    // All 3^9 = 19683 boards, legal and illegal alike.
    for code in 0..19683u32 {
        let mut digits = [0u8; 9];
        let mut rest = code;
        for digit in digits.iter_mut() {
            *digit = (rest % 3) as u8;
            rest /= 3;
        }

        let board = board_from_digits(&digits);
        assert_eq!(
            board.winning_mark(),
            reference_winner(&board),
            "disagreement on board {:?}",
            digits
        );
    }
}

#[test]
fn test_is_full_matches_digit_count() {
    for code in 0..19683u32 {
        let mut digits = [0u8; 9];
        let mut rest = code;
        for digit in digits.iter_mut() {
            *digit = (rest % 3) as u8;
            rest /= 3;
        }

        let board = board_from_digits(&digits);
        let expect_full = digits.iter().all(|d| *d != 0);
        assert_eq!(board.is_full(), expect_full);
    }
}

#[test]
fn test_occupied_cells_are_never_overwritten() {
    let mut board = Board::new();
    assert!(board.place(0, 0, Mark::First));

    for _ in 0..3 {
        assert!(!board.place(0, 0, Mark::Second));
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Mark::First)));
    }
}

#[test]
fn test_out_of_range_never_mutates() {
    let mut board = Board::new();
    for (row, col) in [(3, 0), (0, 3), (7, 7), (usize::MAX, 0)] {
        assert!(!board.place(row, col, Mark::First));
    }
    assert!(board.cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_display_shows_marks_in_place() {
    let mut board = Board::new();
    board.place(0, 0, Mark::First);
    board.place(1, 1, Mark::Second);

    let rendered = board.display();
    assert!(rendered.starts_with("X| | "));
    assert!(rendered.contains(" |O| "));
}
