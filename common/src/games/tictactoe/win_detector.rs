use super::board::Board;
use super::types::{LineKind, Mark, Position, WinResult, WinningLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub cells: Vec<Position>,
}

impl Line {
    fn new(kind: LineKind, cells: Vec<Position>) -> Self {
        Self { kind, cells }
    }
}

pub fn evaluate(board: &Board) -> WinResult {
    for line in candidate_lines(board.size(), board.win_length()) {
        if let Some(winning_line) = check_consecutive(board, &line) {
            return WinResult::Win(winning_line);
        }
    }

    if board.is_full() {
        WinResult::Draw
    } else {
        WinResult::Ongoing
    }
}

/// Every line that can hold a win, in scan order: rows, columns, the two
/// primary diagonals, then shifted diagonals grouped by offset.
pub fn candidate_lines(size: usize, win_length: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        let cells = (0..size).map(|col| Position::new(row, col)).collect();
        lines.push(Line::new(LineKind::Row(row), cells));
    }

    for col in 0..size {
        let cells = (0..size).map(|row| Position::new(row, col)).collect();
        lines.push(Line::new(LineKind::Column(col), cells));
    }

    lines.extend(diagonal_lines(size, win_length));
    lines
}

pub fn diagonal_lines(size: usize, win_length: usize) -> Vec<Line> {
    let last = size.saturating_sub(1);
    let mut lines = vec![
        Line::new(
            LineKind::MainDiagonal,
            (0..size).map(|i| Position::new(i, i)).collect(),
        ),
        Line::new(
            LineKind::AntiDiagonal,
            (0..size).map(|i| Position::new(i, last - i)).collect(),
        ),
    ];

    // Shifted diagonals must stay at least win_length long.
    for offset in 1..=size.saturating_sub(win_length) {
        let len = size - offset;
        lines.push(Line::new(
            LineKind::MainShiftedRight(offset),
            (0..len).map(|j| Position::new(j, j + offset)).collect(),
        ));
        lines.push(Line::new(
            LineKind::MainShiftedLeft(offset),
            (0..len).map(|j| Position::new(j + offset, j)).collect(),
        ));
        lines.push(Line::new(
            LineKind::AntiShiftedRight(offset),
            (0..len).map(|j| Position::new(j, last - (j + offset))).collect(),
        ));
        lines.push(Line::new(
            LineKind::AntiShiftedLeft(offset),
            (0..len).map(|j| Position::new(j + offset, last - j)).collect(),
        ));
    }

    lines
}

fn check_consecutive(board: &Board, line: &Line) -> Option<WinningLine> {
    let win_length = board.win_length();
    let mut run_mark = Mark::Empty;
    let mut run: Vec<Position> = Vec::with_capacity(win_length);

    for &position in &line.cells {
        let mark = board.mark_at(position);

        if mark.is_empty() {
            run_mark = Mark::Empty;
            run.clear();
            continue;
        }

        if mark != run_mark {
            run_mark = mark;
            run.clear();
        }
        run.push(position);

        if run.len() == win_length {
            let player = run_mark.player()?;
            return Some(WinningLine::new(player, line.kind, run));
        }
    }

    None
}
