//! Row-by-row backtracking for N-Queens, stopping at the first solution.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{Recorder, Step, StepKind};

/// Why a square was rejected: the earliest queen it conflicts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conflict {
    Column { row: usize },
    Diagonal { row: usize },
}

impl Conflict {
    pub fn row(self) -> usize {
        match self {
            Self::Column { row } | Self::Diagonal { row } => row,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueensEvent {
    Start { size: usize },
    Placed { row: usize, col: usize },
    Rejected { row: usize, col: usize, conflict: Conflict },
    Backtrack { row: usize, col: usize },
    SolutionFound,
}

impl StepKind for QueensEvent {
    fn tag(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Placed { .. } => "placed",
            Self::Rejected { .. } => "rejected",
            Self::Backtrack { .. } => "backtrack",
            Self::SolutionFound => "solution-found",
        }
    }
}

/// Row to column of the queen in that row, `None` while unplaced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensState {
    pub board: Vec<Option<usize>>,
}

impl QueensState {
    pub fn size(&self) -> usize {
        self.board.len()
    }

    pub fn queens(&self) -> usize {
        self.board.iter().flatten().count()
    }

    /// Whether every row holds a queen and none attack each other.
    pub fn is_solution(&self) -> bool {
        let n = self.board.len();
        (0..n).all(|row| match self.board[row] {
            Some(col) => col < n && conflict(&self.board[..row], row, col).is_none(),
            None => false,
        })
    }
}

pub type QueensStep = Step<QueensEvent, QueensState>;

/// First earlier queen attacking `(row, col)`, if any.
fn conflict(placed: &[Option<usize>], row: usize, col: usize) -> Option<Conflict> {
    placed.iter().enumerate().find_map(|(i, c)| {
        let c = (*c)?;
        if c == col {
            Some(Conflict::Column { row: i })
        } else if c.abs_diff(col) == row - i {
            Some(Conflict::Diagonal { row: i })
        } else {
            None
        }
    })
}

struct Solver {
    board: Vec<Option<usize>>,
    rec: Recorder<QueensStep>,
}

impl Solver {
    fn record(&mut self, event: QueensEvent, message: String) {
        let state = QueensState {
            board: self.board.clone(),
        };
        self.rec.record(event, state, message);
    }

    fn solve(&mut self, row: usize) -> bool {
        let n = self.board.len();
        if row == n {
            self.record(
                QueensEvent::SolutionFound,
                format!("Solution found! All {n} queens are placed without conflicts."),
            );
            return true;
        }

        for col in 0..n {
            if let Some(conflict) = conflict(&self.board[..row], row, col) {
                let what = match conflict {
                    Conflict::Column { .. } => "column",
                    Conflict::Diagonal { .. } => "diagonal",
                };
                let other = conflict.row();
                self.record(
                    QueensEvent::Rejected { row, col, conflict },
                    format!(
                        "Cannot place queen at row {}, column {}. It shares a {what} with the queen in row {}.",
                        row + 1,
                        col + 1,
                        other + 1
                    ),
                );
                continue;
            }

            self.board[row] = Some(col);
            self.record(
                QueensEvent::Placed { row, col },
                format!(
                    "Placed queen at row {}, column {}. No earlier queen attacks this square.",
                    row + 1,
                    col + 1
                ),
            );

            if self.solve(row + 1) {
                return true;
            }

            self.board[row] = None;
            self.record(
                QueensEvent::Backtrack { row, col },
                format!(
                    "Backtracking from row {}, column {}. No safe square remains in the rows below.",
                    row + 1,
                    col + 1
                ),
            );
        }
        false
    }
}

/// Traces the backtracking search on an `n`×`n` board.
///
/// Columns are tried left to right and the search stops at the first solution, whose board is
/// the state of the final `solution-found` step.
pub fn trace(n: usize) -> Vec<QueensStep> {
    let mut solver = Solver {
        board: vec![None; n],
        rec: Recorder::new(),
    };
    solver.record(
        QueensEvent::Start { size: n },
        format!("Starting to solve {n}-Queens with backtracking"),
    );
    let solved = solver.solve(0);
    adebug!(n, solved, steps = solver.rec.len(), "n_queens::trace");
    if !solved {
        awarn!(n, "n_queens: search finished without a solution");
    }
    solver.rec.into_steps()
}
