use crate::grid::Grid;
use crate::util::Cursor;
use color_eyre::Result;
use log::debug;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// A solved test case.
#[derive(Debug, Clone)]
pub struct Answer {
    /// 1-based
    pub case: usize,
    pub clicks: Vec<Cursor>,
    /// The board after every click, fully uncovered.
    pub board: Grid,
}

impl Display for Answer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Case #{}: {}", self.case, self.clicks.len())
    }
}

pub fn solve_all(grids: Vec<Grid>) -> Vec<Answer> {
    grids
        .into_iter()
        .enumerate()
        .map(|(i, mut board)| {
            let clicks = board.solve_clicks();
            debug!("case #{}: {} clicks\n{board}", i + 1, clicks.len());
            Answer {
                case: i + 1,
                clicks,
                board,
            }
        })
        .collect()
}

/// One `Case #n: clicks` line per answer, each followed by its board
/// when `show` is set.
pub fn write_answers(out: &mut impl Write, answers: &[Answer], show: bool) -> Result<()> {
    for answer in answers {
        writeln!(out, "{answer}")?;
        if show {
            write!(out, "{}", answer.board)?;
        }
    }
    out.flush()?;
    Ok(())
}
