use crate::cell::Cell;
use crate::cell_content::CellContent::*;
use crate::util::{Cursor, DIRS_8, i_rc, rc_i, valid_neighbors};
use crate::visibility::Visibility::*;
use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use log::trace;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Square board of cells, row first.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    size: u16,
    cells: Vec<Cell>,
    // work list for flood fills, kept to reuse its allocation
    point_stack: Vec<Cursor>,
}

impl Grid {
    /// Builds an uncounted, fully hidden grid from `.`/`*` rows.
    ///
    /// The row count is the board size; every row has to be exactly that wide.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let n = rows.len();
        let size = u16::try_from(n).map_err(|_| eyre!("grid of {n} rows is too large"))?;

        let mut cells = Vec::with_capacity(n * n);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != n {
                bail!("row {} has {} cells, expected {}", r + 1, width, n);
            }
            for (c, ch) in row.chars().enumerate() {
                cells.push(match ch {
                    '.' => Cell::default(),
                    '*' => Cell::mine(),
                    other => bail!("unexpected {other:?} at row {}, column {}", r + 1, c + 1),
                });
            }
        }

        Ok(Self {
            size,
            cells,
            point_stack: Vec::new(),
        })
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn get(&self, cursor: Cursor) -> Option<&Cell> {
        rc_i(cursor, self.size).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, cursor: Cursor) -> Option<&mut Cell> {
        rc_i(cursor, self.size).map(|i| &mut self.cells[i])
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_mine()).count()
    }

    /// Every non-mine cell is shown.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.is_mine() || c.is_shown())
    }

    pub fn hide_all(&mut self) {
        for cell in &mut self.cells {
            cell.visibility = Hidden;
        }
    }

    /// Sets every empty cell to the number of mines around it.
    pub fn count_mines(&mut self) {
        let size = self.size;
        for cell in &mut self.cells {
            if let Empty(n) = &mut cell.content {
                *n = 0;
            }
        }

        for i in 0..self.cells.len() {
            if !self.cells[i].is_mine() {
                continue;
            }
            let Some(mine) = i_rc(i, size) else { continue };
            for neigh in valid_neighbors(&DIRS_8, mine, size) {
                // mines keep their marker
                if let Some(Cell {
                    content: Empty(n), ..
                }) = self.get_mut(neigh)
                {
                    *n += 1;
                }
            }
        }
    }

    /// Flood fill from `cursor`. Returns how many cells were uncovered,
    /// mines bordering the flood included.
    ///
    /// Zero neighbors are expanded in turn; numbered neighbors are shown
    /// but not expanded. A mine origin is shown without touching its
    /// neighbors.
    pub fn reveal(&mut self, cursor: Cursor) -> usize {
        let size = self.size;
        match self.get(cursor) {
            Some(cell) if !cell.is_shown() => {}
            _ => return 0,
        }

        let mut revealed = 0;
        let mut stack = std::mem::take(&mut self.point_stack);
        stack.push(cursor);

        while let Some(at) = stack.pop() {
            let Some(cell) = self.get_mut(at) else {
                continue;
            };
            // pushed twice before the first copy was handled
            if cell.is_shown() {
                continue;
            }
            cell.visibility = Show;
            revealed += 1;
            if cell.is_mine() {
                continue;
            }

            for neigh in valid_neighbors(&DIRS_8, at, size) {
                let Some(n) = self.get_mut(neigh) else {
                    continue;
                };
                if n.is_shown() {
                    continue;
                }
                if n.is_zero() {
                    stack.push(neigh);
                } else {
                    n.visibility = Show;
                    revealed += 1;
                }
            }
        }

        self.point_stack = stack;
        revealed
    }

    /// One click as the solver makes it: zero cells flood, anything else
    /// hidden and mine free is shown alone. Returns the cells uncovered.
    pub fn click(&mut self, cursor: Cursor) -> usize {
        let Some(cell) = self.get_mut(cursor) else {
            return 0;
        };
        if cell.is_shown() || cell.is_mine() {
            return 0;
        }
        if cell.is_zero() {
            return self.reveal(cursor);
        }
        cell.visibility = Show;
        1
    }

    /// Minimum clicks to uncover the board, in the order they are made.
    ///
    /// Expects [`Grid::count_mines`] to have run.
    pub fn solve_clicks(&mut self) -> Vec<Cursor> {
        let size = self.size;
        let mut clicks = Vec::new();

        // every flood reachable from a zero cell costs one click
        for i in 0..self.cells.len() {
            let cell = self.cells[i];
            if cell.is_shown() || !cell.is_zero() {
                continue;
            }
            let Some(cursor) = i_rc(i, size) else { continue };
            let revealed = self.reveal(cursor);
            trace!("flood at {cursor:?} uncovered {revealed} cells");
            clicks.push(cursor);
        }

        // numbered cells no flood reached
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if cell.is_mine() || cell.is_shown() {
                continue;
            }
            let Some(cursor) = i_rc(i, size) else { continue };
            cell.visibility = Show;
            trace!("single click at {cursor:?}");
            clicks.push(cursor);
        }

        clicks
    }

    #[allow(dead_code)]
    pub fn solve(&mut self) -> usize {
        self.solve_clicks().len()
    }
}

impl FromStr for Grid {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        Self::from_rows(&rows)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for line in self.cells.chunks_exact(self.size as usize) {
            for cell in line {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
