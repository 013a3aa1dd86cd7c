use crate::cell_content::CellContent;
use crate::cell_content::CellContent::*;
use crate::visibility::Visibility;
use crate::visibility::Visibility::*;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub visibility: Visibility,
    pub content: CellContent,
}

impl Cell {
    pub fn mine() -> Self {
        Self {
            content: Mine,
            ..Self::default()
        }
    }

    pub fn is_mine(&self) -> bool {
        self.content == Mine
    }

    pub fn is_shown(&self) -> bool {
        self.visibility == Show
    }

    /// Non-mine cell with no adjacent mines, the only kind a click floods from.
    pub fn is_zero(&self) -> bool {
        self.content == Empty(0)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match (self.content, self.visibility) {
            // mines are never clicked, always draw them
            (Mine, _) => '*',
            (Empty(_), Hidden) => '#',
            (Empty(0), Show) => '.',
            (Empty(n), Show) => char::from_digit(n as u32, 10).unwrap_or('?'),
        };

        f.write_char(c)
    }
}
