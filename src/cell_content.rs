#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    /// Number of mines in the 8 surrounding cells.
    Empty(u8),
    Mine,
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty(0)
    }
}

