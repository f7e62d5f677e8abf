use super::types::{Mark, Position};

/// Square grid of marks. Dimensions are fixed when the board is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Mark>>,
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![Mark::Empty; size]; size],
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Caller guarantees the coordinates are in bounds.
    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    pub fn rows(&self) -> &[Vec<Mark>] {
        &self.cells
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Mark::Empty)
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell != Mark::Empty).count())
            .sum()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// One string per row, `'X'`, `'O'` or `' '` per cell. Usable as a hash key.
    pub fn to_key(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.as_char()).collect())
            .collect()
    }
}
