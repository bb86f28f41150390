use std::fmt;
use std::str::FromStr;

use crate::error::PositionError;

/// Side length of the square grid.
pub const SIZE: usize = 5;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Corner cells holding the tigers at the start of a game.
pub const CORNERS: [usize; 4] = [0, SIZE - 1, CELLS - SIZE, CELLS - 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Tiger,
    Goat,
}

impl Cell {
    /// Single character used by the text layout (`T`, `G`, `.`).
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Tiger => 'T',
            Cell::Goat => 'G',
        }
    }

    fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'T' | 't' => Some(Cell::Tiger),
            'G' | 'g' => Some(Cell::Goat),
            _ => None,
        }
    }
}

/// Orthogonal directions, in the order every scan over them uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Up, down, left, right.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Row and column delta of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Row-major index of `(row, col)`.
pub fn index(row: usize, col: usize) -> usize {
    row * SIZE + col
}

/// `(row, col)` of a row-major index.
pub fn coords(index: usize) -> (usize, usize) {
    (index / SIZE, index % SIZE)
}

/// The cell `steps` cells away from `index` in `dir`, or `None` when that
/// leaves the grid. Rows and columns never wrap.
pub fn offset(index: usize, dir: Direction, steps: isize) -> Option<usize> {
    if index >= CELLS {
        return None;
    }
    let (row, col) = coords(index);
    let (dr, dc) = dir.delta();
    let r = row as isize + dr * steps;
    let c = col as isize + dc * steps;
    if r < 0 || c < 0 || r >= SIZE as isize || c >= SIZE as isize {
        return None;
    }
    Some(self::index(r as usize, c as usize))
}

/// Orthogonal neighbours of `index`, up/down/left/right order.
pub fn neighbors(index: usize) -> impl Iterator<Item = usize> {
    DIRECTIONS
        .into_iter()
        .filter_map(move |dir| offset(index, dir, 1))
}

/// True if `a` and `b` are orthogonal neighbours (Manhattan distance 1).
pub fn is_adjacent(a: usize, b: usize) -> bool {
    neighbors(a).any(|n| n == b)
}

/// Midpoint and landing cell of a jump from `index` in `dir`.
pub fn jump_path(index: usize, dir: Direction) -> Option<(usize, usize)> {
    let over = offset(index, dir, 1)?;
    let to = offset(index, dir, 2)?;
    Some((over, to))
}

/// Midpoint of a straight two-cell jump from `from` to `to`, if the pair is
/// one. Diagonal and knight-like offsets return `None`.
pub fn jump_midpoint(from: usize, to: usize) -> Option<usize> {
    DIRECTIONS
        .into_iter()
        .filter_map(|dir| jump_path(from, dir))
        .find(|&(_, landing)| landing == to)
        .map(|(over, _)| over)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Starting layout: a tiger in each corner, everything else empty
    pub fn starting() -> Self {
        let mut board = Board::new();
        for corner in CORNERS {
            board.cells[corner] = Cell::Tiger;
        }
        board
    }

    /// Cell at a row-major index, `None` off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Cell at a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CELLS`; use [`Board::cell`] for unchecked input.
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Cell at `(row, col)`
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.get(index(row, col))
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// False for off-board indices.
    pub fn is_empty(&self, index: usize) -> bool {
        self.cell(index) == Some(Cell::Empty)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Indices holding `cell`, ascending.
    pub fn positions(&self, cell: Cell) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cell)
            .map(|(i, _)| i)
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Landing cell of a legal jump-capture from `from` in `dir`: the
    /// neighbour holds a goat and the cell beyond it is empty.
    pub fn capture_in(&self, from: usize, dir: Direction) -> Option<(usize, usize)> {
        let (over, to) = jump_path(from, dir)?;
        (self.cells[over] == Cell::Goat && self.cells[to] == Cell::Empty).then_some((over, to))
    }

    /// True if the piece on `index` has an empty orthogonal neighbour.
    pub fn has_empty_neighbor(&self, index: usize) -> bool {
        neighbors(index).any(|n| self.cells[n] == Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIZE {
                write!(f, "{}", self.at(row, col).symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the text layout written by `Display`: 25 cell symbols, row-major,
/// whitespace ignored.
impl FromStr for Board {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_symbol(c).ok_or(PositionError::BadSymbol(c))?;
            if count == CELLS {
                return Err(PositionError::BadLength(count + 1));
            }
            board.cells[count] = cell;
            count += 1;
        }
        if count != CELLS {
            return Err(PositionError::BadLength(count));
        }
        Ok(board)
    }
}
