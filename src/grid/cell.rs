//! Grid cells and the row-major cell store

use super::ClusterId;
use crate::error::GameError;
use std::fmt;

/// Content of a letter cell whose cluster was cleared
pub const PLACEHOLDER: char = '.';

/// Bracket alphabets; a matching pair shares an index
pub const OPEN_BRACKETS: [char; 4] = ['(', '{', '[', '<'];
pub const CLOSE_BRACKETS: [char; 4] = [')', '}', ']', '>'];

const PRINTABLE: std::ops::RangeInclusive<char> = '!'..='~';

/// Row and column of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Bracket role of a symbol, as an index into the bracket alphabets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Open(usize),
    Close(usize),
    Plain,
}

impl Bracket {
    #[must_use]
    pub fn classify(c: char) -> Self {
        if let Some(index) = OPEN_BRACKETS.iter().position(|&b| b == c) {
            Self::Open(index)
        } else if let Some(index) = CLOSE_BRACKETS.iter().position(|&b| b == c) {
            Self::Close(index)
        } else {
            Self::Plain
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Letter,
    Symbol(Bracket),
}

/// One position of the grid
///
/// A cell only records the handle of the cluster it belongs to; membership itself is
/// owned by the cluster registry in [`super::CellManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    content: char,
    kind: CellKind,
    active: bool,
    cluster: Option<ClusterId>,
}

impl Cell {
    /// Classify `c` and build the matching cell variant
    ///
    /// # Errors
    /// Returns `GameError::InvalidCharacter` for anything outside printable ASCII.
    pub fn from_char(position: Position, c: char) -> Result<Self, GameError> {
        if c.is_alphabetic() {
            Self::letter(position, c)
        } else {
            Self::symbol(position, c)
        }
    }

    /// A letter cell, uppercased
    ///
    /// # Errors
    /// Returns `GameError::InvalidCharacter` unless `c` is an ASCII letter or the placeholder.
    pub fn letter(position: Position, c: char) -> Result<Self, GameError> {
        let content = validate_letter(position, c)?;
        Ok(Self {
            position,
            content,
            kind: CellKind::Letter,
            active: false,
            cluster: None,
        })
    }

    /// A symbol cell, tagged with its bracket role
    ///
    /// # Errors
    /// Returns `GameError::InvalidCharacter` for letters and non-printable characters.
    pub fn symbol(position: Position, c: char) -> Result<Self, GameError> {
        validate_symbol(position, c)?;
        Ok(Self {
            position,
            content: c,
            kind: CellKind::Symbol(Bracket::classify(c)),
            active: false,
            cluster: None,
        })
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn content(&self) -> char {
        self.content
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_letter(&self) -> bool {
        matches!(self.kind, CellKind::Letter)
    }

    /// Bracket role, `None` for letter cells
    #[inline]
    #[must_use]
    pub const fn bracket(&self) -> Option<Bracket> {
        match self.kind {
            CellKind::Symbol(bracket) => Some(bracket),
            CellKind::Letter => None,
        }
    }

    /// Highlighted state
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    #[must_use]
    pub const fn cluster(&self) -> Option<ClusterId> {
        self.cluster
    }

    /// Replace the content, keeping the cell's variant
    ///
    /// # Errors
    /// Returns `GameError::InvalidCharacter` if `c` is not allowed for this variant.
    pub fn set_content(&mut self, c: char) -> Result<(), GameError> {
        match self.kind {
            CellKind::Letter => self.content = validate_letter(self.position, c)?,
            CellKind::Symbol(_) => {
                validate_symbol(self.position, c)?;
                self.content = c;
                self.kind = CellKind::Symbol(Bracket::classify(c));
            }
        }
        Ok(())
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_cluster(&mut self, cluster: Option<ClusterId>) {
        self.cluster = cluster;
    }
}

fn invalid(position: Position, ch: char, reason: &'static str) -> GameError {
    GameError::InvalidCharacter {
        ch,
        row: position.row,
        col: position.col,
        reason,
    }
}

fn validate_letter(position: Position, c: char) -> Result<char, GameError> {
    if !PRINTABLE.contains(&c) {
        return Err(invalid(position, c, "must be printable ASCII (33-126)"));
    }
    if !c.is_ascii_alphabetic() && c != PLACEHOLDER {
        return Err(invalid(position, c, "not a valid letter character"));
    }
    Ok(c.to_ascii_uppercase())
}

fn validate_symbol(position: Position, c: char) -> Result<(), GameError> {
    if !PRINTABLE.contains(&c) {
        return Err(invalid(position, c, "must be printable ASCII (33-126)"));
    }
    if c.is_ascii_alphabetic() {
        return Err(invalid(position, c, "letters cannot go in a symbol cell"));
    }
    Ok(())
}

/// Row-major storage of every cell in the grid
#[derive(Debug, Clone)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Lay `characters` out row by row
    ///
    /// # Errors
    /// Returns `GameError::GridSize` on a length mismatch, or the first
    /// `GameError::InvalidCharacter` encountered.
    pub fn new(rows: usize, cols: usize, characters: &[char]) -> Result<Self, GameError> {
        let expected = rows.checked_mul(cols);
        if expected != Some(characters.len()) {
            return Err(GameError::GridSize {
                rows,
                cols,
                expected: expected.unwrap_or(usize::MAX),
                actual: characters.len(),
            });
        }

        let cells = characters
            .iter()
            .enumerate()
            .map(|(i, &c)| Cell::from_char(Position::new(i / cols, i % cols), c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows, cols, cells })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, position: Position) -> Option<usize> {
        (position.row < self.rows && position.col < self.cols)
            .then(|| position.row * self.cols + position.col)
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|i| &self.cells[i])
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position).map(|i| &mut self.cells[i])
    }

    /// One row of cells
    ///
    /// # Panics
    /// Panics if `row >= rows`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self.row(row).iter().map(Cell::content).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Position = Position::new(0, 0);

    #[test]
    fn letters_are_uppercased() {
        let cell = Cell::from_char(ORIGIN, 'b').unwrap();
        assert!(cell.is_letter());
        assert_eq!(cell.content(), 'B');
        assert_eq!(cell.bracket(), None);
    }

    #[test]
    fn brackets_are_classified() {
        assert_eq!(Bracket::classify('('), Bracket::Open(0));
        assert_eq!(Bracket::classify('<'), Bracket::Open(3));
        assert_eq!(Bracket::classify('}'), Bracket::Close(1));
        assert_eq!(Bracket::classify(']'), Bracket::Close(2));
        assert_eq!(Bracket::classify('#'), Bracket::Plain);

        let cell = Cell::from_char(ORIGIN, '[').unwrap();
        assert_eq!(cell.kind(), CellKind::Symbol(Bracket::Open(2)));
    }

    #[test]
    fn non_printable_rejected() {
        for c in [' ', '\n', '\u{7f}', 'é'] {
            let err = Cell::from_char(Position::new(2, 3), c).unwrap_err();
            assert!(matches!(
                err,
                GameError::InvalidCharacter { row: 2, col: 3, .. }
            ));
        }
    }

    #[test]
    fn letter_cell_accepts_placeholder_only_as_extra() {
        assert_eq!(Cell::letter(ORIGIN, PLACEHOLDER).unwrap().content(), '.');
        assert!(Cell::letter(ORIGIN, '#').is_err());
        assert!(Cell::symbol(ORIGIN, 'A').is_err());
    }

    #[test]
    fn set_content_keeps_variant() {
        let mut letter = Cell::letter(ORIGIN, 'A').unwrap();
        letter.set_content(PLACEHOLDER).unwrap();
        assert_eq!(letter.content(), '.');
        assert!(letter.set_content('(').is_err());

        let mut symbol = Cell::symbol(ORIGIN, '#').unwrap();
        symbol.set_content('>').unwrap();
        assert_eq!(symbol.bracket(), Some(Bracket::Close(3)));
        assert!(symbol.set_content('z').is_err());
    }

    #[test]
    fn grid_lays_out_row_major() {
        let chars: Vec<char> = "AB#(CD".chars().collect();
        let grid = CellGrid::new(2, 3, &chars).unwrap();

        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(Position::new(1, 0)).unwrap().content(), '(');
        assert_eq!(grid.get(Position::new(1, 2)).unwrap().position(), Position::new(1, 2));
        assert!(grid.get(Position::new(2, 0)).is_none());
        assert!(grid.get(Position::new(0, 3)).is_none());
        assert_eq!(grid.to_string(), "AB#\n(CD\n");
    }

    #[test]
    fn grid_size_mismatch_rejected() {
        let chars: Vec<char> = "AB#".chars().collect();
        assert_eq!(
            CellGrid::new(2, 2, &chars).unwrap_err(),
            GameError::GridSize {
                rows: 2,
                cols: 2,
                expected: 4,
                actual: 3
            }
        );
        assert!(matches!(
            CellGrid::new(usize::MAX, 3, &chars).unwrap_err(),
            GameError::GridSize { expected: usize::MAX, actual: 3, .. }
        ));
    }
}
