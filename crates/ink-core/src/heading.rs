//! Cardinal headings and grid positions.
//!
//! Row 0 is the bottom edge of the grid as drawn, so `North` moves to a
//! higher row index and `South` to a lower one.  `East` increases the column.

use std::fmt;

// ── Heading ───────────────────────────────────────────────────────────────────

/// The direction a traveler currently faces.
///
/// Discriminants follow counter-clockwise quarter turns starting at north,
/// which is what [`quarter_turns`](Heading::quarter_turns) exposes to a
/// renderer rotating a traveler glyph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heading {
    North = 0,
    West = 1,
    South = 2,
    East = 3,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::West, Heading::South, Heading::East];

    #[inline]
    pub fn from_index(i: usize) -> Heading {
        Self::ALL[i % 4]
    }

    /// Counter-clockwise quarter turns from north (0..=3).
    #[inline]
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::North | Heading::South)
    }

    /// The two headings at right angles to `self`.
    #[inline]
    pub fn perpendicular(self) -> [Heading; 2] {
        if self.is_vertical() {
            [Heading::East, Heading::West]
        } else {
            [Heading::North, Heading::South]
        }
    }

    #[inline]
    pub fn opposite(self) -> Heading {
        Self::from_index(self as usize + 2)
    }

    /// One quarter turn counter-clockwise.
    #[inline]
    pub fn left(self) -> Heading {
        Self::from_index(self as usize + 1)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::North => "north",
            Heading::West => "west",
            Heading::South => "south",
            Heading::East => "east",
        };
        f.write_str(s)
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

/// A cell coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `heading`, or `None` if that would leave a
    /// `rows × cols` grid.
    pub fn step(self, heading: Heading, rows: u32, cols: u32) -> Option<Position> {
        let Position { row, col } = self;
        match heading {
            Heading::North if row + 1 < rows => Some(Position::new(row + 1, col)),
            Heading::South if row > 0 => Some(Position::new(row - 1, col)),
            Heading::East if col + 1 < cols => Some(Position::new(row, col + 1)),
            Heading::West if col > 0 => Some(Position::new(row, col - 1)),
            _ => None,
        }
    }

    /// Cells from here to the grid edge in `heading`, counting this cell.
    ///
    /// A traveler choosing a distance uniformly in `0..span` never walks off
    /// the grid and can land exactly on the edge cell.
    pub fn span(self, heading: Heading, rows: u32, cols: u32) -> u32 {
        match heading {
            Heading::North => rows - self.row,
            Heading::South => self.row + 1,
            Heading::East => cols - self.col,
            Heading::West => self.col + 1,
        }
    }

    /// `true` for the four extreme cells of a `rows × cols` grid.
    #[inline]
    pub fn is_corner(self, rows: u32, cols: u32) -> bool {
        (self.row == 0 || self.row + 1 == rows) && (self.col == 0 || self.col + 1 == cols)
    }

    /// `true` when the cell touches no edge of the grid.
    #[inline]
    pub fn is_interior(self, rows: u32, cols: u32) -> bool {
        self.row > 0 && self.col > 0 && self.row + 1 < rows && self.col + 1 < cols
    }

    /// Row-major offset into a grid `cols` wide.
    #[inline]
    pub fn offset(self, cols: u32) -> usize {
        self.row as usize * cols as usize + self.col as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
