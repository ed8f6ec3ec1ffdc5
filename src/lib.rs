use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub mod grid;
pub mod input;
pub mod report;
pub mod solver;
pub mod stack;

pub use grid::{Grid, Marker};
pub use input::{parse_maze, read_maze, MazeInput, RejectedRecord};
pub use report::{solution_path, PathDisplay};
pub use solver::{Outcome, SolveState, Solver};
pub use stack::TraversalStack;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidDimension(i64, i64),
    TooLarge(i64, i64),
    OutOfRange(i64, i64),
    ConflictsWithEndpoint(Coordinate),
    UnknownMarkerType(char),
    TooFewLines(usize),
    MalformedHeader(usize, String), // (line number, text of that line)
    MalformedRecord(String),
    EmptyStack,
    NoStartPosition,
    NoEndPosition,
    InvariantViolation(Coordinate),
    EmptyGrid,
    InconsistentRow(usize, usize),
    InvalidCharForGrid(char),
    BrokenBorder(Coordinate),
    MultipleStartPosition(Coordinate, Coordinate),
    MultipleEndPosition(Coordinate, Coordinate),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDimension(width, height) => write!(
                f,
                "Maze sizes must be greater than 0, given {} x {}.",
                width, height
            ),
            Error::TooLarge(width, height) => write!(
                f,
                "Maze of {} x {} is too large, expect at most {} cells.",
                width,
                height,
                Grid::MAX_CELL_N
            ),
            Error::OutOfRange(col, row) => write!(
                f,
                "Invalid coordinates({}, {}): outside of maze range.",
                col, row
            ),
            Error::ConflictsWithEndpoint(coord) => write!(
                f,
                "Invalid coordinates{}: attempting to block start/end position.",
                coord
            ),
            Error::UnknownMarkerType(c) => {
                write!(f, "Invalid type({}): type is not recognized.", c)
            }
            Error::TooFewLines(line_n) => write!(
                f,
                "Invalid data file, expect more than 3 lines, given {}.",
                line_n
            ),
            Error::MalformedHeader(line_no, text) => write!(
                f,
                "Expect two integers on line {}, given \"{}\".",
                line_no, text
            ),
            Error::MalformedRecord(text) => write!(
                f,
                "Expect record as \"column row type\", given \"{}\".",
                text
            ),
            Error::EmptyStack => write!(f, "Traversal stack is empty."),
            Error::NoStartPosition => write!(f, "No start position in maze."),
            Error::NoEndPosition => write!(f, "No end position in maze."),
            Error::InvariantViolation(coord) => write!(
                f,
                "Traversal reached coordinate{} outside of the bordered grid.",
                coord
            ),
            Error::EmptyGrid => write!(f, "Given grid text is empty."),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForGrid(c) => write!(f, "Invalid character({}) for grid.", c),
            Error::BrokenBorder(coord) => {
                write!(f, "Expect a wall on the border at {}.", coord)
            }
            Error::MultipleStartPosition(last_coord, coord) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_coord, coord
            ),
            Error::MultipleEndPosition(last_coord, coord) => write!(
                f,
                "Expect only one end position, given two({}, {}).",
                last_coord, coord
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Trace every push onto and pop from the traversal stack.
    #[arg(short, long)]
    pub debug: bool,
    /// Print the path from start to end when the maze has a solution.
    #[arg(short, long)]
    pub path: bool,
}

impl CLIArgs {
    pub fn options(&self) -> Options {
        Options { trace: self.debug }
    }
}

/// Settings of a single run, handed to every component that may trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub trace: bool,
}

impl Options {
    pub fn traced() -> Self {
        Self { trace: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Directions in the order a search explores them.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Right,
            Direction::Left,
            Direction::Down,
            Direction::Up,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    col: i64,
    row: i64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

impl Coordinate {
    pub fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> i64 {
        self.col
    }

    pub fn row(&self) -> i64 {
        self.row
    }

    pub fn neighbor(&self, dir: Direction) -> Self {
        match dir {
            Direction::Right => Self::new(self.col + 1, self.row),
            Direction::Left => Self::new(self.col - 1, self.row),
            Direction::Down => Self::new(self.col, self.row + 1),
            Direction::Up => Self::new(self.col, self.row - 1),
        }
    }
}
