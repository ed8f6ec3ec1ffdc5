use std::{fmt::Display, str::FromStr};

use crate::{Coordinate, Error, Options};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Empty,
    Wall,
    Start,
    End,
    Coin,
    Visited,
}

impl Marker {
    /// Walls and visited cells both stop a search from stepping in.
    pub fn blocks(&self) -> bool {
        matches!(self, Marker::Wall | Marker::Visited)
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker_char = match self {
            Marker::Empty => '.',
            Marker::Wall | Marker::Visited => '*',
            Marker::Start => 's',
            Marker::End => 'e',
            Marker::Coin => 'C',
        };

        write!(f, "{}", marker_char)
    }
}

impl TryFrom<char> for Marker {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Marker::Empty),
            '*' => Ok(Marker::Wall),
            's' => Ok(Marker::Start),
            'e' => Ok(Marker::End),
            'C' => Ok(Marker::Coin),
            other => Err(Error::InvalidCharForGrid(other)),
        }
    }
}

/// Cells of a maze surrounded by a one cell wide wall.
///
/// Interior cells are addressed with 1-based coordinates, column in
/// `1..=width` and row in `1..=height`. Column and row 0 as well as
/// `width + 1` and `height + 1` belong to the border.
#[derive(Debug, Clone)]
pub struct Grid {
    markers: Vec<Marker>,
    width: usize,
    height: usize,
    start: Option<Coordinate>,
    end: Option<Coordinate>,
    options: Options,
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.markers.chunks(self.width + 2) {
            for marker in row {
                write!(f, "{}", marker)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| line.trim_end())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        if rows.len() < 3 {
            return Err(Error::EmptyGrid);
        }

        let col_n = rows[0].chars().count();
        if col_n < 3 {
            return Err(Error::EmptyGrid);
        }

        let (width, height) = ((col_n - 2) as i64, (rows.len() - 2) as i64);
        let mut grid = Grid::new(width, height, Options::default())?;
        for (r, row_text) in rows.iter().enumerate() {
            let this_col_n = row_text.chars().count();
            if this_col_n != col_n {
                return Err(Error::InconsistentRow(col_n, this_col_n));
            }

            for (c, ch) in row_text.chars().enumerate() {
                let coord = Coordinate::new(c as i64, r as i64);
                let marker = Marker::try_from(ch)?;
                if grid.is_border(&coord) {
                    if marker != Marker::Wall {
                        return Err(Error::BrokenBorder(coord));
                    }
                    continue;
                }

                match marker {
                    Marker::Start => {
                        if let Some(last_coord) = grid.start {
                            return Err(Error::MultipleStartPosition(last_coord, coord));
                        }
                        grid.start = Some(coord);
                    }
                    Marker::End => {
                        if let Some(last_coord) = grid.end {
                            return Err(Error::MultipleEndPosition(last_coord, coord));
                        }
                        grid.end = Some(coord);
                    }
                    _ => (),
                }
                grid.set_marker(&coord, marker);
            }
        }

        // A start placed on the end cell renders as the end only.
        let end = grid.end.ok_or(Error::NoEndPosition)?;
        if grid.start.is_none() {
            grid.start = Some(end);
        }

        Ok(grid)
    }
}

impl Grid {
    /// Upper bound of cells in a grid, border included.
    pub const MAX_CELL_N: usize = 1 << 24;

    pub fn new(width: i64, height: i64, options: Options) -> Result<Self, Error> {
        if width < 1 || height < 1 {
            return Err(Error::InvalidDimension(width, height));
        }

        let cell_n = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_add(2)?.checked_mul(h.checked_add(2)?))
            .filter(|cell_n| *cell_n <= Self::MAX_CELL_N)
            .ok_or(Error::TooLarge(width, height))?;

        let (width, height) = (width as usize, height as usize);
        let mut grid = Self {
            markers: vec![Marker::Empty; cell_n],
            width,
            height,
            start: None,
            end: None,
            options,
        };
        for ind in 0..grid.markers.len() {
            let coord = grid.ind_to_coord(ind);
            if grid.is_border(&coord) {
                grid.markers[ind] = Marker::Wall;
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    pub fn end(&self) -> Option<Coordinate> {
        self.end
    }

    pub fn is_inside(&self, coord: &Coordinate) -> bool {
        (1..=self.width as i64).contains(&coord.col())
            && (1..=self.height as i64).contains(&coord.row())
    }

    pub fn set_start(&mut self, coord: &Coordinate) -> Result<(), Error> {
        self.check_inside(coord)?;
        if let Some(last_coord) = self.start {
            if self.marker_at(&last_coord) == Some(Marker::Start) {
                self.set_marker(&last_coord, Marker::Empty);
            }
        }

        self.start = Some(*coord);
        // Start and end may share a cell, the end wins.
        if self.marker_at(coord) != Some(Marker::End) {
            self.set_marker(coord, Marker::Start);
        }

        Ok(())
    }

    pub fn set_end(&mut self, coord: &Coordinate) -> Result<(), Error> {
        self.check_inside(coord)?;
        if let Some(last_coord) = self.end {
            if self.marker_at(&last_coord) == Some(Marker::End) {
                let restored = if self.start == Some(last_coord) {
                    Marker::Start
                } else {
                    Marker::Empty
                };
                self.set_marker(&last_coord, restored);
            }
        }

        self.end = Some(*coord);
        self.set_marker(coord, Marker::End);

        Ok(())
    }

    pub fn set_blocked(&mut self, coord: &Coordinate) -> Result<(), Error> {
        self.place_marker(coord, Marker::Wall)
    }

    pub fn set_coin(&mut self, coord: &Coordinate) -> Result<(), Error> {
        self.place_marker(coord, Marker::Coin)
    }

    /// Places the marker named by a record type character, `b` for a wall and
    /// `c` for a coin.
    pub fn place(&mut self, coord: &Coordinate, type_char: char) -> Result<(), Error> {
        self.check_placeable(coord)?;
        match type_char {
            'b' => self.set_blocked(coord),
            'c' => self.set_coin(coord),
            other => Err(Error::UnknownMarkerType(other)),
        }
    }

    pub fn marker_at(&self, coord: &Coordinate) -> Option<Marker> {
        self.coord_to_ind(coord).map(|ind| self.markers[ind])
    }

    /// Turns the cell into a wall equivalent, except for the end cell which
    /// must stay detectable.
    pub fn mark_visited(&mut self, coord: &Coordinate) {
        match self.marker_at(coord) {
            Some(Marker::End) | None => (),
            Some(_) => {
                self.set_marker(coord, Marker::Visited);
                if self.options.trace {
                    log::debug!("{} marked as visited.", coord);
                }
            }
        }
    }

    pub fn count(&self, marker: Marker) -> usize {
        self.markers.iter().filter(|m| **m == marker).count()
    }

    /// Compares walls, coins and endpoints cell by cell.
    pub fn same_layout(&self, other: &Grid) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.start == other.start
            && self.end == other.end
            && self.markers == other.markers
    }

    fn place_marker(&mut self, coord: &Coordinate, marker: Marker) -> Result<(), Error> {
        self.check_placeable(coord)?;
        self.set_marker(coord, marker);
        if self.options.trace {
            log::debug!("{} set to {}.", coord, marker);
        }

        Ok(())
    }

    fn check_placeable(&self, coord: &Coordinate) -> Result<(), Error> {
        self.check_inside(coord)?;
        if self.start == Some(*coord) || self.end == Some(*coord) {
            return Err(Error::ConflictsWithEndpoint(*coord));
        }

        Ok(())
    }

    fn check_inside(&self, coord: &Coordinate) -> Result<(), Error> {
        if self.is_inside(coord) {
            Ok(())
        } else {
            Err(Error::OutOfRange(coord.col(), coord.row()))
        }
    }

    fn set_marker(&mut self, coord: &Coordinate, marker: Marker) {
        if let Some(ind) = self.coord_to_ind(coord) {
            self.markers[ind] = marker;
        }
    }

    fn is_border(&self, coord: &Coordinate) -> bool {
        coord.col() == 0
            || coord.row() == 0
            || coord.col() == self.width as i64 + 1
            || coord.row() == self.height as i64 + 1
    }

    fn coord_to_ind(&self, coord: &Coordinate) -> Option<usize> {
        let col = usize::try_from(coord.col()).ok()?;
        let row = usize::try_from(coord.row()).ok()?;
        if col < self.width + 2 && row < self.height + 2 {
            Some(row * (self.width + 2) + col)
        } else {
            None
        }
    }

    fn ind_to_coord(&self, ind: usize) -> Coordinate {
        let row_len = self.width + 2;
        Coordinate::new((ind % row_len) as i64, (ind / row_len) as i64)
    }
}
