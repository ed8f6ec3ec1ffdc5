use std::{fs, path::Path};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Coordinate, Error, Grid, Options};

/// A maze read from its text description.
#[derive(Debug)]
pub struct MazeInput {
    pub width: usize,
    pub height: usize,
    pub start: Coordinate,
    pub end: Coordinate,
    pub grid: Grid,
    pub rejected: Vec<RejectedRecord>,
}

/// A record line that was skipped while building the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub line_no: usize,
    pub error: Error,
}

pub fn read_maze<P: AsRef<Path>>(path: P, options: Options) -> Result<MazeInput> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Can't open input file: {}", path.as_ref().display()))?;

    parse_maze(&text, options).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn parse_maze(text: &str, options: Options) -> Result<MazeInput> {
    let line_n = text.matches('\n').count();
    if line_n <= 3 {
        return Err(Error::TooFewLines(line_n).into());
    }

    let mut enum_lines = text.lines().enumerate();
    let mut next_pair = || -> Result<(i64, i64), Error> {
        let (ind, line) = enum_lines.next().ok_or(Error::TooFewLines(line_n))?;
        parse_pair(line).ok_or_else(|| Error::MalformedHeader(ind + 1, line.to_string()))
    };
    let (width, height) = next_pair()?;
    let (start_col, start_row) = next_pair()?;
    let (end_col, end_row) = next_pair()?;

    let mut grid = Grid::new(width, height, options)?;
    let start = Coordinate::new(start_col, start_row);
    let end = Coordinate::new(end_col, end_row);
    grid.set_start(&start)
        .and_then(|_| grid.set_end(&end))
        .context("Start/End position outside of maze range.")?;

    let mut rejected = Vec::new();
    for (ind, line) in text.lines().enumerate().skip(3) {
        if line.trim().is_empty() {
            continue;
        }

        if let Err(error) = place_record(&mut grid, line) {
            log::warn!("Line {}: {}", ind + 1, error);
            rejected.push(RejectedRecord {
                line_no: ind + 1,
                error,
            });
        }
    }

    Ok(MazeInput {
        width: grid.width(),
        height: grid.height(),
        start,
        end,
        grid,
        rejected,
    })
}

fn parse_pair(line: &str) -> Option<(i64, i64)> {
    static PAIR_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\s*(-?\d+)\s+(-?\d+)\s*$").unwrap());

    let caps = PAIR_REGEX.captures(line)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

fn place_record(grid: &mut Grid, line: &str) -> Result<(), Error> {
    static RECORD_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\s*(-?\d+)\s+(-?\d+)\s+(\S)\s*$").unwrap());

    let malformed = || Error::MalformedRecord(line.to_string());
    let caps = RECORD_REGEX.captures(line).ok_or_else(malformed)?;
    let col = caps[1].parse::<i64>().map_err(|_| malformed())?;
    let row = caps[2].parse::<i64>().map_err(|_| malformed())?;
    let type_char = caps[3].chars().next().ok_or_else(malformed)?;

    grid.place(&Coordinate::new(col, row), type_char)
}
