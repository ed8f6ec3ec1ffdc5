use crate::{report, Coordinate, Direction, Error, Grid, Marker, Options, TraversalStack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    Running,
    Solved,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: SolveState,
    pub coin_n: usize,
    pub step_n: usize,
    /// Coordinates from start to end, only for a solved maze.
    pub path: Option<Vec<Coordinate>>,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        self.state == SolveState::Solved
    }
}

/// Depth first search with backtracking over a bordered grid.
///
/// Every cell stepped on is turned into a wall equivalent, so each cell is
/// pushed at most once and the search always ends.
#[derive(Debug)]
pub struct Solver {
    grid: Grid,
    stack: TraversalStack,
    state: SolveState,
    coin_n: usize,
    step_n: usize,
    options: Options,
}

impl Solver {
    pub fn new(mut grid: Grid, options: Options) -> Result<Self, Error> {
        let start = grid.start().ok_or(Error::NoStartPosition)?;
        if grid.end().is_none() {
            return Err(Error::NoEndPosition);
        }

        let mut stack = TraversalStack::new(options);
        grid.mark_visited(&start);
        stack.push(start);

        Ok(Self {
            grid,
            stack,
            state: SolveState::Running,
            coin_n: 0,
            step_n: 0,
            options,
        })
    }

    pub fn state(&self) -> SolveState {
        self.state
    }

    pub fn coin_n(&self) -> usize {
        self.coin_n
    }

    pub fn step_n(&self) -> usize {
        self.step_n
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stack(&self) -> &TraversalStack {
        &self.stack
    }

    pub fn step(&mut self) -> Result<SolveState, Error> {
        if self.state != SolveState::Running {
            return Ok(self.state);
        }

        self.step_n += 1;
        let cur_coord = self.stack.peek()?;
        let cur_marker = self
            .grid
            .marker_at(&cur_coord)
            .ok_or(Error::InvariantViolation(cur_coord))?;
        if cur_marker == Marker::End {
            self.state = SolveState::Solved;
            if self.options.trace {
                log::debug!("Reached end at {} after {} step(s).", cur_coord, self.step_n);
            }
            return Ok(self.state);
        }

        let next = Direction::all_dirs()
            .iter()
            .map(|dir| cur_coord.neighbor(*dir))
            .find_map(|coord| {
                self.grid
                    .marker_at(&coord)
                    .filter(|marker| !marker.blocks())
                    .map(|marker| (coord, marker))
            });
        match next {
            Some((next_coord, next_marker)) => {
                if next_marker == Marker::Coin {
                    self.coin_n += 1;
                    if self.options.trace {
                        log::debug!("Coin collected at {}, {} so far.", next_coord, self.coin_n);
                    }
                }
                self.grid.mark_visited(&next_coord);
                self.stack.push(next_coord);
            }
            None => {
                self.stack.pop()?;
                if self.stack.is_empty() {
                    self.state = SolveState::Exhausted;
                }
            }
        }

        Ok(self.state)
    }

    pub fn run(mut self) -> Result<Outcome, Error> {
        while self.step()? == SolveState::Running {}

        let path = if self.state == SolveState::Solved {
            Some(report::solution_path(self.stack.silenced())?)
        } else {
            None
        };

        Ok(Outcome {
            state: self.state,
            coin_n: self.coin_n,
            step_n: self.step_n,
            path,
        })
    }
}
