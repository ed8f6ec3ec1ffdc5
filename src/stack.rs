use crate::{Coordinate, Error, Options};

/// Last-in-first-out record of the coordinates a search has stepped on.
#[derive(Debug, Clone)]
pub struct TraversalStack {
    coords: Vec<Coordinate>,
    options: Options,
}

impl TraversalStack {
    pub fn new(options: Options) -> Self {
        Self {
            coords: Vec::new(),
            options,
        }
    }

    pub fn push(&mut self, coord: Coordinate) {
        if self.options.trace {
            log::debug!("{} pushed into the stack.", coord);
        }
        self.coords.push(coord);
    }

    pub fn pop(&mut self) -> Result<Coordinate, Error> {
        let coord = self.coords.pop().ok_or(Error::EmptyStack)?;
        if self.options.trace {
            log::debug!("{} popped from the stack.", coord);
        }

        Ok(coord)
    }

    pub fn peek(&self) -> Result<Coordinate, Error> {
        self.coords.last().copied().ok_or(Error::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Same stack with tracing switched off.
    pub fn silenced(mut self) -> Self {
        self.options.trace = false;
        self
    }
}
