use std::fmt::Display;

use crate::{Coordinate, Error, Options, TraversalStack};

/// Turns the stack left by a solved search into the path from start to end.
///
/// The stack is popped into a second stack, which then pops out in start to
/// end order.
pub fn solution_path(mut stack: TraversalStack) -> Result<Vec<Coordinate>, Error> {
    let mut inverted = TraversalStack::new(Options::default());
    while !stack.is_empty() {
        inverted.push(stack.pop()?);
    }

    let mut path = Vec::with_capacity(inverted.len());
    while !inverted.is_empty() {
        path.push(inverted.pop()?);
    }

    Ok(path)
}

pub struct PathDisplay<'a>(pub &'a [Coordinate]);

impl Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (ind, coord) in self.0.iter().enumerate() {
            if ind > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", coord)?;
        }

        Ok(())
    }
}
