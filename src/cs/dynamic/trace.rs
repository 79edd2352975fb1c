//! # Traces
//!
//! A [`Trace`] is the ordered record of every table cell a bottom-up dynamic
//! programming pass filled in, one step per cell, in the order the cells were
//! computed. Traces are built once and never mutated; a change of input builds
//! a fresh trace.

use std::ops::Index;
use std::slice;

/// A single recorded cell of a DP table.
pub trait TraceStep {
    /// The table index this step fills in.
    fn position(&self) -> usize;

    /// Human-readable derivation of the cell's value.
    fn explanation(&self) -> &str;
}

/// Anything that exposes a trace of steps for playback.
///
/// Builders that keep more than the steps (the final table, backtracking data)
/// implement this so a player can drive them directly.
pub trait Timeline {
    type Step;

    fn trace(&self) -> &Trace<Self::Step>;
}

/// An immutable, ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> Trace<S> {
    /// A trace with no steps, returned for inputs that cannot be tabulated.
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn from_steps(steps: Vec<S>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    /// The final step, i.e. the answer cell.
    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.steps.iter()
    }

    /// Steps revealed once playback has reached `cursor`.
    ///
    /// A cursor of `None` (nothing shown yet) reveals nothing; cursors past the
    /// end reveal the whole trace.
    pub fn revealed(&self, cursor: Option<usize>) -> &[S] {
        match cursor {
            Some(c) => &self.steps[..c.saturating_add(1).min(self.steps.len())],
            None => &[],
        }
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<S> Timeline for Trace<S> {
    type Step = S;

    fn trace(&self) -> &Trace<S> {
        self
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
