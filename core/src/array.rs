//! Sequence stored in one contiguous buffer.
//!
//! Every structural change (`add`, `insert`, `remove_at`) builds a new buffer
//! of the post-mutation size and replaces the old one. The buffer is never
//! shared with callers: construction copies the input, snapshots copy the
//! buffer.

use core::fmt;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{Result, SequenceError};
use crate::sequence::{self, MIN_LENGTH, NumberSequence};

#[derive(Debug, Clone, PartialEq)]
pub struct ArraySequence {
    numbers: Box<[f64]>,
}

static_assertions::assert_impl_all!(ArraySequence: Send, Sync, Clone);

impl ArraySequence {
    /// Copies `numbers` into a new sequence.
    ///
    /// Fails with [`SequenceError::InvalidConstruction`] for fewer than two
    /// numbers.
    pub fn new(numbers: &[f64]) -> Result<Self> {
        if numbers.len() < MIN_LENGTH {
            return Err(SequenceError::InvalidConstruction {
                length: numbers.len(),
            });
        }
        tracing::trace!(length = numbers.len(), "Building array sequence");
        Ok(Self {
            numbers: numbers.into(),
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.numbers
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.numbers.iter().copied()
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.numbers.len() {
            Ok(())
        } else {
            Err(SequenceError::OutOfRange {
                position,
                length: self.numbers.len(),
            })
        }
    }

    /// Replaces the buffer with `before`, then `middle`, then `after`.
    fn rebuild(&mut self, before: &[f64], middle: Option<f64>, after: &[f64]) {
        let length = before.len() + usize::from(middle.is_some()) + after.len();
        let mut buffer = Vec::with_capacity(length);
        buffer.extend_from_slice(before);
        buffer.extend(middle);
        buffer.extend_from_slice(after);
        self.numbers = buffer.into_boxed_slice();
    }
}

impl NumberSequence for ArraySequence {
    fn len(&self) -> usize {
        self.numbers.len()
    }

    fn upper_bound(&self) -> f64 {
        let (upper, _) = sequence::bounds(self.iter()).unwrap_or_default();
        upper
    }

    fn lower_bound(&self) -> f64 {
        let (_, lower) = sequence::bounds(self.iter()).unwrap_or_default();
        lower
    }

    fn number_at(&self, position: usize) -> Result<f64> {
        self.check_position(position)?;
        Ok(self.numbers[position])
    }

    fn position_of(&self, number: f64) -> Option<usize> {
        self.numbers.iter().position(|&n| n == number)
    }

    fn is_increasing(&self) -> bool {
        self.numbers.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn is_decreasing(&self) -> bool {
        self.numbers.windows(2).all(|pair| pair[0] > pair[1])
    }

    fn contains(&self, number: f64) -> bool {
        self.numbers.iter().any(|&n| n == number)
    }

    fn add(&mut self, number: f64) {
        let current = core::mem::take(&mut self.numbers);
        self.rebuild(&current, Some(number), &[]);
    }

    fn insert(&mut self, position: usize, number: f64) -> Result<()> {
        self.check_position(position)?;
        let current = core::mem::take(&mut self.numbers);
        let (before, after) = current.split_at(position);
        self.rebuild(before, Some(number), after);
        Ok(())
    }

    fn remove_at(&mut self, position: usize) -> Result<f64> {
        if self.numbers.len() <= MIN_LENGTH {
            tracing::debug!(position, "Refusing to shrink a two-element sequence");
            return Err(SequenceError::MinimumLength);
        }
        self.check_position(position)?;
        let current = core::mem::take(&mut self.numbers);
        let removed = current[position];
        self.rebuild(&current[..position], None, &current[position + 1..]);
        Ok(removed)
    }

    fn to_vec(&self) -> Vec<f64> {
        self.numbers.to_vec()
    }
}

impl fmt::Display for ArraySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sequence::write_numbers(f, self.iter())
    }
}

impl TryFrom<&[f64]> for ArraySequence {
    type Error = SequenceError;

    fn try_from(numbers: &[f64]) -> Result<Self> {
        Self::new(numbers)
    }
}

impl TryFrom<Vec<f64>> for ArraySequence {
    type Error = SequenceError;

    fn try_from(numbers: Vec<f64>) -> Result<Self> {
        if numbers.len() < MIN_LENGTH {
            return Err(SequenceError::InvalidConstruction {
                length: numbers.len(),
            });
        }
        Ok(Self {
            numbers: numbers.into_boxed_slice(),
        })
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
