//! The contract shared by every sequence representation.

use core::fmt;
use core::str::FromStr;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::array::ArraySequence;
use crate::error::Result;
use crate::linked::LinkedSequence;

/// Smallest number of elements a sequence may hold.
pub const MIN_LENGTH: usize = 2;

/// An ordered, mutable sequence of real numbers with at least two elements.
///
/// Implementations must agree on every observable result: the same initial
/// numbers and the same calls produce the same values, the same snapshots and
/// the same errors. A failing call never changes the sequence.
///
/// The trait is object safe, so callers can hold a `Box<dyn NumberSequence>`
/// and pick the representation at construction time (see [`SequenceKind`]).
pub trait NumberSequence: fmt::Display + fmt::Debug {
    /// Number of elements. Never less than [`MIN_LENGTH`].
    fn len(&self) -> usize;

    /// Always `false` for a sequence that upholds the length invariant.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest number in the sequence.
    fn upper_bound(&self) -> f64;

    /// Smallest number in the sequence.
    fn lower_bound(&self) -> f64;

    /// Number at `position`.
    ///
    /// Fails with [`OutOfRange`](crate::SequenceError::OutOfRange) unless
    /// `position < len()`.
    fn number_at(&self, position: usize) -> Result<f64>;

    /// Position of the first element equal to `number`, or `None`.
    fn position_of(&self, number: f64) -> Option<usize>;

    /// `true` if every element is strictly less than its successor.
    fn is_increasing(&self) -> bool;

    /// `true` if every element is strictly greater than its successor.
    fn is_decreasing(&self) -> bool;

    /// `true` if some element equals `number`.
    fn contains(&self, number: f64) -> bool;

    /// Appends `number` at the end.
    fn add(&mut self, number: f64);

    /// Inserts `number` so that it becomes the element at `position`.
    ///
    /// Only positions of existing elements are accepted: `position == len()`
    /// fails with [`OutOfRange`](crate::SequenceError::OutOfRange). Use
    /// [`add`](Self::add) to append.
    fn insert(&mut self, position: usize, number: f64) -> Result<()>;

    /// Removes and returns the element at `position`.
    ///
    /// Fails with [`MinimumLength`](crate::SequenceError::MinimumLength)
    /// whenever exactly two elements remain, before `position` is looked at.
    /// Otherwise fails with [`OutOfRange`](crate::SequenceError::OutOfRange)
    /// unless `position < len()`.
    fn remove_at(&mut self, position: usize) -> Result<f64>;

    /// Snapshot of all numbers, in order.
    fn to_vec(&self) -> Vec<f64>;
}

/// Writes `numbers` separated by `", "`.
///
/// Integral values keep their fractional part (`5.0`, not `5`).
pub(crate) fn write_numbers(
    f: &mut fmt::Formatter<'_>,
    numbers: impl IntoIterator<Item = f64>,
) -> fmt::Result {
    let mut numbers = numbers.into_iter();
    if let Some(first) = numbers.next() {
        write!(f, "{:?}", first)?;
        for number in numbers {
            write!(f, ", {:?}", number)?;
        }
    }
    Ok(())
}

/// `true` if `holds` is true for every adjacent pair.
pub(crate) fn pairwise(
    numbers: impl IntoIterator<Item = f64>,
    holds: impl Fn(f64, f64) -> bool,
) -> bool {
    let mut numbers = numbers.into_iter();
    let Some(mut previous) = numbers.next() else {
        return true;
    };
    for number in numbers {
        if !holds(previous, number) {
            return false;
        }
        previous = number;
    }
    true
}

/// Largest and smallest numbers, using the same comparisons for every
/// representation so `NaN` handling stays identical.
pub(crate) fn bounds(numbers: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut numbers = numbers.into_iter();
    let first = numbers.next()?;
    Some(numbers.fold((first, first), |(upper, lower), number| {
        (
            if upper < number { number } else { upper },
            if lower > number { number } else { lower },
        )
    }))
}

/// Backing representation, chosen when a sequence is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Contiguous buffer ([`ArraySequence`]).
    Array,
    /// Chain of owned nodes ([`LinkedSequence`]).
    Linked,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 2] = [SequenceKind::Array, SequenceKind::Linked];

    /// Builds a sequence of this kind from `numbers`.
    pub fn build(self, numbers: &[f64]) -> Result<Box<dyn NumberSequence>> {
        Ok(match self {
            SequenceKind::Array => Box::new(ArraySequence::new(numbers)?),
            SequenceKind::Linked => Box::new(LinkedSequence::new(numbers)?),
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            SequenceKind::Array => "array",
            SequenceKind::Linked => "linked",
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown [`SequenceKind`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sequence kind `{0}` (expected `array` or `linked`)")]
pub struct UnknownKind(pub alloc::string::String);

impl FromStr for SequenceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "array" => Ok(SequenceKind::Array),
            "linked" => Ok(SequenceKind::Linked),
            other => Err(UnknownKind(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceError;
    use alloc::string::ToString;

    #[test]
    fn pairwise_checks_every_pair() {
        assert!(pairwise([1.0, 2.0, 3.0], |a, b| a < b));
        assert!(!pairwise([1.0, 3.0, 2.0], |a, b| a < b));
        assert!(!pairwise([3.0, 3.0, 1.0], |a, b| a > b));
    }

    #[test]
    fn bounds_of_numbers() {
        assert_eq!(bounds([5.0, 1.0, 3.0]), Some((5.0, 1.0)));
        assert_eq!(bounds([-2.0, -2.0]), Some((-2.0, -2.0)));
        assert_eq!(bounds(core::iter::empty()), None);
    }

    #[test]
    fn kind_round_trips_through_its_name() {
        for kind in SequenceKind::ALL {
            assert_eq!(kind.to_string().parse::<SequenceKind>(), Ok(kind));
        }
        assert_eq!(
            "vector".parse::<SequenceKind>(),
            Err(UnknownKind("vector".into()))
        );
    }

    #[test]
    fn kind_builds_matching_representation() {
        for kind in SequenceKind::ALL {
            let seq = kind.build(&[1.0, 2.0]).unwrap();
            assert_eq!(seq.to_vec(), [1.0, 2.0]);
            assert_eq!(
                kind.build(&[1.0]).unwrap_err(),
                SequenceError::InvalidConstruction { length: 1 }
            );
        }
    }
}
