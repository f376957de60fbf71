//! Sequence stored as a chain of owned nodes.
//!
//! ```text
//! LinkedSequence
//!   head ──▶ Node { 5.0 } ──▶ Node { 1.0 } ──▶ Node { 3.0 } ──▶ None
//! ```
//!
//! The sequence owns the first node and every node owns its successor.
//! Random access walks the chain from `head`. The length is cached and
//! updated by every successful mutation, so positional operations check
//! bounds before walking.

use core::{fmt, mem};

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{Result, SequenceError};
use crate::sequence::{self, MIN_LENGTH, NumberSequence};

struct Node {
    number: f64,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(number: f64, next: Option<Box<Node>>) -> Box<Node> {
        Box::new(Node { number, next })
    }
}

pub struct LinkedSequence {
    // A sequence is never empty, so the first node is held directly.
    head: Box<Node>,
    len: usize,
}

static_assertions::assert_impl_all!(LinkedSequence: Send, Sync, Clone);

impl LinkedSequence {
    /// Builds a chain holding `numbers`, in order.
    ///
    /// Fails with [`SequenceError::InvalidConstruction`] for fewer than two
    /// numbers.
    pub fn new(numbers: &[f64]) -> Result<Self> {
        let [first, rest @ ..] = numbers else {
            return Err(SequenceError::InvalidConstruction { length: 0 });
        };
        if rest.is_empty() {
            return Err(SequenceError::InvalidConstruction { length: 1 });
        }
        tracing::trace!(length = numbers.len(), "Building linked sequence");

        let mut head = Node::new(*first, None);
        let mut tail = &mut head.next;
        for &number in rest {
            let node = tail.insert(Node::new(number, None));
            tail = &mut node.next;
        }
        Ok(Self {
            head,
            len: numbers.len(),
        })
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: Some(&*self.head),
        }
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.len {
            Ok(())
        } else {
            Err(SequenceError::OutOfRange {
                position,
                length: self.len,
            })
        }
    }

    fn node(&self, position: usize) -> Option<&Node> {
        let mut node: &Node = &self.head;
        for _ in 0..position {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    fn node_mut(&mut self, position: usize) -> Option<&mut Node> {
        let mut node: &mut Node = &mut self.head;
        for _ in 0..position {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    fn out_of_range(&self, position: usize) -> SequenceError {
        SequenceError::OutOfRange {
            position,
            length: self.len,
        }
    }
}

impl NumberSequence for LinkedSequence {
    fn len(&self) -> usize {
        self.len
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
        self.node(position)
            .map(|node| node.number)
            .ok_or_else(|| self.out_of_range(position))
    }

    fn position_of(&self, number: f64) -> Option<usize> {
        self.iter().position(|n| n == number)
    }

    fn is_increasing(&self) -> bool {
        sequence::pairwise(self.iter(), |left, right| left < right)
    }

    fn is_decreasing(&self) -> bool {
        sequence::pairwise(self.iter(), |left, right| left > right)
    }

    fn contains(&self, number: f64) -> bool {
        self.iter().any(|n| n == number)
    }

    fn add(&mut self, number: f64) {
        let mut tail = &mut self.head;
        loop {
            match tail.next {
                Some(ref mut next) => tail = next,
                None => break,
            }
        }
        tail.next = Some(Node::new(number, None));
        self.len += 1;
    }

    fn insert(&mut self, position: usize, number: f64) -> Result<()> {
        self.check_position(position)?;
        if position == 0 {
            let old_head = mem::replace(&mut self.head, Node::new(number, None));
            self.head.next = Some(old_head);
        } else {
            let out_of_range = self.out_of_range(position);
            let Some(predecessor) = self.node_mut(position - 1) else {
                return Err(out_of_range);
            };
            let successor = predecessor.next.take();
            predecessor.next = Some(Node::new(number, successor));
        }
        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, position: usize) -> Result<f64> {
        if self.len <= MIN_LENGTH {
            tracing::debug!(position, "Refusing to shrink a two-element sequence");
            return Err(SequenceError::MinimumLength);
        }
        self.check_position(position)?;

        let out_of_range = self.out_of_range(position);
        let removed = if position == 0 {
            let Some(successor) = self.head.next.take() else {
                return Err(out_of_range);
            };
            mem::replace(&mut self.head, successor)
        } else {
            let Some(predecessor) = self.node_mut(position - 1) else {
                return Err(out_of_range);
            };
            let Some(mut removed) = predecessor.next.take() else {
                return Err(out_of_range);
            };
            predecessor.next = removed.next.take();
            removed
        };
        self.len -= 1;
        Ok(removed.number)
    }

    fn to_vec(&self) -> Vec<f64> {
        let mut numbers = Vec::with_capacity(self.len);
        numbers.extend(self.iter());
        numbers
    }
}

impl Clone for LinkedSequence {
    fn clone(&self) -> Self {
        // Rebuild the chain iteratively; the derived impl would recurse once
        // per node.
        let mut head = Node::new(self.head.number, None);
        let mut tail = &mut head.next;
        for number in self.iter().skip(1) {
            let node = tail.insert(Node::new(number, None));
            tail = &mut node.next;
        }
        Self {
            head,
            len: self.len,
        }
    }
}

impl Drop for LinkedSequence {
    fn drop(&mut self) {
        let mut next = self.head.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl PartialEq for LinkedSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for LinkedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sequence::write_numbers(f, self.iter())
    }
}

impl TryFrom<&[f64]> for LinkedSequence {
    type Error = SequenceError;

    fn try_from(numbers: &[f64]) -> Result<Self> {
        Self::new(numbers)
    }
}

impl TryFrom<Vec<f64>> for LinkedSequence {
    type Error = SequenceError;

    fn try_from(numbers: Vec<f64>) -> Result<Self> {
        Self::new(&numbers)
    }
}

/// Iterator over the numbers of a [`LinkedSequence`], front to back.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.number)
    }
}

#[cfg(test)]
#[path = "linked_test.rs"]
mod linked_test;
