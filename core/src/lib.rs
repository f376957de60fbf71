#![cfg_attr(not(test), no_std)]

//! Mutable sequences of real numbers behind one contract.
//!
//! [`NumberSequence`] is implemented by two interchangeable representations:
//!
//! - [`ArraySequence`] keeps the numbers in one contiguous buffer.
//! - [`LinkedSequence`] keeps them in a chain of owned nodes.
//!
//! Both hold at least two numbers at all times and give identical results for
//! identical calls.
//!
//! ```
//! use numseq_core::{NumberSequence, SequenceError, SequenceKind};
//!
//! let mut seq = SequenceKind::Linked.build(&[5.0, 1.0, 3.0]).unwrap();
//! assert_eq!(seq.upper_bound(), 5.0);
//! seq.insert(1, 9.0).unwrap();
//! assert_eq!(seq.to_string(), "5.0, 9.0, 1.0, 3.0");
//! seq.remove_at(0).unwrap();
//! seq.remove_at(0).unwrap();
//! assert_eq!(seq.remove_at(0), Err(SequenceError::MinimumLength));
//! ```

extern crate alloc;

pub mod array;
pub mod error;
pub mod linked;
pub mod script;
pub mod sequence;

pub use array::ArraySequence;
pub use error::SequenceError;
pub use linked::LinkedSequence;
pub use sequence::{MIN_LENGTH, NumberSequence, SequenceKind, UnknownKind};
