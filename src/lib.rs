//! numseq - mutable number sequences with interchangeable representations
//!
//! # Overview
//!
//! A [`NumberSequence`] holds at least two real numbers and supports reads,
//! searches, bounds, monotonicity checks and positional mutation. Two
//! representations implement it:
//!
//! - [`ArraySequence`], a contiguous buffer
//! - [`LinkedSequence`], a chain of owned nodes
//!
//! The [`script`] module describes calls as text so the same run can be
//! replayed against both and compared.
//!
//! # Quick Start
//!
//! ```
//! use numseq::{NumberSequence, SequenceKind, script};
//!
//! let numbers = script::parse_numbers("5.0, 1.0, 3.0").unwrap();
//! let ops = script::parse("insert 1 9\nremove 0\nat 2\nshow").unwrap();
//!
//! let runs = script::run_all(&ops, &numbers, &Default::default()).unwrap();
//! let [(_, array), (_, linked)] = &runs[..] else { unreachable!() };
//! assert_eq!(array, linked);
//! assert_eq!(array.to_string(), "ok\n5.0\n3.0\n9.0, 1.0, 3.0\n");
//! ```
//!
//! # Synonyms
//!
//! The [`synonyms`] module is an unrelated utility for word/synonym files
//! that ships alongside the sequences.

// Error rendering utilities
pub mod error;
pub mod error_renderer;
pub use error::Error;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from numseq_core
pub use numseq_core::script;
pub use numseq_core::{
    ArraySequence, LinkedSequence, MIN_LENGTH, NumberSequence, SequenceError, SequenceKind,
    UnknownKind,
};

pub use numseq_synonyms as synonyms;
