//! Allocation-aware container primitives.
//!
//! This crate provides the container substrate a host program builds on: a
//! growable dynamic array over opaque element handles, non-owning windowed
//! views into borrowed buffers, a packed bit vector, and line-terminator
//! stripping over byte views.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  slice()/slice_mut()  ┌──────────────────┐
//! │   array.rs   │──────────────────────▶│     slice.rs     │
//! │ (DynArray,   │                       │ (Slice, SliceMut,│
//! │  split)      │                       │  ByteSlice)      │
//! └──────────────┘                       └──────────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌──────────────┐                       ┌──────────────────┐
//! │ contracts.rs │                       │     line.rs      │
//! │ (debug-build │                       │ (strip_leading_  │
//! │  invariants) │                       │  line_terminator)│
//! └──────────────┘                       └──────────────────┘
//!
//! bits.rs (BitArray) stands alone.
//! ```
//!
//! The dynamic array owns and explicitly manages its backing storage;
//! amortized 1.5x growth is part of its contract, not an implementation
//! detail. Views alias the storage they borrow; writing through a
//! [`SliceMut`] writes into the owner's buffer, and the borrow checker
//! enforces the lifetime rules the aliasing design needs.
//!
//! # Error handling
//!
//! Out-of-bounds indexes, invalid ranges, and popping an empty array are
//! contract violations: every such operation panics immediately with a
//! message naming the index and the bound. Nothing is silently truncated
//! and nothing is deferred. [`contracts`] adds debug-build structural
//! checks on top.
//!
//! # Usage
//!
//! ```
//! use capsa::DynArray;
//!
//! let mut names: DynArray<String> = DynArray::new();
//! names.push("alpha".to_string()).push("beta".to_string());
//! names.insert(1, "between".to_string());
//!
//! let view = names.slice();
//! assert_eq!(view.get(1), &Some("between".to_string()));
//! assert_eq!(names.to_string(), "[alpha, between, beta]");
//! ```

// Module declarations
mod array;
mod bits;
pub mod contracts;
mod line;
mod slice;

// Re-exports for public API
pub use array::{split, DynArray};
pub use bits::BitArray;
pub use line::strip_leading_line_terminator;
pub use slice::{reverse, ByteSlice, Slice, SliceMut};
