//! Bump arena with scoped rollback for the zero debugger frontend.
//!
//! This crate provides the allocation layer of the core:
//! - `Arena` - growable bump allocator that hands out offset handles
//! - `ArenaRef` - copyable handle naming an allocated byte range
//! - `Mark` - checkpoint token for scoped rollback
//! - `ArenaWriter` - piecewise construction of one contiguous range

pub mod arena;
pub use arena::{Arena, ArenaError, ArenaRef, Mark, DEFAULT_CAPACITY};

pub mod writer;
pub use writer::ArenaWriter;
