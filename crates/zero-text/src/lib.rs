//! Immutable text handles and fragment-list building for the zero debugger
//! frontend.
//!
//! This crate provides the string layer of the core, built on `zero-arena`:
//! - `chars` - byte classification for the line-oriented debugger protocol
//! - `Text` - immutable, arena-resident byte string named by a handle
//! - `TextList` - ordered fragment chain with deferred one-shot join

pub mod chars;

pub mod text;
pub use text::Text;

pub mod list;
pub use list::{JoinOptions, TextList};
