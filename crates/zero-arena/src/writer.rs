//! Piecewise construction of one contiguous arena range.
//!
//! Bump allocation is sequential, so consecutive appends land adjacently.
//! [`ArenaWriter`] leans on that: it records the cursor when opened, appends
//! any number of pieces (external bytes or ranges already in the arena), and
//! on `finish` returns a single handle spanning everything written. This is
//! how multi-part strings are materialized without a size pre-pass.

use crate::arena::{Arena, ArenaRef};

/// Appends pieces to the arena and coalesces them into one range.
///
/// Borrows the arena mutably for the duration of the write, so no other
/// allocation can interleave and break adjacency.
pub struct ArenaWriter<'a> {
    arena: &'a mut Arena,
    start: usize,
}

impl Arena {
    /// Opens a writer at the current cursor.
    pub fn writer(&mut self) -> ArenaWriter<'_> {
        let start = self.len();
        ArenaWriter { arena: self, start }
    }
}

impl ArenaWriter<'_> {
    /// Pre-grows the buffer for a known total, so a sized write does at
    /// most one growth.
    pub fn reserve(&mut self, additional: usize) {
        self.arena.ensure(additional);
    }

    /// Appends external bytes.
    pub fn push_bytes(&mut self, data: &[u8]) {
        self.arena.alloc_bytes(data);
    }

    /// Appends a single byte.
    pub fn push_byte(&mut self, b: u8) {
        self.arena.alloc_bytes(&[b]);
    }

    /// Appends a copy of a range already held by the arena.
    ///
    /// # Panics
    ///
    /// Panics if `src` is stale.
    pub fn push_range(&mut self, src: ArenaRef) {
        self.arena.alloc_copy(src);
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.arena.len() - self.start
    }

    /// Closes the writer, returning one handle over everything written.
    pub fn finish(self) -> ArenaRef {
        let len = self.arena.len() - self.start;
        if len == 0 {
            return ArenaRef::EMPTY;
        }
        ArenaRef::span(self.start, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_coalesces_pieces() {
        let mut arena = Arena::new();
        let cmd = arena.alloc_bytes(b"-exec-continue");
        let mut w = arena.writer();
        w.push_range(cmd);
        w.push_bytes(b" --thread ");
        w.push_bytes(b"3");
        let line = w.finish();
        assert_eq!(arena.get(line), b"-exec-continue --thread 3");
    }

    #[test]
    fn test_writer_tracks_written() {
        let mut arena = Arena::new();
        let mut w = arena.writer();
        assert_eq!(w.written(), 0);
        w.push_bytes(b"abc");
        w.push_byte(0);
        assert_eq!(w.written(), 4);
    }

    #[test]
    fn test_empty_writer_finishes_empty() {
        let mut arena = Arena::new();
        arena.alloc(3);
        let w = arena.writer();
        assert!(w.finish().is_empty());
    }

    #[test]
    fn test_writer_reserve_survives_growth() {
        let mut arena = Arena::with_capacity(4).unwrap();
        let seed = arena.alloc_bytes(b"ab");
        let mut w = arena.writer();
        w.reserve(20_000);
        w.push_range(seed);
        w.push_bytes(&[b'x'; 20_000 - 2]);
        let r = w.finish();
        assert_eq!(r.len(), 20_000);
        assert_eq!(&arena.get(r)[..2], b"ab");
    }
}
