//! Bump allocation with offset handles.
//!
//! The arena owns one contiguous byte buffer and serves allocations by
//! advancing a cursor. Individual allocations are never freed; the whole
//! region is released at once (`reset`) or rolled back to a checkpoint
//! (`mark` / `rewind`). Allocations are named by [`ArenaRef`] offset
//! handles rather than pointers, so buffer growth never invalidates them —
//! only a reset or rewind past a handle's range does, and resolving such a
//! stale handle panics on the bounds check instead of reading freed data.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Buffer capacity used by [`Arena::new`] (4 KiB).
///
/// Consumers that know their working-set size (one scratch arena per
/// debugger request, one per frame) should size the arena explicitly with
/// [`Arena::with_capacity`] instead.
pub const DEFAULT_CAPACITY: usize = 4 * 1024;

/// Error returned when the arena cannot obtain its buffer.
///
/// Construction is the only fallible operation. Growth during allocation
/// goes through the global allocator's abort-on-OOM path, which matches the
/// fatal-on-allocation-failure contract of the rest of the core.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("failed to reserve {requested} bytes for arena buffer")]
    OutOfMemory { requested: usize },
}

/// Handle to a byte range allocated from an [`Arena`].
///
/// Small and `Copy`; does not borrow the arena. The caller must only
/// resolve it against the arena it came from, and only while the range is
/// still live (not reset or rewound away). Derived equality is handle
/// identity, not content equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArenaRef {
    off: u32,
    len: u32,
}

impl ArenaRef {
    /// The zero-length handle. Resolves to an empty slice on any arena.
    pub const EMPTY: ArenaRef = ArenaRef { off: 0, len: 0 };

    pub(crate) fn span(off: usize, len: usize) -> ArenaRef {
        ArenaRef {
            off: off as u32,
            len: len as u32,
        }
    }

    /// Offset of the first byte.
    #[inline]
    pub fn off(self) -> usize {
        self.off as usize
    }

    /// Length of the range in bytes.
    #[inline]
    pub fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// End offset (exclusive).
    #[inline]
    pub fn end(self) -> usize {
        self.off() + self.len()
    }

    /// Narrows the handle to `len` bytes starting at `start` (relative to
    /// this range).
    ///
    /// # Panics
    ///
    /// Panics if the narrowed range does not lie within this one.
    pub fn slice(self, start: usize, len: usize) -> ArenaRef {
        assert!(
            start + len <= self.len(),
            "sub-range {start}+{len} outside handle of length {}",
            self.len()
        );
        ArenaRef {
            off: self.off + start as u32,
            len: len as u32,
        }
    }
}

/// Checkpoint token for scoped rollback.
///
/// Created by [`Arena::mark`], consumed by [`Arena::rewind`]. Scopes must
/// be closed in reverse creation order; the arena does not detect
/// violations, exactly like the discipline it imposes on resets.
#[derive(Clone, Copy, Debug)]
#[must_use = "a mark that is never rewound leaks the scope's allocations into the enclosing lifetime"]
pub struct Mark {
    offset: usize,
}

/// Growable bump allocator.
///
/// The cursor is the length of the owned buffer; allocation appends and
/// returns the range it covered as an [`ArenaRef`]. When a request does not
/// fit, capacity doubles until it does — earlier offsets are preserved, so
/// growth is invisible to handle holders.
///
/// Not synchronized: one logical owner at a time, enforced by the `&mut`
/// receivers on every mutating operation.
pub struct Arena {
    bytes: Vec<u8>,
}

impl Arena {
    /// Creates an arena with [`DEFAULT_CAPACITY`].
    pub fn new() -> Arena {
        trace!(capacity = DEFAULT_CAPACITY, "arena created");
        Arena {
            bytes: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Creates an arena with at least `capacity` bytes reserved.
    ///
    /// This is the only fallible entry point: reservation failure is
    /// reported as [`ArenaError::OutOfMemory`] so the embedding layer can
    /// decide how to die.
    pub fn with_capacity(capacity: usize) -> Result<Arena, ArenaError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| ArenaError::OutOfMemory {
                requested: capacity,
            })?;
        trace!(capacity, "arena created");
        Ok(Arena { bytes })
    }

    /// Current cursor position: total live bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Current buffer capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Grows the buffer so `additional` more bytes fit, doubling capacity
    /// until the request does. Offsets of live ranges are unaffected.
    pub(crate) fn ensure(&mut self, additional: usize) {
        let needed = self.bytes.len() + additional;
        if needed > self.bytes.capacity() {
            let mut target = self.bytes.capacity().max(DEFAULT_CAPACITY);
            while target < needed {
                target *= 2;
            }
            debug!(
                old_capacity = self.bytes.capacity(),
                new_capacity = target,
                "arena grew"
            );
            self.bytes.reserve_exact(target - self.bytes.len());
        }
    }

    /// Allocates `len` zero-filled bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0: a zero-length allocation is a caller bug, not
    /// a runtime condition. Use [`ArenaRef::EMPTY`] for empty ranges.
    pub fn alloc(&mut self, len: usize) -> ArenaRef {
        assert!(len > 0, "zero-length arena allocation");
        let off = self.bytes.len();
        self.checked_end(off + len);
        self.ensure(len);
        self.bytes.resize(off + len, 0);
        ArenaRef {
            off: off as u32,
            len: len as u32,
        }
    }

    /// Copies external bytes into the arena. Empty input yields
    /// [`ArenaRef::EMPTY`] without allocating.
    pub fn alloc_bytes(&mut self, data: &[u8]) -> ArenaRef {
        if data.is_empty() {
            return ArenaRef::EMPTY;
        }
        let off = self.bytes.len();
        self.checked_end(off + data.len());
        self.ensure(data.len());
        self.bytes.extend_from_slice(data);
        ArenaRef {
            off: off as u32,
            len: data.len() as u32,
        }
    }

    /// Duplicates a range already held by this arena.
    ///
    /// # Panics
    ///
    /// Panics if `src` is stale (extends past the cursor).
    pub fn alloc_copy(&mut self, src: ArenaRef) -> ArenaRef {
        self.check_live(src);
        if src.is_empty() {
            return ArenaRef::EMPTY;
        }
        let off = self.bytes.len();
        self.checked_end(off + src.len());
        self.ensure(src.len());
        self.bytes.extend_from_within(src.off()..src.end());
        ArenaRef {
            off: off as u32,
            len: src.len,
        }
    }

    /// Resolves a handle to its bytes.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[inline]
    pub fn get(&self, r: ArenaRef) -> &[u8] {
        self.check_live(r);
        &self.bytes[r.off()..r.end()]
    }

    /// Resolves a handle to its bytes, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[inline]
    pub fn get_mut(&mut self, r: ArenaRef) -> &mut [u8] {
        self.check_live(r);
        &mut self.bytes[r.off()..r.end()]
    }

    /// Releases every allocation at once: cursor back to 0, capacity
    /// retained, memory not overwritten. Idempotent.
    pub fn reset(&mut self) {
        trace!(released = self.bytes.len(), "arena reset");
        self.bytes.clear();
    }

    /// Opens a rollback scope at the current cursor.
    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.bytes.len(),
        }
    }

    /// Closes a rollback scope: everything allocated since the mark is
    /// released for reuse. Handles issued inside the scope become stale.
    pub fn rewind(&mut self, mark: Mark) {
        trace!(
            released = self.bytes.len().saturating_sub(mark.offset),
            "arena rewound"
        );
        self.bytes.truncate(mark.offset);
    }

    /// Runs `f` inside a rollback scope, rewinding on every exit path.
    ///
    /// Handles allocated inside the scope must not escape through the
    /// return value; resolving one afterwards panics as stale.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Arena) -> R) -> R {
        let mark = self.mark();
        let out = f(self);
        self.rewind(mark);
        out
    }

    fn checked_end(&self, end: usize) {
        assert!(
            end <= u32::MAX as usize,
            "arena range end {end} exceeds the u32 offset space"
        );
    }

    fn check_live(&self, r: ArenaRef) {
        assert!(
            r.end() <= self.bytes.len(),
            "stale arena handle: range {}..{} but cursor is {}",
            r.off(),
            r.end(),
            self.bytes.len()
        );
    }
}

impl Default for Arena {
    fn default() -> Arena {
        Arena::new()
    }
}
