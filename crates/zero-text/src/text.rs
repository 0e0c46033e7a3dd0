//! Immutable arena-resident byte strings.
//!
//! A [`Text`] is a handle to a byte range inside an [`Arena`], never a
//! pointer: it cannot outlive the arena's data without tripping the bounds
//! check on resolution. All combining operations allocate their result
//! through the arena and leave their inputs untouched.

use serde::{Deserialize, Serialize};
use zero_arena::{Arena, ArenaRef};

use crate::chars;

/// Handle to an immutable byte string held by an arena.
///
/// `Copy` and cheap to pass around. Derived equality compares handles
/// (same range in the same arena); use [`Text::content_eq`] for byte
/// equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Text {
    range: ArenaRef,
}

impl Text {
    /// The empty string. Valid against any arena; never allocates.
    pub const EMPTY: Text = Text {
        range: ArenaRef::EMPTY,
    };

    /// Copies external bytes into the arena and returns their handle.
    ///
    /// Accepts both byte and string literals: `Text::intern(&mut a, "run")`.
    pub fn intern(arena: &mut Arena, bytes: impl AsRef<[u8]>) -> Text {
        Text {
            range: arena.alloc_bytes(bytes.as_ref()),
        }
    }

    pub(crate) fn from_range(range: ArenaRef) -> Text {
        Text { range }
    }

    /// The underlying arena range.
    pub fn range(self) -> ArenaRef {
        self.range
    }

    /// Length in bytes.
    #[inline]
    pub fn len(self) -> usize {
        self.range.len()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.range.is_empty()
    }

    /// Resolves the handle to its bytes.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale (its arena scope was rewound or reset).
    #[inline]
    pub fn bytes(self, arena: &Arena) -> &[u8] {
        arena.get(self.range)
    }

    /// Resolves to `&str` when the bytes are valid UTF-8.
    pub fn as_str(self, arena: &Arena) -> Option<&str> {
        std::str::from_utf8(self.bytes(arena)).ok()
    }

    /// Copies this string into a fresh range with an independent lifetime
    /// from whatever produced the original.
    pub fn duplicate(self, arena: &mut Arena) -> Text {
        Text {
            range: arena.alloc_copy(self.range),
        }
    }

    /// Concatenates `a ++ sep ++ b` into one contiguous range.
    pub fn join(arena: &mut Arena, a: Text, b: Text, sep: &[u8]) -> Text {
        let mut w = arena.writer();
        w.reserve(a.len() + sep.len() + b.len());
        w.push_range(a.range);
        w.push_bytes(sep);
        w.push_range(b.range);
        Text { range: w.finish() }
    }

    /// Duplicated copy of the **inclusive** byte range `[begin, end]`.
    ///
    /// An inverted range (`begin > end`) yields [`Text::EMPTY`] without
    /// allocating; this is how the strip family reports an all-whitespace
    /// result.
    ///
    /// # Panics
    ///
    /// Panics if `end >= self.len()`.
    pub fn substring(self, arena: &mut Arena, begin: usize, end: usize) -> Text {
        if begin > end {
            return Text::EMPTY;
        }
        assert!(
            end < self.len(),
            "substring end {end} out of bounds for text of length {}",
            self.len()
        );
        let sub = self.range.slice(begin, end - begin + 1);
        Text {
            range: arena.alloc_copy(sub),
        }
    }

    /// Copy with leading and trailing whitespace removed. Empty input is
    /// returned as-is; all-whitespace input yields [`Text::EMPTY`]. Neither
    /// case allocates.
    pub fn strip(self, arena: &mut Arena) -> Text {
        if self.is_empty() {
            return self;
        }
        let bytes = self.bytes(arena);
        let Some(begin) = bytes.iter().position(|&b| !chars::is_space(b)) else {
            return Text::EMPTY;
        };
        let end = bytes
            .iter()
            .rposition(|&b| !chars::is_space(b))
            .unwrap_or(begin);
        self.substring(arena, begin, end)
    }

    /// Copy with leading whitespace removed.
    pub fn lstrip(self, arena: &mut Arena) -> Text {
        if self.is_empty() {
            return self;
        }
        let bytes = self.bytes(arena);
        let Some(begin) = bytes.iter().position(|&b| !chars::is_space(b)) else {
            return Text::EMPTY;
        };
        let end = self.len() - 1;
        self.substring(arena, begin, end)
    }

    /// Copy with trailing whitespace removed.
    pub fn rstrip(self, arena: &mut Arena) -> Text {
        if self.is_empty() {
            return self;
        }
        let bytes = self.bytes(arena);
        let Some(end) = bytes.iter().rposition(|&b| !chars::is_space(b)) else {
            return Text::EMPTY;
        };
        self.substring(arena, 0, end)
    }

    /// Byte equality, short-circuiting on length.
    pub fn content_eq(self, other: Text, arena: &Arena) -> bool {
        if self.len() != other.len() {
            return false;
        }
        arena.get(self.range) == arena.get(other.range)
    }

    /// Copy with a NUL terminator appended, for handing to C-string
    /// consumers: `len() + 1` bytes, terminator at index `len()`.
    pub fn to_nul_terminated(self, arena: &mut Arena) -> Text {
        let mut w = arena.writer();
        w.reserve(self.len() + 1);
        w.push_range(self.range);
        w.push_byte(0);
        Text { range: w.finish() }
    }
}

impl Default for Text {
    fn default() -> Text {
        Text::EMPTY
    }
}
