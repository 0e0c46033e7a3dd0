//! Ordered fragment chains with deferred concatenation.
//!
//! A [`TextList`] accumulates [`Text`] fragments with O(1) append and O(1)
//! remove-of-last, then materializes them into a single contiguous string on
//! demand. Nodes live in a backing vec and link by index, so the chain needs
//! no lifetime bookkeeping; popped nodes are abandoned in place and reclaimed
//! in bulk when the list is dropped, the same discipline the arena applies to
//! its bytes.

use zero_arena::Arena;

use crate::text::Text;

#[derive(Clone, Copy, Debug)]
struct TextNode {
    text: Text,
    prev: Option<u32>,
    next: Option<u32>,
}

/// Doubly linked chain of text fragments, index-linked into a backing vec.
///
/// Invariants: `total_len` equals the sum of the byte lengths of the
/// fragments currently in the chain, and `len == 0` exactly when both ends
/// are `None`.
#[derive(Clone, Debug, Default)]
pub struct TextList {
    nodes: Vec<TextNode>,
    front: Option<u32>,
    back: Option<u32>,
    len: usize,
    total_len: usize,
}

impl TextList {
    pub fn new() -> TextList {
        TextList::default()
    }

    /// Pre-sizes the backing vec for `n` fragments.
    pub fn with_capacity(n: usize) -> TextList {
        TextList {
            nodes: Vec::with_capacity(n),
            ..TextList::default()
        }
    }

    /// Fragment count.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Running sum of fragment byte lengths, maintained incrementally so
    /// [`TextList::join`] can size its output without re-scanning.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// First fragment, if any.
    pub fn front(&self) -> Option<Text> {
        self.front.map(|i| self.nodes[i as usize].text)
    }

    /// Last fragment, if any.
    pub fn back(&self) -> Option<Text> {
        self.back.map(|i| self.nodes[i as usize].text)
    }

    /// Appends a fragment at the tail. O(1).
    pub fn push(&mut self, text: Text) {
        let idx = self.nodes.len() as u32;
        self.nodes.push(TextNode {
            text,
            prev: self.back,
            next: None,
        });
        match self.back {
            Some(prev) => self.nodes[prev as usize].next = Some(idx),
            None => self.front = Some(idx),
        }
        self.back = Some(idx);
        self.len += 1;
        self.total_len += text.len();
    }

    /// Removes and returns the tail fragment. O(1); `None` on empty.
    ///
    /// The counters are updated on every removal, including the one that
    /// empties the list.
    pub fn pop(&mut self) -> Option<Text> {
        let idx = self.back?;
        let node = self.nodes[idx as usize];
        match node.prev {
            Some(prev) => {
                self.nodes[prev as usize].next = None;
                self.back = Some(prev);
            }
            None => {
                self.front = None;
                self.back = None;
            }
        }
        self.len -= 1;
        self.total_len -= node.text.len();
        Some(node.text)
    }

    /// Iterates fragments front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.front,
        }
    }

    /// Materializes the chain into one contiguous string.
    ///
    /// The logical segment sequence is `[prefix if non-empty] ++ fragments
    /// ++ [postfix if non-empty]`, joined by the separator: one separator
    /// between consecutive segments, never trailing. An empty list with
    /// empty affixes yields [`Text::EMPTY`] without allocating.
    pub fn join(&self, arena: &mut Arena, opts: &JoinOptions) -> Text {
        let segments = self.len
            + usize::from(!opts.prefix.is_empty())
            + usize::from(!opts.postfix.is_empty());
        if segments == 0 {
            return Text::EMPTY;
        }
        let sep = opts.separator;
        let total = self.total_len
            + opts.prefix.len()
            + opts.postfix.len()
            + sep.len() * (segments - 1);

        let mut w = arena.writer();
        w.reserve(total);
        let mut first = true;
        if !opts.prefix.is_empty() {
            w.push_range(opts.prefix.range());
            first = false;
        }
        for text in self.iter() {
            if !first {
                w.push_range(sep.range());
            }
            w.push_range(text.range());
            first = false;
        }
        if !opts.postfix.is_empty() {
            if !first {
                w.push_range(sep.range());
            }
            w.push_range(opts.postfix.range());
        }
        debug_assert_eq!(w.written(), total);
        Text::from_range(w.finish())
    }
}

/// Affixes and separator for [`TextList::join`]. Defaults to all empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct JoinOptions {
    pub prefix: Text,
    pub separator: Text,
    pub postfix: Text,
}

/// Front-to-back fragment iterator, created by [`TextList::iter`].
pub struct Iter<'a> {
    list: &'a TextList,
    cursor: Option<u32>,
}

impl Iterator for Iter<'_> {
    type Item = Text;

    fn next(&mut self) -> Option<Text> {
        let idx = self.cursor?;
        let node = &self.list.nodes[idx as usize];
        self.cursor = node.next;
        Some(node.text)
    }
}

impl<'a> IntoIterator for &'a TextList {
    type Item = Text;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
