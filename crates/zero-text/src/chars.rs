//! Byte classification for the debugger's line-oriented text protocol.
//!
//! Every predicate is total over the full byte range, case-sensitive, and
//! locale-independent: the protocol is ASCII, so these are plain range
//! checks with no tables.

/// `A`..=`Z`.
#[inline]
pub const fn is_alpha_upper(b: u8) -> bool {
    b >= b'A' && b <= b'Z'
}

/// `a`..=`z`.
#[inline]
pub const fn is_alpha_lower(b: u8) -> bool {
    b >= b'a' && b <= b'z'
}

/// ASCII letter of either case.
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    is_alpha_upper(b) || is_alpha_lower(b)
}

/// `0`..=`9`.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b >= b'0' && b <= b'9'
}

/// Fixed allow-list of the punctuation the protocol uses.
#[inline]
pub const fn is_symbol(b: u8) -> bool {
    matches!(
        b,
        b'~' | b'!'
            | b'$'
            | b'%'
            | b'^'
            | b'&'
            | b'*'
            | b'-'
            | b'='
            | b'+'
            | b'<'
            | b'.'
            | b'>'
            | b'/'
            | b'?'
            | b'|'
            | b'\\'
            | b'{'
            | b'}'
            | b'('
            | b')'
            | b'['
            | b']'
            | b'#'
            | b','
            | b';'
            | b':'
            | b'@'
    )
}

/// Space, CR, LF, tab, form feed, vertical tab.
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\n' | b'\t' | 0x0c | 0x0b)
}

/// Uppercases an ASCII letter; every other byte passes through.
#[inline]
pub const fn to_upper(b: u8) -> u8 {
    if is_alpha_lower(b) { b - b'a' + b'A' } else { b }
}

/// Lowercases an ASCII letter; every other byte passes through.
#[inline]
pub const fn to_lower(b: u8) -> u8 {
    if is_alpha_upper(b) { b - b'A' + b'a' } else { b }
}

/// Length of a NUL-terminated byte sequence: bytes before the first NUL,
/// or the whole slice when no terminator is present. Empty input is 0.
#[inline]
pub fn cstr_len(bytes: &[u8]) -> usize {
    memchr::memchr(0, bytes).unwrap_or(bytes.len())
}
