//! Lenient UTF-8 decoding of haystacks.
//!
//! Haystacks are arbitrary bytes. Well-formed UTF-8 sequences decode to their
//! scalar values. A malformed byte is skipped silently and the next byte is
//! re-read as a potential lead byte, so decoding resynchronizes instead of
//! failing.

/// Decodes the next well-formed scalar value at or after `*pos` and advances
/// the cursor past it.
///
/// Malformed bytes before that scalar value are skipped one at a time.
/// Returns [`None`] once the end of `bytes` is reached; the cursor is then at
/// the end of `bytes` unless it started beyond it.
///
/// # Examples
///
/// ```
/// use acscan::decoder::decode_next;
///
/// let bytes = b"a\xffb\xe3";
/// let mut pos = 0;
/// assert_eq!(Some('a'), decode_next(bytes, &mut pos));
/// assert_eq!(Some('b'), decode_next(bytes, &mut pos));
/// assert_eq!(3, pos);
/// assert_eq!(None, decode_next(bytes, &mut pos));
/// assert_eq!(4, pos);
/// ```
#[inline(always)]
pub fn decode_next(bytes: &[u8], pos: &mut usize) -> Option<char> {
    next_sequence(bytes, pos).map(|(_, c)| c)
}

/// Same as [`decode_next`], also returning the offset at which the decoded
/// scalar value starts.
#[inline(always)]
fn next_sequence(bytes: &[u8], pos: &mut usize) -> Option<(usize, char)> {
    while *pos < bytes.len() {
        let start = *pos;
        match decode_sequence(bytes, start) {
            Some((c, len)) => {
                *pos += len;
                return Some((start, c));
            }
            None => *pos += 1,
        }
    }
    None
}

/// Decodes one sequence at `start`, returning the scalar value and its length
/// in bytes, or [`None`] if the sequence is malformed.
#[inline(always)]
fn decode_sequence(bytes: &[u8], start: usize) -> Option<(char, usize)> {
    let first = bytes[start];
    let (len, min, init) = match first {
        0x00..=0x7f => return Some((char::from(first), 1)),
        0xc2..=0xdf => (2, 0x80, u32::from(first & 0x1f)),
        0xe0..=0xef => (3, 0x800, u32::from(first & 0x0f)),
        0xf0..=0xf4 => (4, 0x10000, u32::from(first & 0x07)),
        // Stray continuation bytes, overlong leads, and bytes beyond U+10FFFF.
        _ => return None,
    };
    let tail = bytes.get(start + 1..start + len)?;
    let mut u = init;
    for &b in tail {
        if b & 0xc0 != 0x80 {
            return None;
        }
        u = u << 6 | u32::from(b & 0x3f);
    }
    if u < min {
        return None;
    }
    // Rejects surrogates and values above U+10FFFF.
    char::from_u32(u).map(|c| (c, len))
}

/// Iterator over `(start, end, char)` triples of a byte haystack.
///
/// Created by [`decode_indices`].
#[derive(Clone, Debug)]
pub struct DecodeIter<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for DecodeIter<'a> {
    type Item = (usize, usize, char);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let (start, c) = next_sequence(self.bytes, &mut self.pos)?;
        Some((start, self.pos, c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.bytes.len() - self.pos))
    }
}

impl core::iter::FusedIterator for DecodeIter<'_> {}

/// Returns an iterator decoding `bytes` leniently, with byte offsets.
///
/// Skipped bytes belong to no item, so the start of an item can be greater
/// than the end of the previous one.
///
/// # Examples
///
/// ```
/// use acscan::decoder::decode_indices;
///
/// let decoded: Vec<_> = decode_indices(b"a\x80\xc3\xa9").collect();
/// assert_eq!(vec![(0, 1, 'a'), (2, 4, 'é')], decoded);
/// ```
pub fn decode_indices(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter { bytes, pos: 0 }
}
