//! Host-facing adapter over [`quill_gap_buffer`]: signed-index
//! normalisation in the style of a scripting host's sequence protocol,
//! and textual rendering.
//!
//! Point indexes may be negative (counting from the end) and fail when
//! they still fall outside the sequence. Slice bounds are clamped to
//! `[0, len]` and an inverted range collapses to empty, so slicing
//! never fails on its own.

use std::fmt::{self, Write as _};

use quill_gap_buffer::{Element, Error as CoreError, GapBuffer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    #[error("sequence index {0} out of range")]
    IndexOutOfRange(isize),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Resolve a signed point index against a sequence of length `len`.
/// Negative indexes count from the end.
pub fn resolve_index(len: usize, index: isize) -> Option<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };

    (resolved < len).then_some(resolved)
}

/// Resolve signed slice bounds against a sequence of length `len`.
/// Omitted bounds mean the corresponding end; out-of-range bounds
/// clamp; an inverted range collapses to empty.
pub fn resolve_bounds(len: usize, start: Option<isize>, end: Option<isize>) -> (usize, usize) {
    let clamp = |bound: isize| -> usize {
        if bound < 0 {
            len.saturating_sub(bound.unsigned_abs())
        } else {
            (bound as usize).min(len)
        }
    };

    let start = start.map_or(0, clamp);
    let end = end.map_or(len, clamp);

    (start, end.max(start))
}

/// The element at signed index `index`.
pub fn item(buf: &GapBuffer, index: isize) -> Result<Element, SeqError> {
    let i = resolve_index(buf.len(), index).ok_or(SeqError::IndexOutOfRange(index))?;
    Ok(buf.get(i)?)
}

/// Overwrite the element at signed index `index`.
pub fn set_item(buf: &mut GapBuffer, index: isize, value: Element) -> Result<(), SeqError> {
    let i = resolve_index(buf.len(), index).ok_or(SeqError::IndexOutOfRange(index))?;
    buf.set(i, value)?;
    Ok(())
}

/// Delete the single element at signed index `index`.
pub fn del_item(buf: &mut GapBuffer, index: isize) -> Result<(), SeqError> {
    let i = resolve_index(buf.len(), index).ok_or(SeqError::IndexOutOfRange(index))?;
    buf.del_slice(i, i + 1)?;
    Ok(())
}

/// Copy the slice `[start, end)` out into a fresh buffer of the same
/// kind, with host slicing rules.
pub fn slice(buf: &GapBuffer, start: Option<isize>, end: Option<isize>) -> GapBuffer {
    let (a, b) = resolve_bounds(buf.len(), start, end);
    buf.retrieve(a, b).expect("clamped bounds are in range")
}

/// Replace the slice `[start, end)` with `src`, with host slicing
/// rules. Only a kind mismatch can fail.
pub fn assign_slice(
    buf: &mut GapBuffer,
    start: Option<isize>,
    end: Option<isize>,
    src: &GapBuffer,
) -> Result<(), SeqError> {
    let (a, b) = resolve_bounds(buf.len(), start, end);
    buf.set_slice(a, b, src)?;
    Ok(())
}

/// Delete the slice `[start, end)`, with host slicing rules.
pub fn remove_slice(buf: &mut GapBuffer, start: Option<isize>, end: Option<isize>) {
    let (a, b) = resolve_bounds(buf.len(), start, end);
    buf.del_slice(a, b).expect("clamped bounds are in range");
}

/// Renders a buffer the way the host shows it: byte and wide buffers as
/// the natural string of their elements, integer buffers as
/// `GapBuffer('i') [e0, e1, …]`.
pub struct Render<'a>(pub &'a GapBuffer);

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            GapBuffer::Byte(v) => f.write_str(&String::from_utf8_lossy(&v.to_vec())),
            GapBuffer::Wide(v) => {
                for &ch in v {
                    f.write_char(ch)?;
                }
                Ok(())
            }
            GapBuffer::Int(v) => {
                write!(f, "GapBuffer('{}') ", self.0.kind().code())?;
                f.debug_list().entries(v.iter()).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_gap_buffer::{Element, GapBuffer};

    use super::*;

    #[test]
    fn resolve_point_indexes() {
        assert_eq!(resolve_index(5, 0), Some(0));
        assert_eq!(resolve_index(5, 4), Some(4));
        assert_eq!(resolve_index(5, 5), None);
        assert_eq!(resolve_index(5, -1), Some(4));
        assert_eq!(resolve_index(5, -5), Some(0));
        assert_eq!(resolve_index(5, -6), None);
        assert_eq!(resolve_index(0, 0), None);
    }

    #[test]
    fn resolve_slice_bounds() {
        assert_eq!(resolve_bounds(5, None, None), (0, 5));
        assert_eq!(resolve_bounds(5, Some(1), Some(3)), (1, 3));
        assert_eq!(resolve_bounds(5, Some(-2), None), (3, 5));
        assert_eq!(resolve_bounds(5, Some(0), Some(100)), (0, 5));
        assert_eq!(resolve_bounds(5, Some(-100), Some(2)), (0, 2));
        // Inverted ranges collapse to empty.
        assert_eq!(resolve_bounds(5, Some(3), Some(1)), (3, 3));
    }

    #[test]
    fn items_with_negative_indexes() {
        let mut buf = GapBuffer::from(b"abc");

        assert_eq!(item(&buf, -1), Ok(Element::Byte(b'c')));
        assert_eq!(item(&buf, 3), Err(SeqError::IndexOutOfRange(3)));
        assert_eq!(item(&buf, -4), Err(SeqError::IndexOutOfRange(-4)));

        set_item(&mut buf, -2, Element::Byte(b'B')).unwrap();
        assert_eq!(buf, GapBuffer::from(b"aBc"));

        del_item(&mut buf, 1).unwrap();
        assert_eq!(buf, GapBuffer::from(b"ac"));
        del_item(&mut buf, -1).unwrap();
        assert_eq!(buf, GapBuffer::from(b"a"));
    }

    #[test]
    fn slices_clamp() {
        let buf = GapBuffer::from(b"abcd");

        assert_eq!(slice(&buf, Some(1), Some(3)), GapBuffer::from(b"bc"));
        assert_eq!(slice(&buf, None, None), GapBuffer::from(b"abcd"));
        assert_eq!(slice(&buf, Some(3), Some(1)), GapBuffer::from(b""));
        assert_eq!(slice(&buf, Some(-2), Some(100)), GapBuffer::from(b"cd"));
    }

    #[test]
    fn assign_and_remove_slices() {
        let mut buf = GapBuffer::from(b"abcde");

        assign_slice(&mut buf, Some(2), Some(4), &GapBuffer::from(b"!")).unwrap();
        assert_eq!(buf, GapBuffer::from(b"ab!e"));

        assert_eq!(
            assign_slice(&mut buf, None, None, &GapBuffer::from("oops")),
            Err(SeqError::Core(quill_gap_buffer::Error::KindMismatch {
                expected: quill_gap_buffer::Kind::Byte,
                found: quill_gap_buffer::Kind::Wide,
            }))
        );
        assert_eq!(buf, GapBuffer::from(b"ab!e"));

        remove_slice(&mut buf, None, None);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn render_byte_and_wide() {
        let buf = GapBuffer::from(b"The life of Brian");
        assert_eq!(Render(&buf).to_string(), "The life of Brian");

        let buf = GapBuffer::from("Mr Creosote");
        assert_eq!(Render(&buf).to_string(), "Mr Creosote");
    }

    #[test]
    fn render_int() {
        let buf = GapBuffer::from(&[1, 2, 3]);
        assert_eq!(Render(&buf).to_string(), "GapBuffer('i') [1, 2, 3]");

        let empty = GapBuffer::from(&[] as &[i32]);
        assert_eq!(Render(&empty).to_string(), "GapBuffer('i') []");
    }
}
