use std::cmp::Ordering;
use std::{fmt, mem};

use crate::error::{Error, Result};
use crate::vec::GapVec;

/// The element variant of a buffer, fixed at construction.
///
/// The derived ordering (`Byte < Wide < Int`) is the tie-break used when
/// buffers of different kinds are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Byte,
    Wide,
    Int,
}

impl Kind {
    /// Octets per element.
    pub fn item_size(self) -> usize {
        match self {
            Kind::Byte => mem::size_of::<u8>(),
            Kind::Wide => mem::size_of::<char>(),
            Kind::Int => mem::size_of::<i32>(),
        }
    }

    /// One-letter tag used by textual renderings.
    pub fn code(self) -> char {
        match self {
            Kind::Byte => 'b',
            Kind::Wide => 'w',
            Kind::Int => 'i',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Byte => "byte",
            Kind::Wide => "wide",
            Kind::Int => "int",
        })
    }
}

/// A single value of one of the element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Byte(u8),
    Wide(char),
    Int(i32),
}

impl Element {
    pub fn kind(self) -> Kind {
        match self {
            Element::Byte(_) => Kind::Byte,
            Element::Wide(_) => Kind::Wide,
            Element::Int(_) => Kind::Int,
        }
    }
}

impl PartialOrd for Element {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Element::Byte(a), Element::Byte(b)) => a.cmp(b),
            (Element::Wide(a), Element::Wide(b)) => a.cmp(b),
            (Element::Int(a), Element::Int(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

/// A gap buffer of one of three element kinds: octets, wide characters
/// (Unicode scalar values), or fixed-width integers.
///
/// The kind is fixed by the seed the buffer is constructed from. Every
/// operation taking a foreign sequence or element checks kind
/// compatibility and fails with [`Error::KindMismatch`] when it differs.
/// Failed operations leave the buffer unchanged.
#[derive(Clone, Debug)]
pub enum GapBuffer {
    Byte(GapVec<u8>),
    Wide(GapVec<char>),
    Int(GapVec<i32>),
}

/// Expands the same body once per variant; each arm sees its own typed
/// engine.
macro_rules! dispatch {
    ($buf:expr, $v:pat => $body:expr) => {
        match $buf {
            GapBuffer::Byte($v) => $body,
            GapBuffer::Wide($v) => $body,
            GapBuffer::Int($v) => $body,
        }
    };
}

impl GapBuffer {
    /// An empty buffer of the given kind.
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Byte => GapBuffer::Byte(GapVec::new()),
            Kind::Wide => GapBuffer::Wide(GapVec::new()),
            Kind::Int => GapBuffer::Int(GapVec::new()),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            GapBuffer::Byte(_) => Kind::Byte,
            GapBuffer::Wide(_) => Kind::Wide,
            GapBuffer::Int(_) => Kind::Int,
        }
    }

    /// Octets per element.
    #[inline]
    pub fn item_size(&self) -> usize {
        self.kind().item_size()
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total element slots allocated, live and gap together.
    #[inline]
    pub fn capacity(&self) -> usize {
        dispatch!(self, v => v.capacity())
    }

    #[inline]
    pub fn gap_len(&self) -> usize {
        dispatch!(self, v => v.gap_len())
    }

    #[inline]
    pub fn grow_size(&self) -> usize {
        dispatch!(self, v => v.grow_size())
    }

    /// The element at logical index `index`.
    pub fn get(&self, index: usize) -> Result<Element> {
        self.check_index(index)?;

        Ok(match self {
            GapBuffer::Byte(v) => Element::Byte(v[index]),
            GapBuffer::Wide(v) => Element::Wide(v[index]),
            GapBuffer::Int(v) => Element::Int(v[index]),
        })
    }

    /// Overwrite the element at logical index `index` in place. The gap
    /// does not move.
    pub fn set(&mut self, index: usize, value: Element) -> Result<()> {
        self.check_index(index)?;

        match (self, value) {
            (GapBuffer::Byte(v), Element::Byte(x)) => v[index] = x,
            (GapBuffer::Wide(v), Element::Wide(x)) => v[index] = x,
            (GapBuffer::Int(v), Element::Int(x)) => v[index] = x,
            (buf, value) => {
                return Err(Error::KindMismatch {
                    expected: buf.kind(),
                    found: value.kind(),
                })
            }
        }

        Ok(())
    }

    /// Copy the logical range `[start, end)` into a freshly-owned buffer
    /// of the same kind. Storage is not shared.
    pub fn retrieve(&self, start: usize, end: usize) -> Result<GapBuffer> {
        self.check_range(start, end)?;

        Ok(match self {
            GapBuffer::Byte(v) => GapBuffer::Byte(v.slice(start, end)),
            GapBuffer::Wide(v) => GapBuffer::Wide(v.slice(start, end)),
            GapBuffer::Int(v) => GapBuffer::Int(v.slice(start, end)),
        })
    }

    /// Replace the logical range `[start, end)` with the contents of
    /// `src`. Covers insertion (`start == end`), replacement, and
    /// deletion (`src` empty) uniformly.
    pub fn set_slice(&mut self, start: usize, end: usize, src: &GapBuffer) -> Result<()> {
        self.check_range(start, end)?;

        match (self, src) {
            (GapBuffer::Byte(dst), GapBuffer::Byte(src)) => splice_parts(dst, start, end, src),
            (GapBuffer::Wide(dst), GapBuffer::Wide(src)) => splice_parts(dst, start, end, src),
            (GapBuffer::Int(dst), GapBuffer::Int(src)) => splice_parts(dst, start, end, src),
            (dst, src) => {
                return Err(Error::KindMismatch {
                    expected: dst.kind(),
                    found: src.kind(),
                })
            }
        }

        Ok(())
    }

    /// Delete the logical range `[start, end)`.
    pub fn del_slice(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        dispatch!(self, v => v.splice(start, end, &[]));
        Ok(())
    }

    /// Insert the contents of `src` before logical index `at`.
    pub fn insert(&mut self, at: usize, src: &GapBuffer) -> Result<()> {
        self.set_slice(at, at, src)
    }

    /// Append the contents of `src`.
    pub fn extend(&mut self, src: &GapBuffer) -> Result<()> {
        self.insert(self.len(), src)
    }

    /// Add `delta` to every element in `[start, end)`, wrapping at the
    /// element width. Int buffers only. Operates in place; the gap does
    /// not move.
    pub fn increment(&mut self, start: usize, end: usize, delta: i32) -> Result<()> {
        self.check_range(start, end)?;

        match self {
            GapBuffer::Int(v) => {
                let (a, b) = v.range_parts_mut(start, end);
                for x in a.iter_mut().chain(b.iter_mut()) {
                    *x = x.wrapping_add(delta);
                }
                Ok(())
            }
            other => Err(Error::KindMismatch {
                expected: Kind::Int,
                found: other.kind(),
            }),
        }
    }

    /// A freshly-owned buffer holding `self` followed by `other`.
    pub fn concat(&self, other: &GapBuffer) -> Result<GapBuffer> {
        match (self, other) {
            (GapBuffer::Byte(a), GapBuffer::Byte(b)) => Ok(GapBuffer::Byte(a.concat(b))),
            (GapBuffer::Wide(a), GapBuffer::Wide(b)) => Ok(GapBuffer::Wide(a.concat(b))),
            (GapBuffer::Int(a), GapBuffer::Int(b)) => Ok(GapBuffer::Int(a.concat(b))),
            _ => Err(Error::KindMismatch {
                expected: self.kind(),
                found: other.kind(),
            }),
        }
    }

    /// A freshly-owned buffer holding `count` copies of `self` end to
    /// end. A non-positive count yields an empty buffer.
    pub fn repeat(&self, count: isize) -> GapBuffer {
        let count = count.max(0) as usize;

        match self {
            GapBuffer::Byte(v) => GapBuffer::Byte(v.repeat(count)),
            GapBuffer::Wide(v) => GapBuffer::Wide(v.repeat(count)),
            GapBuffer::Int(v) => GapBuffer::Int(v.repeat(count)),
        }
    }

    /// Empty the buffer, retaining the allocation.
    pub fn clear(&mut self) {
        dispatch!(self, v => v.clear());
    }

    /// Shrink the allocation to exactly fit the logical content and
    /// reset the growth quantum.
    pub fn slim(&mut self) {
        dispatch!(self, v => v.slim());
    }

    /// Slide the gap past the last element and expose the whole logical
    /// sequence as one contiguous read-only run.
    ///
    /// The view borrows the buffer, so mutation is impossible until it
    /// is released.
    pub fn view(&mut self) -> View<'_> {
        match self {
            GapBuffer::Byte(v) => View::Byte(v.make_contiguous()),
            GapBuffer::Wide(v) => View::Wide(v.make_contiguous()),
            GapBuffer::Int(v) => View::Int(v.make_contiguous()),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::OutOfRange { index, len })
        }
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        let len = self.len();
        if end > len {
            Err(Error::OutOfRange { index: end, len })
        } else if start > end {
            Err(Error::OutOfRange { index: start, len })
        } else {
            Ok(())
        }
    }
}

fn splice_parts<T: Copy>(dst: &mut GapVec<T>, start: usize, end: usize, src: &GapVec<T>) {
    let (a, b) = (src.front(), src.back());
    dst.splice(start, end, a);
    // The gap is already parked right after `a`, so this one is cheap.
    dst.splice(start + a.len(), start + a.len(), b);
}

impl PartialEq for GapBuffer {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GapBuffer::Byte(a), GapBuffer::Byte(b)) => a == b,
            (GapBuffer::Wide(a), GapBuffer::Wide(b)) => a == b,
            (GapBuffer::Int(a), GapBuffer::Int(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for GapBuffer {}

impl PartialOrd for GapBuffer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GapBuffer {
    /// Lexicographic within a kind; buffers of different kinds order by
    /// their kind tag.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (GapBuffer::Byte(a), GapBuffer::Byte(b)) => a.cmp(b),
            (GapBuffer::Wide(a), GapBuffer::Wide(b)) => a.cmp(b),
            (GapBuffer::Int(a), GapBuffer::Int(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl From<&str> for GapBuffer {
    /// Seed a wide buffer from a string's scalar values.
    fn from(s: &str) -> Self {
        GapBuffer::Wide(s.chars().collect::<Vec<char>>().into())
    }
}

impl From<&[u8]> for GapBuffer {
    fn from(seed: &[u8]) -> Self {
        GapBuffer::Byte(seed.into())
    }
}

impl<const N: usize> From<&[u8; N]> for GapBuffer {
    fn from(seed: &[u8; N]) -> Self {
        GapBuffer::Byte(seed.as_slice().into())
    }
}

impl From<Vec<u8>> for GapBuffer {
    fn from(seed: Vec<u8>) -> Self {
        GapBuffer::Byte(seed.into())
    }
}

impl From<&[i32]> for GapBuffer {
    fn from(seed: &[i32]) -> Self {
        GapBuffer::Int(seed.into())
    }
}

impl<const N: usize> From<&[i32; N]> for GapBuffer {
    fn from(seed: &[i32; N]) -> Self {
        GapBuffer::Int(seed.as_slice().into())
    }
}

impl From<Vec<i32>> for GapBuffer {
    fn from(seed: Vec<i32>) -> Self {
        GapBuffer::Int(seed.into())
    }
}

/// A read-only window over all logical elements in one contiguous run.
///
/// Borrowed from [`GapBuffer::view`]; the buffer cannot be mutated while
/// a view of it is alive.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Byte(&'a [u8]),
    Wide(&'a [char]),
    Int(&'a [i32]),
}

impl View<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            View::Byte(_) => Kind::Byte,
            View::Wide(_) => Kind::Wide,
            View::Int(_) => Kind::Int,
        }
    }

    /// Number of elements in the window.
    pub fn len(&self) -> usize {
        match self {
            View::Byte(s) => s.len(),
            View::Wide(s) => s.len(),
            View::Int(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Octets per element.
    #[inline]
    pub fn item_size(&self) -> usize {
        self.kind().item_size()
    }

    /// Base address of the window, as octets. Valid for
    /// `len() * item_size()` octets.
    pub fn as_ptr(&self) -> *const u8 {
        match self {
            View::Byte(s) => s.as_ptr(),
            View::Wide(s) => s.as_ptr().cast(),
            View::Int(s) => s.as_ptr().cast(),
        }
    }
}
