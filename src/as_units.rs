use crate::{FixedString, Unit, UnitTraits};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// A bounded run of units that can be read without being retained.
///
/// Every operation that consumes foreign content (assignment, append,
/// insertion, replacement, search, comparison) takes an `AsUnits` argument,
/// so one method covers a single unit, a slice, an array literal, another
/// [`FixedString`] of any capacity and, for narrow strings, a `&str`.
///
/// # Examples
///
/// ```
/// use fixed_string::FixedStr;
///
/// let other = FixedStr::<4>::from("cd");
/// let mut s = FixedStr::<16>::new();
/// s.append(b'a').append(b"b").append(&other).append("ef").append(&[b'g'][..]);
/// assert_eq!(s, "abcdefg");
/// ```
pub trait AsUnits<C: Unit> {
    /// Borrows the units.
    fn as_units(&self) -> &[C];
}

impl<C: Unit> AsUnits<C> for C {
    #[inline]
    fn as_units(&self) -> &[C] {
        core::slice::from_ref(self)
    }
}

impl<C: Unit> AsUnits<C> for &[C] {
    #[inline]
    fn as_units(&self) -> &[C] {
        self
    }
}

impl<C: Unit, const K: usize> AsUnits<C> for &[C; K] {
    #[inline]
    fn as_units(&self) -> &[C] {
        &self[..]
    }
}

impl<C: Unit, const M: usize, T: UnitTraits<C>> AsUnits<C> for &FixedString<C, M, T> {
    #[inline]
    fn as_units(&self) -> &[C] {
        FixedString::as_units(*self)
    }
}

impl AsUnits<u8> for &str {
    #[inline]
    fn as_units(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl AsUnits<u8> for &String {
    #[inline]
    fn as_units(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<C: Unit> AsUnits<C> for &Vec<C> {
    #[inline]
    fn as_units(&self) -> &[C] {
        self.as_slice()
    }
}
