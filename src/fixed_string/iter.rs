use super::FixedString;
use crate::{Unit, UnitTraits};

use core::{fmt, iter::FusedIterator, slice};

impl<C: Unit, const N: usize, T: UnitTraits<C>> FixedString<C, N, T> {
    /// Returns an iterator over the units of the content.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<8>::from("ABC");
    /// assert!(s.iter().copied().eq(*b"ABC"));
    /// assert!(s.iter().rev().copied().eq(*b"CBA"));
    /// ```
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, C> {
        self.as_units().iter()
    }

    /// Returns an iterator that allows modifying each unit of the content.
    ///
    /// Writing a terminator through it shortens the content.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("abc");
    /// for unit in s.iter_mut().rev().take(2) {
    ///     unit.make_ascii_uppercase();
    /// }
    /// assert_eq!(s, "aBC");
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, C> {
        self.as_units_mut().iter_mut()
    }
}

impl<'s, C: Unit, const N: usize, T: UnitTraits<C>> IntoIterator for &'s FixedString<C, N, T> {
    type Item = &'s C;
    type IntoIter = slice::Iter<'s, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, C: Unit, const N: usize, T: UnitTraits<C>> IntoIterator for &'s mut FixedString<C, N, T> {
    type Item = &'s mut C;
    type IntoIter = slice::IterMut<'s, C>;

    /// Converts the string into a mutable iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("abc");
    /// for unit in &mut s {
    ///     *unit += 1;
    /// }
    /// assert_eq!(s, "bcd");
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator over the units of a [`FixedString`]: double-ended and exact-size.
pub struct IntoIter<C, const N: usize, T> {
    /// The current front index of the iterator.
    start: usize,

    /// The current back index of the iterator.
    end: usize,

    /// The string being iterated.
    s: FixedString<C, N, T>,
}

impl<C: Copy, const N: usize, T> Clone for IntoIter<C, N, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { start: self.start, end: self.end, s: self.s }
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> fmt::Debug for IntoIter<C, N, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&&self.s.buf[self.start..self.end]).finish()
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> Iterator for IntoIter<C, N, T> {
    type Item = C;

    /// Returns the next unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut iter = FixedStr::<8>::from("ab").into_iter();
    /// assert_eq!(iter.next(), Some(b'a'));
    /// assert_eq!(iter.next(), Some(b'b'));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    fn next(&mut self) -> Option<C> {
        (self.start < self.end).then(|| {
            let unit = self.s.buf[self.start];
            self.start += 1;
            unit
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.end - self.start;
        (rem, Some(rem))
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> DoubleEndedIterator for IntoIter<C, N, T> {
    /// Returns the next unit from the back of the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut iter = FixedStr::<8>::from("abc").into_iter();
    /// assert_eq!(iter.next(), Some(b'a'));
    /// assert_eq!(iter.next_back(), Some(b'c'));
    /// assert_eq!(iter.len(), 1);
    /// ```
    #[inline]
    fn next_back(&mut self) -> Option<C> {
        (self.start < self.end).then(|| {
            self.end -= 1;
            self.s.buf[self.end]
        })
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> ExactSizeIterator for IntoIter<C, N, T> {}

impl<C: Unit, const N: usize, T: UnitTraits<C>> FusedIterator for IntoIter<C, N, T> {}

impl<C: Unit, const N: usize, T: UnitTraits<C>> IntoIterator for FixedString<C, N, T> {
    type Item = C;
    type IntoIter = IntoIter<C, N, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { start: 0, end: self.len(), s: self }
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> FromIterator<C> for FixedString<C, N, T> {
    /// Collects units into a string, keeping the first [`FixedString::max_size`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s: FixedStr<4> = "collect".bytes().collect();
    /// assert_eq!(s, "col");
    /// ```
    #[inline]
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<'a, C: Unit, const N: usize, T: UnitTraits<C>> FromIterator<&'a C> for FixedString<C, N, T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = &'a C>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> Extend<C> for FixedString<C, N, T> {
    /// Appends units until the content is full.
    ///
    /// No more units are pulled from the iterator once the content is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<6>::from("ab");
    /// let mut source = b"cdefgh".iter().copied();
    /// s.extend(&mut source);
    /// assert_eq!(s, "abcde");
    /// assert_eq!(source.next(), Some(b'f'));
    /// ```
    #[inline]
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        let len = self.len();
        self.fill_from(len, iter.into_iter(), "extend");
    }
}

impl<'a, C: Unit, const N: usize, T: UnitTraits<C>> Extend<&'a C> for FixedString<C, N, T> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a C>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::{FixedStr, WideFixedStr, fixed_string::trace_capture::capture_traces};

    #[test]
    fn owning_iterator_meets_in_the_middle() {
        let mut iter = FixedStr::<8>::from("abcd").into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(b'd'));
        assert_eq!(iter.next(), Some(b'a'));
        assert_eq!(iter.next_back(), Some(b'c'));
        assert_eq!(iter.next(), Some(b'b'));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn borrowed_iteration_matches_content() {
        let s = FixedStr::<8>::from("ABC");
        let mut forward = [0_u8; 3];
        for (slot, unit) in forward.iter_mut().zip(&s) {
            *slot = *unit;
        }
        assert_eq!(&forward, b"ABC");
        assert!(s.iter().rev().eq(b"CBA".iter()));
        assert_eq!(s.iter().len(), 3);
    }

    #[test]
    fn collect_from_references() {
        let units = [0x68_u16, 0x69, 0x21, 0x21];
        let s: WideFixedStr<4> = units.iter().collect();
        assert_eq!(s.as_units(), &[0x68, 0x69, 0x21]);
    }

    #[test]
    fn overflowing_collection_is_traced() {
        let traces = capture_traces(|| {
            let s: FixedStr<4> = "collect".bytes().collect();
            assert_eq!(s, "col");
        });
        assert_eq!(traces, ["`extend`: content truncated to 3 of 7 units"]);

        let traces = capture_traces(|| {
            let mut s = FixedStr::<4>::from("a");
            s.extend(b"bc");
            assert_eq!(s, "abc");
        });
        assert!(traces.is_empty());
    }

    #[test]
    fn extend_into_full_string_is_a_no_op() {
        let mut s = FixedStr::<3>::from("ab");
        s.extend(b"cd");
        assert_eq!(s, "ab");
        s.extend(core::iter::empty::<u8>());
        assert_eq!(s, "ab");
    }
}
