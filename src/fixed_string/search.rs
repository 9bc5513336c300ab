use super::{FixedString, NPOS};
use crate::{AsUnits, Unit, UnitTraits};

impl<C: Unit, const N: usize, T: UnitTraits<C>> FixedString<C, N, T> {
    /// Returns the first index at or after `pos` where `needle` occurs, or [`NPOS`].
    ///
    /// An empty needle matches at `pos` itself as long as `pos <= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let s = FixedStr::<8>::from("ABABAC");
    /// assert_eq!(s.find(b'A', 1), 2);
    /// assert_eq!(s.find("AB", 1), 2);
    /// assert_eq!(s.find("AC", 0), 4);
    /// assert_eq!(s.find("AD", 0), NPOS);
    /// assert_eq!(s.find("", 6), 6);
    /// assert_eq!(s.find("", 7), NPOS);
    /// ```
    #[must_use]
    #[inline]
    pub fn find<S: AsUnits<C>>(&self, needle: S, pos: usize) -> usize {
        let hay = self.as_units();
        let needle = needle.as_units();
        if pos > hay.len() {
            return NPOS;
        }
        if needle.is_empty() {
            return pos;
        }
        hay[pos..]
            .windows(needle.len())
            .position(|window| T::compare_units(window, needle).is_eq())
            .map_or(NPOS, |i| i + pos)
    }

    /// Returns the last index at or before `pos` where `needle` starts, or [`NPOS`].
    ///
    /// Pass [`NPOS`] as `pos` to search the whole content.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let s = FixedStr::<8>::from("ABABAC");
    /// assert_eq!(s.rfind(b'A', NPOS), 4);
    /// assert_eq!(s.rfind(b'A', 1), 0);
    /// assert_eq!(s.rfind("AB", 4), 2);
    /// assert_eq!(s.rfind("AB", 3), 2);
    /// assert_eq!(s.rfind("C", 0), NPOS);
    /// assert_eq!(s.rfind("C", NPOS), 5);
    /// ```
    #[must_use]
    #[inline]
    pub fn rfind<S: AsUnits<C>>(&self, needle: S, pos: usize) -> usize {
        let hay = self.as_units();
        let needle = needle.as_units();
        let Some(last_start) = hay.len().checked_sub(needle.len()) else {
            return NPOS;
        };
        (0..=pos.min(last_start))
            .rev()
            .find(|&i| T::compare_units(&hay[i..i + needle.len()], needle).is_eq())
            .unwrap_or(NPOS)
    }

    /// Returns the first index at or after `pos` whose unit is in `set`, or [`NPOS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let s = FixedStr::<8>::from("ABCEAG");
    /// assert_eq!(s.find_first_of(b'E', 0), 3);
    /// assert_eq!(s.find_first_of(b'E', 4), NPOS);
    /// assert_eq!(s.find_first_of("ECF", 0), 2);
    /// assert_eq!(s.find_first_of("ECF", 3), 3);
    /// assert_eq!(s.find_first_of(b'A', 1), 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn find_first_of<S: AsUnits<C>>(&self, set: S, pos: usize) -> usize {
        let set = set.as_units();
        self.find_forward(pos, |u| T::find_unit(set, u).is_some())
    }

    /// Returns the first index at or after `pos` whose unit is not in `set`, or [`NPOS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let s = FixedStr::<8>::from("ABCEAG");
    /// assert_eq!(s.find_first_not_of("ABC", 0), 3);
    /// assert_eq!(s.find_first_not_of(b'E', 3), 4);
    /// assert_eq!(s.find_first_not_of("AEC", 2), 5);
    /// assert_eq!(s.find_first_not_of("ABCEAG", 0), NPOS);
    /// ```
    #[must_use]
    #[inline]
    pub fn find_first_not_of<S: AsUnits<C>>(&self, set: S, pos: usize) -> usize {
        let set = set.as_units();
        self.find_forward(pos, |u| T::find_unit(set, u).is_none())
    }

    /// Returns the last index at or before `pos` whose unit is in `set`, or [`NPOS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let s = FixedStr::<8>::from("ABCEAG");
    /// assert_eq!(s.find_last_of(b'A', NPOS), 4);
    /// assert_eq!(s.find_last_of(b'A', 3), 0);
    /// assert_eq!(s.find_last_of("XYZ", NPOS), NPOS);
    /// ```
    #[must_use]
    #[inline]
    pub fn find_last_of<S: AsUnits<C>>(&self, set: S, pos: usize) -> usize {
        let set = set.as_units();
        self.find_backward(pos, |u| T::find_unit(set, u).is_some())
    }

    /// Returns the last index at or before `pos` whose unit is not in `set`, or [`NPOS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let s = FixedStr::<8>::from("ABCEAG");
    /// assert_eq!(s.find_last_not_of("ABC", NPOS), 5);
    /// assert_eq!(s.find_last_not_of(b'E', 3), 2);
    /// assert_eq!(s.find_last_not_of("AEC", 3), 1);
    /// assert_eq!(s.find_last_not_of(b'B', 1), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn find_last_not_of<S: AsUnits<C>>(&self, set: S, pos: usize) -> usize {
        let set = set.as_units();
        self.find_backward(pos, |u| T::find_unit(set, u).is_none())
    }

    /// Returns `true` if `needle` occurs anywhere in the content.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<16>::from("needle in hay");
    /// assert!(s.contains_units("in"));
    /// assert!(!s.contains_units("pin"));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains_units<S: AsUnits<C>>(&self, needle: S) -> bool {
        self.find(needle, 0) != NPOS
    }

    fn find_forward(&self, pos: usize, mut pred: impl FnMut(C) -> bool) -> usize {
        self.as_units()
            .iter()
            .enumerate()
            .skip(pos)
            .find(|&(_, &u)| pred(u))
            .map_or(NPOS, |(i, _)| i)
    }

    fn find_backward(&self, pos: usize, mut pred: impl FnMut(C) -> bool) -> usize {
        let hay = self.as_units();
        let Some(last) = hay.len().checked_sub(1) else {
            return NPOS;
        };
        (0..=pos.min(last)).rev().find(|&i| pred(hay[i])).unwrap_or(NPOS)
    }
}
