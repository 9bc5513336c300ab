use super::FixedString;
use crate::{Unit, UnitTraits};

use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
};

macro_rules! forward_cursor {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            pos: usize,
        }

        impl $name {
            /// Creates a cursor at `index`.
            #[must_use]
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self { pos: index }
            }

            /// Returns the unit index the cursor refers to.
            #[must_use]
            #[inline]
            pub const fn index(self) -> usize {
                self.pos
            }

            /// Returns the unit the cursor refers to in `s`.
            ///
            /// # Panics
            ///
            /// - "index out of range" if the cursor lies past [`FixedString::max_size`]
            #[must_use]
            #[inline]
            pub fn get<C: Unit, const N: usize, T: UnitTraits<C>>(self, s: &FixedString<C, N, T>) -> &C {
                debug_assert!(self.pos <= s.len(), "cursor lies past the terminator");
                s.index(self.pos)
            }
        }

        impl Add<usize> for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: usize) -> Self {
                Self { pos: self.pos + rhs }
            }
        }

        impl Sub<usize> for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: usize) -> Self {
                Self { pos: self.pos - rhs }
            }
        }

        impl AddAssign<usize> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: usize) {
                self.pos += rhs;
            }
        }

        impl SubAssign<usize> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: usize) {
                self.pos -= rhs;
            }
        }

        impl Sub for $name {
            type Output = usize;

            /// Returns the distance from `rhs` to `self`.
            #[inline]
            fn sub(self, rhs: Self) -> usize {
                self.pos - rhs.pos
            }
        }
    };
}

forward_cursor! {
    /// A read-only position in a [`FixedString`], from `begin` to `end`.
    ///
    /// A cursor is a plain index: it does not borrow the string, and any
    /// mutation that shifts content leaves it pointing at whatever unit now
    /// occupies its index.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<8>::from("ABC");
    /// let mut cur = s.begin();
    /// assert_eq!(*cur.get(&s), b'A');
    /// cur += 2;
    /// assert_eq!(*cur.get(&s), b'C');
    /// assert_eq!(s.end() - s.begin(), s.len());
    /// assert!(cur < s.end());
    /// ```
    Cursor
}

forward_cursor! {
    /// A position in a [`FixedString`] through which units may be written.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{Cursor, FixedStr};
    ///
    /// let mut s = FixedStr::<8>::from("abc");
    /// let cur = s.begin_mut() + 1;
    /// *cur.get_mut(&mut s) = b'X';
    /// assert_eq!(s, "aXc");
    ///
    /// let read_only: Cursor = cur.into();
    /// assert_eq!(read_only.index(), 1);
    /// ```
    CursorMut
}

impl Cursor {
    pub(crate) const fn cast_mut(self) -> CursorMut {
        CursorMut { pos: self.pos }
    }
}

impl CursorMut {
    /// Returns the unit the cursor refers to in `s`, mutably.
    ///
    /// # Panics
    ///
    /// - "index out of range" if the cursor lies past [`FixedString::max_size`]
    #[must_use]
    #[inline]
    pub fn get_mut<C: Unit, const N: usize, T: UnitTraits<C>>(self, s: &mut FixedString<C, N, T>) -> &mut C {
        debug_assert!(self.pos <= s.len(), "cursor lies past the terminator");
        s.index_mut(self.pos)
    }
}

impl From<CursorMut> for Cursor {
    #[inline]
    fn from(cursor: CursorMut) -> Self {
        Self { pos: cursor.pos }
    }
}

macro_rules! reverse_cursor {
    ($(#[$meta:meta])* $name:ident => $forward:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            /// One past the referenced unit.
            base: usize,
        }

        impl $name {
            /// Returns the forward cursor one past the referenced unit.
            #[must_use]
            #[inline]
            pub const fn base(self) -> $forward {
                $forward::new(self.base)
            }

            /// Returns the unit the cursor refers to in `s`.
            ///
            /// # Panics
            ///
            /// - if the cursor is at `rend`
            #[must_use]
            #[inline]
            pub fn get<C: Unit, const N: usize, T: UnitTraits<C>>(self, s: &FixedString<C, N, T>) -> &C {
                debug_assert!(self.base <= s.len(), "cursor lies past the terminator");
                s.index(self.base - 1)
            }
        }

        impl Add<usize> for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: usize) -> Self {
                Self { base: self.base - rhs }
            }
        }

        impl Sub<usize> for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: usize) -> Self {
                Self { base: self.base + rhs }
            }
        }

        impl AddAssign<usize> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: usize) {
                self.base -= rhs;
            }
        }

        impl SubAssign<usize> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: usize) {
                self.base += rhs;
            }
        }

        impl Sub for $name {
            type Output = usize;

            /// Returns the distance from `rhs` to `self` in reverse order.
            #[inline]
            fn sub(self, rhs: Self) -> usize {
                rhs.base - self.base
            }
        }

        impl Ord for $name {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                other.base.cmp(&self.base)
            }
        }

        impl PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

reverse_cursor! {
    /// A read-only position walking a [`FixedString`] from its last unit to its first.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<8>::from("ABC");
    /// let mut cur = s.rbegin();
    /// let mut seen = Vec::new();
    /// while cur != s.rend() {
    ///     seen.push(*cur.get(&s));
    ///     cur += 1;
    /// }
    /// assert_eq!(seen, b"CBA");
    /// assert_eq!(s.rend() - s.rbegin(), 3);
    /// assert_eq!(s.rbegin().base(), s.end());
    /// ```
    RevCursor => Cursor
}

reverse_cursor! {
    /// A reverse position in a [`FixedString`] through which units may be written.
    RevCursorMut => CursorMut
}

impl RevCursorMut {
    /// Returns the unit the cursor refers to in `s`, mutably.
    ///
    /// # Panics
    ///
    /// - if the cursor is at `rend`
    #[must_use]
    #[inline]
    pub fn get_mut<C: Unit, const N: usize, T: UnitTraits<C>>(self, s: &mut FixedString<C, N, T>) -> &mut C {
        debug_assert!(self.base <= s.len(), "cursor lies past the terminator");
        s.index_mut(self.base - 1)
    }
}

impl From<RevCursorMut> for RevCursor {
    #[inline]
    fn from(cursor: RevCursorMut) -> Self {
        Self { base: cursor.base }
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> FixedString<C, N, T> {
    /// Returns a cursor to the first unit.
    #[doc(alias = "cbegin")]
    #[must_use]
    #[inline]
    pub const fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    /// Returns a cursor one past the last unit, at the terminator.
    #[doc(alias = "cend")]
    #[must_use]
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.len())
    }

    /// Returns a writable cursor to the first unit.
    #[must_use]
    #[inline]
    pub const fn begin_mut(&mut self) -> CursorMut {
        CursorMut::new(0)
    }

    /// Returns a writable cursor one past the last unit.
    #[must_use]
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut {
        CursorMut::new(self.len())
    }

    /// Returns a reverse cursor to the last unit.
    #[doc(alias = "crbegin")]
    #[must_use]
    #[inline]
    pub fn rbegin(&self) -> RevCursor {
        RevCursor { base: self.len() }
    }

    /// Returns a reverse cursor one before the first unit.
    #[doc(alias = "crend")]
    #[must_use]
    #[inline]
    pub const fn rend(&self) -> RevCursor {
        RevCursor { base: 0 }
    }

    /// Returns a writable reverse cursor to the last unit.
    #[must_use]
    #[inline]
    pub fn rbegin_mut(&mut self) -> RevCursorMut {
        RevCursorMut { base: self.len() }
    }

    /// Returns a writable reverse cursor one before the first unit.
    #[must_use]
    #[inline]
    pub const fn rend_mut(&mut self) -> RevCursorMut {
        RevCursorMut { base: 0 }
    }
}
