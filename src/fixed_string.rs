use crate::{AsUnits, Error, Unit, UnitTraits, internal::define_variants, unit::DefaultTraits};

use core::{
    marker::PhantomData,
    ops::{AddAssign, Deref, DerefMut, Index, IndexMut},
    slice,
};

/// Three-way comparison, relational operators and hashing.
pub mod compare;

/// Conversions to and from foreign string and pointer types.
pub mod convert;

/// Index-based cursors into the logical content.
pub mod cursor;

/// Capacity-bounded formatted writes.
pub mod format;

/// Unit iterators and iterator-driven construction.
pub mod iter;

/// Substring and unit-set searches.
pub mod search;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod trace_capture;

use cursor::{Cursor, CursorMut};

/// The not-found sentinel of every search, and the "everything that is left"
/// count of the position-based operations.
pub const NPOS: usize = usize::MAX;

/// A fixed-capacity, terminator-delimited string of `N - 1` units at most.
///
/// The buffer holds `N` units of type `C`. The content is every unit before
/// the first terminator ([`Unit::NUL`]); one slot is always reserved for that
/// terminator, so [`Self::max_size`] is `N - 1`. The length is not stored: it
/// is recomputed by scanning to the terminator.
///
/// No operation allocates. Growing past [`Self::max_size`] truncates the
/// content to what fits, and every operation leaves the buffer terminated.
///
/// `T` selects the unit semantics used by search, comparison and hashing;
/// see [`UnitTraits`].
pub struct FixedString<C, const N: usize, T = DefaultTraits> {
    /// Content units, the terminator, then stale units.
    buf: [C; N],

    /// Selected unit semantics.
    traits: PhantomData<fn() -> T>,
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> FixedString<C, N, T> {
    /// The largest logical length, `N - 1`.
    pub const MAX_SIZE: usize = N - 1;

    /// Creates an empty [`FixedString`].
    ///
    /// Fails to compile when `N == 0`: the buffer needs room for the terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<3>::new();
    /// assert!(s.is_empty());
    /// assert_eq!(s.len(), 0);
    /// assert_eq!(s.max_size(), 2);
    /// assert_eq!(s, "");
    /// assert_eq!(core::mem::size_of_val(&s), 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        const { assert!(N > 0, "the buffer needs room for the terminator") };
        Self { buf: [C::NUL; N], traits: PhantomData }
    }

    /// Returns the logical length: the number of units before the terminator.
    ///
    /// This scans the buffer, so it costs `O(len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<8>::from("hello");
    /// assert_eq!(s.len(), 5);
    /// ```
    #[doc(alias = "size")]
    #[doc(alias = "length")]
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert!(self.is_terminated(), "buffer lost its terminator");
        T::length(&self.buf[..Self::MAX_SIZE])
    }

    /// Returns the size of the buffer in units, terminator slot included.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<32>::new();
    /// assert_eq!(s.capacity(), 32);
    /// ```
    #[doc(alias = "buf_size")]
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[inline(always)]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest logical length, `N - 1`.
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[inline(always)]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        Self::MAX_SIZE
    }

    /// Returns how many more units fit before content is truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<11>::new();
    /// assert_eq!(s.remaining_capacity(), 10);
    ///
    /// s.append("hello");
    /// assert_eq!(s.remaining_capacity(), 5);
    ///
    /// s.append("world");
    /// assert_eq!(s.remaining_capacity(), 0);
    /// assert!(s.is_full());
    /// ```
    #[must_use]
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        Self::MAX_SIZE - self.len()
    }

    /// Returns `true` if the content is empty.
    #[doc(alias = "empty")]
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf[0] == C::NUL
    }

    /// Returns `true` if the content has reached [`Self::max_size`].
    #[must_use]
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == Self::MAX_SIZE
    }

    /// Empties the content by writing a terminator at index 0.
    ///
    /// The remaining units are not zeroed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("hello");
    /// s.clear();
    /// assert!(s.is_empty());
    /// assert_eq!(s, "");
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.buf[0] = C::NUL;
    }

    /// Returns `true` if a terminator exists anywhere within the buffer.
    ///
    /// This holds after every operation; only a write of a non-terminator
    /// unit at index [`Self::max_size`] through [`Self::index_mut`],
    /// [`Self::at_mut`] or [`Self::get_unchecked_mut`] can break it.
    #[must_use]
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.buf.contains(&C::NUL)
    }

    /// Forces a terminator into the last slot of the buffer.
    ///
    /// This restores termination after a contract-violating write at
    /// [`Self::max_size`]; it does not repair anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<4>::from("abc");
    /// *s.index_mut(3) = b'!';
    /// assert!(!s.is_terminated());
    ///
    /// s.ensure_terminated();
    /// assert!(s.is_terminated());
    /// assert_eq!(s, "abc");
    /// ```
    #[inline]
    pub fn ensure_terminated(&mut self) {
        self.buf[Self::MAX_SIZE] = C::NUL;
        debug_assert!(self.is_terminated());
    }

    /// Borrows the logical content.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<8>::from("hello");
    /// assert_eq!(s.as_units(), b"hello");
    /// ```
    #[must_use]
    #[inline]
    pub fn as_units(&self) -> &[C] {
        &self.buf[..self.len()]
    }

    /// Mutably borrows the logical content.
    ///
    /// Writing a terminator into the slice shortens the content.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("hello");
    /// s.as_units_mut().make_ascii_uppercase();
    /// assert_eq!(s, "HELLO");
    ///
    /// s.as_units_mut()[2] = 0;
    /// assert_eq!(s, "HE");
    /// ```
    #[must_use]
    #[inline]
    pub fn as_units_mut(&mut self) -> &mut [C] {
        let len = self.len();
        &mut self.buf[..len]
    }

    /// Borrows the logical content followed by its terminator.
    #[doc(alias = "c_str")]
    #[must_use]
    #[inline]
    pub fn as_units_with_nul(&self) -> &[C] {
        &self.buf[..=self.len()]
    }

    /// Returns a raw pointer to the first unit of the buffer.
    ///
    /// Together with [`Self::len`] this is the pointer-plus-length view of the
    /// content; the unit at `len` is always the terminator.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const C {
        self.buf.as_ptr()
    }

    /// Exchanges the content with `other`.
    ///
    /// This shadows the slice method of the same name reached through
    /// [`Deref`]; use [`Self::as_units_mut`] to swap two units.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut a = FixedStr::<8>::from("left");
    /// let mut b = FixedStr::<8>::from("right");
    /// a.swap(&mut b);
    /// assert_eq!((a, b), ("right".into(), "left".into()));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    define_variants! {
        fn index(self: &Self, index: usize) -> &C,

        normal_brief: "Returns a reference to the unit at `index`",
        checked_brief: "Returns a reference to the unit at `index`, or an out-of-range error",
        unchecked_brief_suffix: "without bounds checking",
        limit: Self::MAX_SIZE,
        unchecked_fn: get_unchecked,
        checked_fn: at,
        body: {
            // SAFETY: caller guarantees index <= N - 1
            unsafe { self.buf.get_unchecked(index) }
        },
        examples: {
            normal: {
                /// Any slot up to [`Self::max_size`] is addressable, including
                /// the terminator:
                ///
                /// ```
                /// use fixed_string::FixedStr;
                ///
                /// let s = FixedStr::<4>::from("ab");
                /// assert_eq!(*s.index(1), b'b');
                /// assert_eq!(*s.index(2), 0);
                /// assert_eq!(s[0], b'a');
                /// ```
                ///
                /// A panic past the last slot:
                ///
                /// ```should_panic
                /// use fixed_string::FixedStr;
                ///
                /// let s = FixedStr::<4>::from("ab");
                ///
                /// // this will panic at runtime
                /// s.index(4);
                /// ```
            }
            checked: {
                /// ```
                /// use fixed_string::{Error, FixedStr};
                ///
                /// let s = FixedStr::<4>::from("ab");
                /// assert_eq!(s.at(0), Ok(&b'a'));
                /// assert_eq!(
                ///     s.at(4),
                ///     Err(Error::OutOfRange { op: "at", pos: 4, limit: 3 }),
                /// );
                /// ```
            }
        }
    }

    define_variants! {
        fn index_mut(self: &mut Self, index: usize) -> &mut C,

        normal_brief: "Returns a mutable reference to the unit at `index`",
        checked_brief: "Returns a mutable reference to the unit at `index`, or an out-of-range error",
        unchecked_brief_suffix: "without bounds checking",
        limit: Self::MAX_SIZE,
        unchecked_fn: get_unchecked_mut,
        checked_fn: at_mut,
        body: {
            // SAFETY: caller guarantees index <= N - 1
            unsafe { self.buf.get_unchecked_mut(index) }
        },
        examples: {
            normal: {
                /// ```
                /// use fixed_string::FixedStr;
                ///
                /// let mut s = FixedStr::<8>::from("cat");
                /// *s.index_mut(0) = b'b';
                /// s[2] = b'r';
                /// assert_eq!(s, "bar");
                /// ```
            }
            checked: {
                /// ```
                /// use fixed_string::FixedStr;
                ///
                /// let mut s = FixedStr::<4>::from("ab");
                /// if let Ok(unit) = s.at_mut(1) {
                ///     *unit = b'z';
                /// }
                /// assert_eq!(s, "az");
                /// assert!(s.at_mut(7).is_err());
                /// ```
            }
        }
    }

    /// Returns the first unit, or `None` if the content is empty.
    #[must_use]
    #[inline]
    pub fn front(&self) -> Option<&C> {
        self.as_units().first()
    }

    /// Returns the first unit mutably, or `None` if the content is empty.
    #[must_use]
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut C> {
        self.as_units_mut().first_mut()
    }

    /// Returns the last unit, or `None` if the content is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<8>::from("abc");
    /// assert_eq!(s.front(), Some(&b'a'));
    /// assert_eq!(s.back(), Some(&b'c'));
    /// assert_eq!(FixedStr::<8>::new().back(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn back(&self) -> Option<&C> {
        self.as_units().last()
    }

    /// Returns the last unit mutably, or `None` if the content is empty.
    #[must_use]
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut C> {
        self.as_units_mut().last_mut()
    }

    /// Creates a [`FixedString`] holding `count` copies of `unit`, truncated to [`Self::max_size`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// assert_eq!(FixedStr::<5>::from_repeat(3, b'A'), "AAA");
    /// assert_eq!(FixedStr::<5>::from_repeat(10, b'A'), "AAAA");
    /// ```
    #[must_use]
    #[inline]
    pub fn from_repeat(count: usize, unit: C) -> Self {
        let mut out = Self::new();
        out.assign_repeat(count, unit);
        out
    }

    /// Creates a [`FixedString`] from a bounded sequence, truncated to [`Self::max_size`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let wide = FixedStr::<16>::from("test1");
    /// let narrow = FixedStr::<4>::from_units(&wide);
    /// assert_eq!(narrow, "tes");
    ///
    /// let literal = FixedStr::<3>::from_units(&[b'1', b'2', b'3']);
    /// assert_eq!(literal, "12");
    /// ```
    #[must_use]
    #[inline]
    pub fn from_units<S: AsUnits<C>>(units: S) -> Self {
        let mut out = Self::new();
        out.assign(units);
        out
    }

    /// Creates a [`FixedString`] from `count` units of `units` starting at `pos`.
    ///
    /// `count` is clamped to what `units` holds past `pos`; pass [`NPOS`] for
    /// everything that is left. The result is truncated to [`Self::max_size`].
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `pos > units.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// assert_eq!(FixedStr::<8>::from_units_at("1234", 2, 1).unwrap(), "3");
    /// assert_eq!(FixedStr::<8>::from_units_at("1234", 1, NPOS).unwrap(), "234");
    /// assert!(FixedStr::<8>::from_units_at("1234", 5, 1).is_err());
    /// ```
    #[inline]
    pub fn from_units_at<S: AsUnits<C>>(units: S, pos: usize, count: usize) -> Result<Self, Error> {
        let mut out = Self::new();
        out.assign_at(units, pos, count)?;
        Ok(out)
    }

    /// Creates a [`FixedString`] from the units of `units` before its first terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<8>::from_nul_terminated(b"ab\0cd");
    /// assert_eq!(s, "ab");
    /// ```
    #[must_use]
    #[inline]
    pub fn from_nul_terminated(units: &[C]) -> Self {
        let mut out = Self::new();
        out.assign_nul_terminated(units);
        out
    }

    /// Creates a [`FixedString`] from a pointer and a length, truncated to [`Self::max_size`].
    ///
    /// # Safety
    ///
    /// `ptr` must satisfy the requirements of [`core::slice::from_raw_parts`]
    /// for `len` units.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let source = b"pointer";
    /// // SAFETY: `source` is valid for `source.len()` reads
    /// let s = unsafe { FixedStr::<5>::from_raw_parts(source.as_ptr(), source.len()) };
    /// assert_eq!(s, "poin");
    /// ```
    #[must_use]
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const C, len: usize) -> Self {
        // SAFETY: caller guarantees `ptr` is valid for `len` reads; fewer are read
        let units = unsafe { slice::from_raw_parts(ptr, len.min(Self::MAX_SIZE)) };
        Self::from_units(units)
    }

    /// Creates a [`FixedString`] from a terminator-delimited sequence behind `ptr`.
    ///
    /// Reading stops at the terminator or after [`Self::max_size`] units,
    /// whichever comes first.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned, and valid for reads up to its
    /// terminator or [`Self::max_size`] units, whichever comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let c_string = b"hello\0";
    /// // SAFETY: `c_string` is terminated
    /// let s = unsafe { FixedStr::<4>::from_ptr(c_string.as_ptr()) };
    /// assert_eq!(s, "hel");
    /// ```
    #[must_use]
    #[inline]
    pub unsafe fn from_ptr(ptr: *const C) -> Self {
        let mut len = 0;
        while len < Self::MAX_SIZE {
            // SAFETY: caller guarantees the units up to the terminator are readable
            let unit_ptr = unsafe { ptr.add(len) };
            // SAFETY: unit_ptr lies at or before the terminator
            if unsafe { unit_ptr.read() } == C::NUL {
                break;
            }
            len += 1;
        }
        // SAFETY: the first `len` units were just read
        unsafe { Self::from_raw_parts(ptr, len) }
    }

    /// Replaces the content with a bounded sequence, truncated to [`Self::max_size`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<4>::new();
    /// s.assign("12");
    /// assert_eq!(s, "12");
    ///
    /// s.assign("1234");
    /// assert_eq!(s, "123");
    ///
    /// s.assign(b'x');
    /// assert_eq!(s, "x");
    /// ```
    #[inline]
    pub fn assign<S: AsUnits<C>>(&mut self, units: S) -> &mut Self {
        self.clear();
        self.insert_units(0, units.as_units(), "assign")
    }

    /// Replaces the content with `count` units of `units` starting at `pos`.
    ///
    /// `count` is clamped to what `units` holds past `pos`; pass [`NPOS`] for
    /// everything that is left.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `pos > units.len()`; the content is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<5>::new();
    /// s.assign_at("1234", 2, 1).unwrap();
    /// assert_eq!(s, "3");
    ///
    /// assert!(s.assign_at("1234", 9, 1).is_err());
    /// assert_eq!(s, "3");
    /// ```
    #[inline]
    pub fn assign_at<S: AsUnits<C>>(&mut self, units: S, pos: usize, count: usize) -> Result<&mut Self, Error> {
        let src = sub_range(units.as_units(), pos, count, "assign_at")?;
        self.clear();
        Ok(self.insert_units(0, src, "assign_at"))
    }

    /// Replaces the content with `count` copies of `unit`, truncated to [`Self::max_size`].
    #[inline]
    pub fn assign_repeat(&mut self, count: usize, unit: C) -> &mut Self {
        self.clear();
        self.insert_repeat(0, count, unit)
    }

    /// Replaces the content with the units of `units` before its first terminator.
    #[inline]
    pub fn assign_nul_terminated(&mut self, units: &[C]) -> &mut Self {
        let len = T::length(units);
        self.assign(&units[..len])
    }

    /// Replaces the content with the units yielded by `iter`.
    ///
    /// At most [`Self::max_size`] units are pulled from the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<4>::new();
    /// s.assign_iter(b"abcdef".iter().rev().copied());
    /// assert_eq!(s, "fed");
    /// ```
    #[inline]
    pub fn assign_iter<I: IntoIterator<Item = C>>(&mut self, iter: I) -> &mut Self {
        self.fill_from(0, iter.into_iter(), "assign_iter");
        self
    }

    /// Writes the units of `iter` from `start` until it runs dry or the
    /// content is full, then terminates.
    ///
    /// No unit is pulled past [`Self::max_size`]; whatever the iterator still
    /// reports through its lower size bound is traced as truncated.
    fn fill_from<I: Iterator<Item = C>>(&mut self, start: usize, mut iter: I, op: &'static str) {
        let mut end = start;
        for (slot, unit) in self.buf[start..Self::MAX_SIZE].iter_mut().zip(&mut iter) {
            *slot = unit;
            end += 1;
        }
        self.buf[end] = C::NUL;

        let (left_over, _) = iter.size_hint();
        if left_over > 0 {
            trace_truncation(op, end.saturating_add(left_over), end);
        }
    }

    /// Shifts the content from `index` right by `count` units, dropping
    /// whatever is pushed past [`Self::max_size`], and re-terminates it.
    ///
    /// `index` is clamped to the length. The opened gap still holds stale
    /// units; the caller fills it. Returns the clamped gap as `(index, count)`
    /// and the new length.
    fn make_room(&mut self, index: usize, count: usize, op: &'static str) -> (usize, usize, usize) {
        let len = self.len();
        let index = index.min(len);
        let room = count.min(Self::MAX_SIZE - index);
        let new_len = (len + room).min(Self::MAX_SIZE);
        let kept_tail = new_len - index - room;

        T::move_units(&mut self.buf, index..index + kept_tail, index + room);
        self.buf[new_len] = C::NUL;

        let requested = len.saturating_add(count);
        if requested > new_len {
            trace_truncation(op, requested, new_len);
        }
        (index, room, new_len)
    }

    fn insert_units(&mut self, index: usize, units: &[C], op: &'static str) -> &mut Self {
        let (index, room, _) = self.make_room(index, units.len(), op);
        T::copy_units(&mut self.buf[index..index + room], &units[..room]);
        self
    }

    /// Appends a bounded sequence, truncating whatever does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<3>::new();
    /// s.append("A");
    /// s.append(b'A');
    /// assert_eq!(s, "AA");
    ///
    /// s.append("BC");
    /// assert_eq!(s, "AA");
    /// ```
    #[inline]
    pub fn append<S: AsUnits<C>>(&mut self, units: S) -> &mut Self {
        self.insert_units(NPOS, units.as_units(), "append")
    }

    /// Appends `count` units of `units` starting at `pos`.
    ///
    /// `count` is clamped to what `units` holds past `pos`; pass [`NPOS`] for
    /// everything that is left.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `pos > units.len()`; the content is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let tail = FixedStr::<8>::from("-suffix");
    /// let mut s = FixedStr::<8>::from("x");
    /// s.append_at(&tail, 1, 3).unwrap().append_at(&tail, 6, NPOS).unwrap();
    /// assert_eq!(s, "xsufx");
    /// assert!(s.append_at(&tail, 8, 1).is_err());
    /// ```
    #[inline]
    pub fn append_at<S: AsUnits<C>>(&mut self, units: S, pos: usize, count: usize) -> Result<&mut Self, Error> {
        let src = sub_range(units.as_units(), pos, count, "append_at")?;
        Ok(self.insert_units(NPOS, src, "append_at"))
    }

    /// Appends `count` copies of `unit`, truncating whatever does not fit.
    #[inline]
    pub fn append_repeat(&mut self, count: usize, unit: C) -> &mut Self {
        self.insert_repeat(NPOS, count, unit)
    }

    /// Appends the units of `units` before its first terminator.
    #[inline]
    pub fn append_nul_terminated(&mut self, units: &[C]) -> &mut Self {
        let len = T::length(units);
        self.append(&units[..len])
    }

    /// Appends one unit, returning `false` if the content is already full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<3>::new();
    /// assert!(s.push_back(b'a'));
    /// assert!(s.push_back(b'b'));
    /// assert!(!s.push_back(b'c'));
    /// assert_eq!(s, "ab");
    /// ```
    #[inline]
    pub fn push_back(&mut self, unit: C) -> bool {
        let (index, room, _) = self.make_room(NPOS, 1, "push_back");
        if room == 0 {
            return false;
        }
        self.buf[index] = unit;
        true
    }

    /// Removes and returns the last unit, or `None` if the content is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<3>::from("AB");
    /// assert_eq!(s.pop_back(), Some(b'B'));
    /// assert_eq!(s, "A");
    /// assert_eq!(s.pop_back(), Some(b'A'));
    /// assert_eq!(s.pop_back(), None);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<C> {
        let len = self.len();
        let last = len.checked_sub(1)?;
        let unit = self.buf[last];
        self.buf[last] = C::NUL;
        Some(unit)
    }

    /// Inserts a bounded sequence at `index`, shifting the content after it.
    ///
    /// `index` is clamped to the length. Units pushed past
    /// [`Self::max_size`] are dropped, first from the shifted tail, then from
    /// the inserted sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("ABC");
    /// s.insert(3, "abc");
    /// assert_eq!(s, "ABCabc");
    ///
    /// s.insert(5, "123");
    /// assert_eq!(s, "ABCab12");
    /// ```
    #[inline]
    pub fn insert<S: AsUnits<C>>(&mut self, index: usize, units: S) -> &mut Self {
        self.insert_units(index, units.as_units(), "insert")
    }

    /// Inserts `count` copies of `unit` at `index`, shifting the content after it.
    ///
    /// Truncates like [`Self::insert`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("ABCabc");
    /// s.insert_repeat(3, 3, b'X');
    /// assert_eq!(s, "ABCXXXa");
    ///
    /// s.insert_repeat(3, 5, b'Y');
    /// assert_eq!(s, "ABCYYYY");
    /// ```
    #[inline]
    pub fn insert_repeat(&mut self, index: usize, count: usize, unit: C) -> &mut Self {
        let (index, room, _) = self.make_room(index, count, "insert_repeat");
        T::fill_units(&mut self.buf[index..index + room], unit);
        self
    }

    /// Inserts the units yielded by `iter` at `index`, shifting the content after it.
    ///
    /// Truncates like [`Self::insert`]. If the iterator yields fewer units
    /// than its reported length, the unfilled part of the gap is closed again.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("ad");
    /// s.insert_iter(1, [b'b', b'c']);
    /// assert_eq!(s, "abcd");
    /// ```
    #[inline]
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let (index, room, end) = self.make_room(index, iter.len(), "insert_iter");
        let mut filled = 0;
        for (slot, unit) in self.buf[index..index + room].iter_mut().zip(iter) {
            *slot = unit;
            filled += 1;
        }
        if filled < room {
            // the gap still holds stale units, so the length cannot be rescanned
            let unfilled = room - filled;
            T::move_units(&mut self.buf, index + room..end, index + filled);
            self.buf[end - unfilled] = C::NUL;
        }
        self
    }

    /// Inserts a bounded sequence before the unit `pos` refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("ABC");
    /// s.insert_at(s.begin(), "D");
    /// assert_eq!(s, "DABC");
    ///
    /// s.insert_at(s.end(), "D");
    /// assert_eq!(s, "DABCD");
    ///
    /// s.insert_at(s.begin() + 1, "ABCDE");
    /// assert_eq!(s, "DABCDEA");
    /// ```
    #[inline]
    pub fn insert_at<P: Into<Cursor>, S: AsUnits<C>>(&mut self, pos: P, units: S) -> &mut Self {
        self.insert_units(pos.into().index(), units.as_units(), "insert_at")
    }

    /// Removes up to `count` units starting at `index`, closing the gap.
    ///
    /// Does nothing if `index` is at or past the length or `count` is zero;
    /// pass [`NPOS`] to remove everything from `index` on.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("ABCEAG");
    /// assert_eq!(s.erase(1, 3), "AAG");
    /// assert_eq!(s.erase(7, 1), "AAG");
    /// assert_eq!(s.erase(0, 0), "AAG");
    /// ```
    #[inline]
    pub fn erase(&mut self, index: usize, count: usize) -> &mut Self {
        let len = self.len();
        if index >= len || count == 0 {
            return self;
        }
        let count = count.min(len - index);
        T::move_units(&mut self.buf, index + count..len, index);
        self.buf[len - count] = C::NUL;
        self
    }

    /// Removes everything from `index` on.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("hello");
    /// s.erase_from(3);
    /// assert_eq!(s, "hel");
    /// s.erase_from(10);
    /// assert_eq!(s, "hel");
    /// ```
    #[doc(alias = "truncate")]
    #[inline]
    pub fn erase_from(&mut self, index: usize) -> &mut Self {
        if index < self.len() {
            self.buf[index] = C::NUL;
        }
        self
    }

    /// Removes the unit `pos` refers to and returns a cursor to the unit that followed it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("AAGGGGG");
    /// let next = s.erase_at(s.begin() + 2);
    /// assert_eq!(s, "AAGGGG");
    /// assert_eq!(next.index(), 2);
    /// ```
    #[inline]
    pub fn erase_at<P: Into<Cursor>>(&mut self, pos: P) -> CursorMut {
        let pos = pos.into();
        self.erase_range(pos, pos + 1)
    }

    /// Removes the units in `[first, last)` and returns a cursor to the unit that followed them.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("AAGGGG");
    /// s.erase_range(s.begin() + 1, s.begin() + 2);
    /// assert_eq!(s, "AGGGG");
    /// ```
    #[inline]
    pub fn erase_range<P: Into<Cursor>, Q: Into<Cursor>>(&mut self, first: P, last: Q) -> CursorMut {
        let (first, last) = (first.into(), last.into());
        debug_assert!(first <= last, "cursor range is reversed");
        self.erase(first.index(), last.index().saturating_sub(first.index()));
        first.cast_mut()
    }

    /// Replaces up to `count` units starting at `index` with a bounded sequence.
    ///
    /// `index` is clamped to the length and `count` to what lies past it. A
    /// shorter replacement closes the gap; a longer one opens room the way
    /// [`Self::insert`] does. The result is truncated to [`Self::max_size`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<4>::from("ABC");
    /// s.replace(0, 1, "Z");
    /// assert_eq!(s, "ZBC");
    ///
    /// s.replace(0, 1, "xx");
    /// assert_eq!(s, "xxB");
    ///
    /// s.assign("ABC").replace(2, 2, "A");
    /// assert_eq!(s, "ABA");
    ///
    /// s.replace(1, 3, "");
    /// assert_eq!(s, "A");
    /// ```
    #[inline]
    pub fn replace<S: AsUnits<C>>(&mut self, index: usize, count: usize, units: S) -> &mut Self {
        let src = units.as_units();
        let len = self.len();
        let index = index.min(len);
        let count = count.min(len - index);

        if count > src.len() {
            self.erase(index + src.len(), count - src.len());
        } else if src.len() > count {
            self.make_room(index + count, src.len() - count, "replace");
        }

        let n = src.len().min(Self::MAX_SIZE - index);
        T::copy_units(&mut self.buf[index..index + n], &src[..n]);
        self
    }

    /// Replaces the units in `[first, last)` with a bounded sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<16>::from("one two three");
    /// let first = s.begin() + 4;
    /// s.replace_range(first, first + 3, "2");
    /// assert_eq!(s, "one 2 three");
    /// ```
    #[inline]
    pub fn replace_range<P: Into<Cursor>, Q: Into<Cursor>, S: AsUnits<C>>(
        &mut self,
        first: P,
        last: Q,
        units: S,
    ) -> &mut Self {
        let (first, last) = (first.into(), last.into());
        debug_assert!(first <= last, "cursor range is reversed");
        self.replace(first.index(), last.index().saturating_sub(first.index()), units)
    }

    /// Changes the length to `count`, clamped to [`Self::max_size`].
    ///
    /// Shrinking moves the terminator; growing pads with `fill`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<6>::from("ab");
    /// s.resize(4, b'.');
    /// assert_eq!(s, "ab..");
    ///
    /// s.resize(9, b'!');
    /// assert_eq!(s, "ab..!");
    ///
    /// s.resize(1, b'!');
    /// assert_eq!(s, "a");
    /// ```
    #[inline]
    pub fn resize(&mut self, count: usize, fill: C) {
        let count = count.min(Self::MAX_SIZE);
        let len = self.len();
        if count <= len {
            self.buf[count] = C::NUL;
            return;
        }
        let (index, room, _) = self.make_room(len, count - len, "resize");
        T::fill_units(&mut self.buf[index..index + room], fill);
    }

    /// Returns a copy of up to `count` units starting at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `pos > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let s = FixedStr::<16>::from("hello world");
    /// assert_eq!(s.substr(6, NPOS).unwrap(), "world");
    /// assert_eq!(s.substr(0, 4).unwrap(), "hell");
    /// assert!(s.substr(12, 1).is_err());
    /// ```
    #[inline]
    pub fn substr(&self, pos: usize, count: usize) -> Result<Self, Error> {
        sub_range(self.as_units(), pos, count, "substr").map(Self::from_units)
    }

    /// Copies up to `count` units starting at `pos` into `dest` and returns how many were copied.
    ///
    /// The copy is clamped to the content past `pos` and to `dest.len()`. No
    /// terminator is written to `dest`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `pos > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, NPOS};
    ///
    /// let s = FixedStr::<8>::from("abcdef");
    /// let mut dest = [0_u8; 4];
    /// assert_eq!(s.copy_to(&mut dest, NPOS, 1), Ok(4));
    /// assert_eq!(&dest, b"bcde");
    /// assert_eq!(s.copy_to(&mut dest, 2, 5), Ok(1));
    /// assert_eq!(&dest, b"fcde");
    /// ```
    #[inline]
    pub fn copy_to(&self, dest: &mut [C], count: usize, pos: usize) -> Result<usize, Error> {
        let src = sub_range(self.as_units(), pos, count, "copy_to")?;
        let n = src.len().min(dest.len());
        T::copy_units(&mut dest[..n], &src[..n]);
        Ok(n)
    }
}

/// Returns `count` units of `units` from `pos`, with `count` clamped to the available units.
fn sub_range<'a, C>(units: &'a [C], pos: usize, count: usize, op: &'static str) -> Result<&'a [C], Error> {
    if pos > units.len() {
        return Err(Error::out_of_range(op, pos, units.len()));
    }
    let count = count.min(units.len() - pos);
    Ok(&units[pos..pos + count])
}

#[cold]
fn trace_truncation(op: &'static str, requested: usize, kept: usize) {
    log::trace!(target: "fixed_string", "`{op}`: content truncated to {kept} of {requested} units");
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> Default for FixedString<C, N, T> {
    /// Returns an empty [`FixedString`].
    ///
    /// This is equivalent to [`Self::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy, const N: usize, T> Clone for FixedString<C, N, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Copy, const N: usize, T> Copy for FixedString<C, N, T> {}

impl<C: Unit, const N: usize, T: UnitTraits<C>> Deref for FixedString<C, N, T> {
    type Target = [C];

    /// Returns the logical content.
    ///
    /// This is equivalent to [`Self::as_units`].
    #[inline]
    fn deref(&self) -> &Self::Target {
        Self::as_units(self)
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> DerefMut for FixedString<C, N, T> {
    /// Returns the logical content mutably.
    ///
    /// This is equivalent to [`Self::as_units_mut`].
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        Self::as_units_mut(self)
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> AsRef<[C]> for FixedString<C, N, T> {
    #[inline]
    fn as_ref(&self) -> &[C] {
        Self::as_units(self)
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> AsMut<[C]> for FixedString<C, N, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [C] {
        Self::as_units_mut(self)
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>, S: AsUnits<C>> AddAssign<S> for FixedString<C, N, T> {
    /// Appends a bounded sequence, truncating whatever does not fit.
    ///
    /// Equivalent to [`Self::append`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("AAG");
    /// s += "GGGG";
    /// s += b'!';
    /// assert_eq!(s, "AAGGGGG");
    /// ```
    #[inline]
    fn add_assign(&mut self, rhs: S) {
        self.append(rhs);
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> Index<usize> for FixedString<C, N, T> {
    type Output = C;

    /// Returns a reference to the unit at `index`.
    ///
    /// Equivalent to [`Self::index`].
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        Self::index(self, index)
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> IndexMut<usize> for FixedString<C, N, T> {
    /// Returns a mutable reference to the unit at `index`.
    ///
    /// Equivalent to [`Self::index_mut`].
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        Self::index_mut(self, index)
    }
}
