//! `fixed_string`: terminator-delimited strings that never allocate
//!
//! Provides [`FixedString`], a fixed-capacity buffer of storage units with the
//! full mutable-string interface (assign, append, insert, erase, replace,
//! search, iterate, compare, format). The whole buffer lives inline, so the
//! type is usable where no heap allocator exists: firmware, interrupt handlers,
//! fixed-size protocol fields, hot loops.
//!
//! Capacity is fixed at compile time. Content that does not fit is truncated,
//! never reallocated, and the buffer always ends in a terminator:
//!
//! ```
//! use fixed_string::FixedStr;
//!
//! let mut s = FixedStr::<8>::from("ABC");
//! s.append("abcdef");
//! assert_eq!(s, "ABCabcd");
//! assert_eq!(s.len(), s.max_size());
//! assert_eq!(s.as_units_with_nul(), b"ABCabcd\0");
//! ```
//!
//! # Cargo features
//!
//! - `alloc`: conversions to and from `String` and `Vec`.
//! - `std`: implies `alloc`; adds [`std::io::Write`] for narrow strings.
//! - `serde`: `Serialize`/`Deserialize` for narrow strings.
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::multiple_unsafe_ops_per_block)]
#![deny(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::std_instead_of_core)]
#![deny(clippy::std_instead_of_alloc)]
#![deny(clippy::missing_inline_in_public_items)]
#![deny(clippy::return_self_not_must_use)]
#![warn(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// Internal module that are not meant for users to use.
mod internal {
    /// Helper macro to define the panicking, `Result`-returning and unchecked
    /// variants of a bounds-checked element accessor.
    macro_rules! define_variants {
    (
        $(#[$meta:meta])*
        fn $name:ident($self:ident : $self_ty:ty, $index:ident : usize) -> $ret:ty,

        normal_brief: $normal_brief:literal,
        checked_brief: $checked_brief:literal,
        unchecked_brief_suffix: $unchecked_brief_suffix:literal,
        limit: $limit:expr,
        unchecked_fn: $unchecked_fn:ident,
        checked_fn: $checked_fn:ident,
        body: $body:tt,
        $(examples: {
            normal: { $($ex_normal:tt)* }
            checked: { $($ex_checked:tt)* }
        })?
    ) => {
        $(#[$meta])*
        #[doc = concat!(" ", $normal_brief, ", ", $unchecked_brief_suffix, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the panicking version and [`Self::", stringify!($checked_fn), "`] for the [`Result`] returning version.")]
        ///
        /// # Safety
        ///
        #[doc = concat!(" Calling this function with `", stringify!($index), " > ", stringify!($limit), "` is **undefined behavior**.")]
        #[inline]
        pub unsafe fn $unchecked_fn($self: $self_ty, $index: usize) -> $ret {
            debug_assert!($index <= $limit, "index out of range");
            $body
        }

        $(#[$meta])*
        #[doc = concat!(" ", $normal_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($unchecked_fn), "`] for the unchecked version and [`Self::", stringify!($checked_fn), "`] for the [`Result`] returning version.")]
        ///
        /// # Panics
        ///
        #[doc = concat!(" - \"index out of range\" if `", stringify!($index), " > ", stringify!($limit), "`")]
        $(
            ///
            /// # Examples
            ///
            $($ex_normal)*
        )?
        #[inline]
        pub fn $name($self: $self_ty, $index: usize) -> $ret {
            assert!($index <= $limit, "index out of range");
            // SAFETY: the index bound was checked above
            unsafe { $self.$unchecked_fn($index) }
        }

        $(#[$meta])*
        #[doc = concat!(" ", $checked_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the panicking version and [`Self::", stringify!($unchecked_fn), "`] for the unchecked version.")]
        ///
        /// # Errors
        ///
        #[doc = concat!(" [`Error::OutOfRange`](crate::Error::OutOfRange) if `", stringify!($index), " > ", stringify!($limit), "`.")]
        $(
            ///
            /// # Examples
            ///
            $($ex_checked)*
        )?
        #[inline]
        pub fn $checked_fn($self: $self_ty, $index: usize) -> Result<$ret, $crate::Error> {
            let limit = $limit;
            if $index > limit {
                return Err($crate::Error::out_of_range(stringify!($checked_fn), $index, limit));
            }
            // SAFETY: the index bound was checked above
            let result = unsafe { $self.$unchecked_fn($index) };
            Ok(result)
        }
    };
}

    /// Helper macro implementing `PartialEq` and `PartialOrd` from a single
    /// three-way comparison expression.
    macro_rules! impl_cmp {
        ($([$($gen:tt)*] $lhs:ty, $rhs:ty => |$a:ident, $b:ident| $ord:expr;)+) => {$(
            impl<$($gen)*> PartialEq<$rhs> for $lhs {
                #[inline]
                fn eq(&self, other: &$rhs) -> bool {
                    let ($a, $b) = (self, other);
                    ($ord).is_eq()
                }
            }

            impl<$($gen)*> PartialOrd<$rhs> for $lhs {
                #[inline]
                fn partial_cmp(&self, other: &$rhs) -> Option<::core::cmp::Ordering> {
                    let ($a, $b) = (self, other);
                    Some($ord)
                }
            }
        )+};
    }

    pub(crate) use define_variants;
    pub(crate) use impl_cmp;
}

/// Bounded sequences accepted as input by assignment, mutation, search and comparison.
pub mod as_units;

/// Errors reported by checked operations.
pub mod error;

/// A fixed-capacity, terminator-delimited string of storage units.
pub mod fixed_string;

/// Storage units and the unit-operations trait.
pub mod unit;

pub use crate::as_units::AsUnits;
pub use crate::error::Error;
pub use crate::fixed_string::{
    FixedString, NPOS,
    cursor::{Cursor, CursorMut, RevCursor, RevCursorMut},
    iter::IntoIter,
};
pub use crate::unit::{AsciiCaseInsensitive, DefaultTraits, Unit, UnitTraits};

/// A narrow (byte) [`FixedString`] with a buffer of `N` bytes, terminator included.
///
/// # Examples
///
/// ```
/// use fixed_string::FixedStr;
///
/// let s = FixedStr::<3>::from("1234");
/// assert_eq!(s, "12");
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.max_size(), 2);
/// ```
pub type FixedStr<const N: usize> = FixedString<u8, N>;

/// A wide (UTF-16 code unit) [`FixedString`] with a buffer of `N` units, terminator included.
///
/// # Examples
///
/// ```
/// use fixed_string::WideFixedStr;
///
/// let s = WideFixedStr::<6>::from("w\u{e9}de!");
/// assert_eq!(s.len(), 5);
/// assert_eq!(s.to_string(), "w\u{e9}de!");
/// ```
pub type WideFixedStr<const N: usize> = FixedString<u16, N>;

/// Renders formatted text into a [`FixedString`], bounded by its capacity.
///
/// Expands to [`FixedString::format`] with [`format_args!`]; evaluates to the
/// number of units the untruncated output would have taken.
///
/// # Examples
///
/// ```
/// use fixed_string::{FixedStr, fixed_format};
///
/// let mut s = FixedStr::<8>::new();
/// let wanted = fixed_format!(s, "{}-{:04}", "id", 42);
/// assert_eq!(wanted, 7);
/// assert_eq!(s, "id-0042");
///
/// let wanted = fixed_format!(s, "{}", 1_234_567_890);
/// assert_eq!(wanted, 10);
/// assert_eq!(s, "1234567");
/// ```
#[macro_export]
macro_rules! fixed_format {
    ($dst:expr, $($arg:tt)*) => {
        $dst.format(::core::format_args!($($arg)*))
    };
}
