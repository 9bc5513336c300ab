use core::{cmp::Ordering, fmt, fmt::Write as _, ops::Range};

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

/// A storage unit of a [`FixedString`](crate::FixedString).
///
/// A unit is one element of the backing array: a byte for narrow strings, a
/// UTF-16 code unit for wide strings, or a full 32-bit value. The zero value
/// [`Self::NUL`] is the terminator and never counts toward the logical length.
///
/// This trait is sealed; it is implemented for `u8`, `u16`, `u32` and `char`.
pub trait Unit: Copy + Eq + Ord + fmt::Debug + sealed::Sealed + 'static {
    /// The terminator.
    const NUL: Self;

    /// Widens the unit for hashing.
    fn to_usize(self) -> usize;

    /// Feeds `s` to `sink` encoded as units of this width.
    fn encode_str<F: FnMut(Self)>(s: &str, sink: F);

    /// Writes `units` for `{}` formatting, replacing undecodable units with U+FFFD.
    ///
    /// # Errors
    ///
    /// Propagates errors from the formatter.
    fn fmt_display(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Writes `units` as a quoted, escaped literal for `{:?}` formatting.
    ///
    /// # Errors
    ///
    /// Propagates errors from the formatter.
    fn fmt_debug(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Unit for u8 {
    const NUL: Self = 0;

    #[inline]
    fn to_usize(self) -> usize {
        usize::from(self)
    }

    #[inline]
    fn encode_str<F: FnMut(Self)>(s: &str, sink: F) {
        s.bytes().for_each(sink);
    }

    #[inline]
    fn fmt_display(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in units.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }

    #[inline]
    fn fmt_debug(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", units.escape_ascii())
    }
}

impl Unit for u16 {
    const NUL: Self = 0;

    #[inline]
    fn to_usize(self) -> usize {
        usize::from(self)
    }

    #[inline]
    fn encode_str<F: FnMut(Self)>(s: &str, sink: F) {
        s.encode_utf16().for_each(sink);
    }

    #[inline]
    fn fmt_display(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        char::decode_utf16(units.iter().copied())
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .try_for_each(|c| f.write_char(c))
    }

    #[inline]
    fn fmt_debug(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(c) => write!(f, "{}", c.escape_debug())?,
                Err(e) => write!(f, "\\u{{{:04x}}}", e.unpaired_surrogate())?,
            }
        }
        f.write_char('"')
    }
}

impl Unit for u32 {
    const NUL: Self = 0;

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }

    #[inline]
    fn encode_str<F: FnMut(Self)>(s: &str, sink: F) {
        s.chars().map(u32::from).for_each(sink);
    }

    #[inline]
    fn fmt_display(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        units
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
            .try_for_each(|c| f.write_char(c))
    }

    #[inline]
    fn fmt_debug(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for &u in units {
            match char::from_u32(u) {
                Some(c) => write!(f, "{}", c.escape_debug())?,
                None => write!(f, "\\u{{{u:x}}}")?,
            }
        }
        f.write_char('"')
    }
}

impl Unit for char {
    const NUL: Self = '\0';

    #[inline]
    fn to_usize(self) -> usize {
        u32::from(self) as usize
    }

    #[inline]
    fn encode_str<F: FnMut(Self)>(s: &str, sink: F) {
        s.chars().for_each(sink);
    }

    #[inline]
    fn fmt_display(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        units.iter().try_for_each(|&c| f.write_char(c))
    }

    #[inline]
    fn fmt_debug(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in units {
            write!(f, "{}", c.escape_debug())?;
        }
        f.write_char('"')
    }
}

/// Unit-level operations every [`FixedString`](crate::FixedString) algorithm routes through.
///
/// Equality, ordering, searching, bulk copies and hashing of units are all
/// looked up here instead of being written against `==` and `<` directly, so a
/// custom implementation changes the behaviour of search, comparison and
/// hashing consistently. Every method has a default that uses the unit's own
/// `Eq`/`Ord`; implementors usually override only [`Self::unit_eq`],
/// [`Self::unit_lt`] and [`Self::hash_unit`].
///
/// # Examples
///
/// ```
/// use fixed_string::{AsciiCaseInsensitive, FixedString};
///
/// let s: FixedString<u8, 16, AsciiCaseInsensitive> = "Hello World".into();
/// assert_eq!(s.find("WORLD", 0), 6);
/// assert_eq!(s, "hello world");
/// ```
pub trait UnitTraits<C: Unit> {
    /// Returns `true` if the two units are equal.
    #[inline]
    fn unit_eq(a: C, b: C) -> bool {
        a == b
    }

    /// Returns `true` if `a` orders before `b`.
    #[inline]
    fn unit_lt(a: C, b: C) -> bool {
        a < b
    }

    /// Compares the first `min(a.len(), b.len())` units of both slices.
    #[inline]
    fn compare_units(a: &[C], b: &[C]) -> Ordering {
        for (&x, &y) in a.iter().zip(b) {
            if Self::unit_lt(x, y) {
                return Ordering::Less;
            }
            if Self::unit_lt(y, x) {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// Returns the number of units before the first terminator, or `s.len()`.
    #[inline]
    fn length(s: &[C]) -> usize {
        s.iter().position(|&u| u == C::NUL).unwrap_or(s.len())
    }

    /// Returns the index of the first unit in `s` equal to `c`.
    #[inline]
    fn find_unit(s: &[C], c: C) -> Option<usize> {
        s.iter().position(|&u| Self::unit_eq(u, c))
    }

    /// Copies `src` into `dst`; both slices have the same length.
    #[inline]
    fn copy_units(dst: &mut [C], src: &[C]) {
        dst.copy_from_slice(src);
    }

    /// Moves `buf[src]` to start at `dest`; the ranges may overlap.
    #[inline]
    fn move_units(buf: &mut [C], src: Range<usize>, dest: usize) {
        buf.copy_within(src, dest);
    }

    /// Sets every unit of `dst` to `c`.
    #[inline]
    fn fill_units(dst: &mut [C], c: C) {
        dst.fill(c);
    }

    /// Maps a unit to the value folded into the content hash.
    ///
    /// Units that are [`Self::unit_eq`] must map to the same value.
    #[inline]
    fn hash_unit(c: C) -> usize {
        c.to_usize()
    }
}

/// Plain unit semantics: units compare by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultTraits;

impl<C: Unit> UnitTraits<C> for DefaultTraits {}

/// ASCII case-insensitive semantics for narrow strings.
///
/// Search, comparison and hashing treat `b'a'..=b'z'` and `b'A'..=b'Z'` as
/// equal; the stored content keeps its original case.
///
/// # Examples
///
/// ```
/// use fixed_string::{AsciiCaseInsensitive, FixedString};
///
/// let s: FixedString<u8, 8, AsciiCaseInsensitive> = "ABCeag".into();
/// assert_eq!(s.find_first_of(b'E', 0), 3);
/// assert_eq!(s.rfind(b'a', fixed_string::NPOS), 4);
/// assert!(s < "abcf");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AsciiCaseInsensitive;

impl UnitTraits<u8> for AsciiCaseInsensitive {
    #[inline]
    fn unit_eq(a: u8, b: u8) -> bool {
        a.eq_ignore_ascii_case(&b)
    }

    #[inline]
    fn unit_lt(a: u8, b: u8) -> bool {
        a.to_ascii_lowercase() < b.to_ascii_lowercase()
    }

    #[inline]
    fn hash_unit(c: u8) -> usize {
        usize::from(c.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_length_stops_at_terminator() {
        assert_eq!(<DefaultTraits as UnitTraits<u8>>::length(b"ab\0cd"), 2);
        assert_eq!(<DefaultTraits as UnitTraits<u8>>::length(b"abcd"), 4);
        assert_eq!(<DefaultTraits as UnitTraits<u16>>::length(&[0, 1]), 0);
    }

    #[test]
    fn default_compare_is_unit_wise() {
        assert_eq!(<DefaultTraits as UnitTraits<u8>>::compare_units(b"abc", b"abd"), Ordering::Less);
        assert_eq!(<DefaultTraits as UnitTraits<u8>>::compare_units(b"abd", b"abc"), Ordering::Greater);
        assert_eq!(<DefaultTraits as UnitTraits<u8>>::compare_units(b"ab", b"abc"), Ordering::Equal);
    }

    #[test]
    fn move_units_handles_overlap() {
        let mut buf = *b"abcde\0";
        <DefaultTraits as UnitTraits<u8>>::move_units(&mut buf, 0..3, 2);
        assert_eq!(&buf, b"ababc\0");
    }

    #[test]
    fn case_insensitive_traits() {
        assert!(AsciiCaseInsensitive::unit_eq(b'a', b'A'));
        assert!(!AsciiCaseInsensitive::unit_eq(b'a', b'b'));
        assert!(AsciiCaseInsensitive::unit_lt(b'A', b'b'));
        assert_eq!(AsciiCaseInsensitive::find_unit(b"xYz", b'y'), Some(1));
        assert_eq!(AsciiCaseInsensitive::hash_unit(b'Q'), AsciiCaseInsensitive::hash_unit(b'q'));
        assert_eq!(AsciiCaseInsensitive::compare_units(b"HeLLo", b"hello"), Ordering::Equal);
    }

    #[test]
    fn encode_str_per_width() {
        let mut narrow = [0_u8; 4];
        let mut i = 0;
        u8::encode_str("h\u{e9}", |u| {
            narrow[i] = u;
            i += 1;
        });
        assert_eq!(&narrow[..i], "h\u{e9}".as_bytes());

        let mut wide = [0_u16; 4];
        let mut j = 0;
        u16::encode_str("a\u{1d11e}", |u| {
            wide[j] = u;
            j += 1;
        });
        assert_eq!(&wide[..j], &[0x61, 0xd834, 0xdd1e]);
    }
}
