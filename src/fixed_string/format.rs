use super::{FixedString, trace_truncation};
use crate::{Unit, UnitTraits};

use core::fmt::{self, Write as _};

/// Encodes formatted text into a slice, counting what does not fit.
struct BoundedWriter<'a, C> {
    buf: &'a mut [C],
    end: usize,
    dropped: usize,
}

impl<C: Unit> fmt::Write for BoundedWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        C::encode_str(s, |unit| match self.buf.get_mut(self.end) {
            Some(slot) => {
                *slot = unit;
                self.end += 1;
            }
            None => self.dropped += 1,
        });
        Ok(())
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> FixedString<C, N, T> {
    /// Encodes `args` into the buffer from `start` on, bounded by [`Self::max_size`], and terminates.
    ///
    /// Returns the new length and the number of units that did not fit.
    pub(super) fn write_bounded(&mut self, start: usize, args: fmt::Arguments<'_>, op: &'static str) -> (usize, usize) {
        let mut writer = BoundedWriter { buf: &mut self.buf[..Self::MAX_SIZE], end: start, dropped: 0 };
        if writer.write_fmt(args).is_err() {
            log::trace!(target: "fixed_string", "`{op}`: a formatting trait implementation returned an error");
        }
        let BoundedWriter { end, dropped, .. } = writer;
        self.buf[end] = C::NUL;
        if dropped > 0 {
            trace_truncation(op, end + dropped, end);
        }
        (end, dropped)
    }

    /// Replaces the content with formatted text, bounded by [`Self::max_size`].
    ///
    /// Text is encoded into units of type `C`; output that does not fit is
    /// dropped unit by unit, so a multi-unit character may be cut. Returns the
    /// number of units the complete output would have taken, which exceeds
    /// [`Self::max_size`] exactly when something was dropped.
    ///
    /// See also the [`fixed_format!`](crate::fixed_format) macro.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<6>::from("stale content");
    /// assert_eq!(s.format(format_args!("{}+{}", 2, 3)), 3);
    /// assert_eq!(s, "2+3");
    ///
    /// assert_eq!(s.format(format_args!("{:>8}", "x")), 8);
    /// assert_eq!(s, "     ");
    /// ```
    #[doc(alias = "sprintf")]
    #[inline]
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> usize {
        let (end, dropped) = self.write_bounded(0, args, "format");
        end + dropped
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> fmt::Write for FixedString<C, N, T> {
    /// Appends `s`, truncating whatever does not fit.
    ///
    /// # Errors
    ///
    /// [`fmt::Error`] if any unit was dropped. The units that fit are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt::Write;
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<8>::from("n=");
    /// assert!(write!(s, "{}", 42).is_ok());
    /// assert_eq!(s, "n=42");
    ///
    /// assert!(write!(s, "{}", 12345).is_err());
    /// assert_eq!(s, "n=42123");
    /// ```
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let len = self.len();
        let (_, dropped) = self.write_bounded(len, format_args!("{s}"), "write_str");
        if dropped > 0 { Err(fmt::Error) } else { Ok(()) }
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> fmt::Display for FixedString<C, N, T> {
    /// Writes the content decoded as text; undecodable units become U+FFFD.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        C::fmt_display(self.as_units(), f)
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> fmt::Debug for FixedString<C, N, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        C::fmt_debug(self.as_units(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FixedStr, FixedString, WideFixedStr, fixed_format, fixed_string::trace_capture::capture_traces};

    use alloc::{format, string::ToString as _};
    use core::fmt::Write as _;

    #[test]
    fn format_returns_untruncated_count() {
        let mut s = FixedStr::<4>::new();
        assert_eq!(fixed_format!(s, "{}", "abcdef"), 6);
        assert_eq!(s, "abc");
        assert_eq!(s.as_units_with_nul(), b"abc\0");

        assert_eq!(fixed_format!(s, ""), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn format_into_single_unit_buffer() {
        let mut s = FixedStr::<1>::new();
        assert_eq!(fixed_format!(s, "{}", 7), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn wide_format_counts_code_units() {
        let mut s = WideFixedStr::<4>::new();
        assert_eq!(fixed_format!(s, "a\u{1d11e}b"), 4);
        assert_eq!(s.as_units(), &[0x61, 0xd834, 0xdd1e]);
    }

    #[test]
    fn write_appends_until_full() {
        let mut s = FixedStr::<6>::from("ab");
        assert!(s.write_str("cd").is_ok());
        assert!(s.write_char('e').is_ok());
        assert!(s.write_char('f').is_err());
        assert_eq!(s, "abcde");
    }

    #[test]
    fn overflow_is_an_error_only_through_fmt_write() {
        let traces = capture_traces(|| {
            let mut s = FixedStr::<4>::new();
            assert_eq!(fixed_format!(s, "{}", "abcdef"), 6);
            assert_eq!(s.as_units_with_nul(), b"abc\0");

            let mut s = FixedStr::<4>::from("ab");
            assert!(write!(s, "{}", "cde").is_err());
            assert_eq!(s.as_units_with_nul(), b"abc\0");
        });
        assert_eq!(
            traces,
            [
                "`format`: content truncated to 3 of 6 units",
                "`write_str`: content truncated to 3 of 5 units",
            ]
        );
    }

    #[test]
    fn display_and_debug_per_unit_type() {
        let narrow = FixedStr::<8>::from(&b"a\"\xffb"[..]);
        assert_eq!(narrow.to_string(), "a\"\u{fffd}b");
        assert_eq!(format!("{narrow:?}"), "\"a\\\"\\xffb\"");

        let wide = WideFixedStr::<8>::from(&[0x68_u16, 0xd800, 0x69][..]);
        assert_eq!(wide.to_string(), "h\u{fffd}i");
        assert_eq!(format!("{wide:?}"), "\"h\\u{d800}i\"");

        let chars = FixedString::<char, 8>::from("t\u{e9}\n");
        assert_eq!(chars.to_string(), "t\u{e9}\n");
        assert_eq!(format!("{chars:?}"), "\"t\u{e9}\\n\"");

        let wide32 = FixedString::<u32, 4>::from(&[0x41_u32, 0x11_0000][..]);
        assert_eq!(wide32.to_string(), "A\u{fffd}");
        assert_eq!(format!("{wide32:?}"), "\"A\\u{110000}\"");
    }
}
