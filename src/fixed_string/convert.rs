use super::FixedString;
use crate::{Error, Unit, UnitTraits};

use core::ffi::CStr;

#[cfg(feature = "alloc")]
use alloc::{
    string::{String, ToString as _},
    vec::Vec,
};

impl<C: Unit, const N: usize, T: UnitTraits<C>> From<&str> for FixedString<C, N, T> {
    /// Encodes `s` into units of type `C`, truncated to [`FixedString::max_size`] units.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{FixedStr, WideFixedStr};
    ///
    /// assert_eq!(FixedStr::<3>::from("1234"), "12");
    /// assert_eq!(WideFixedStr::<3>::from("1234").as_units(), &[0x31, 0x32]);
    /// ```
    #[inline]
    fn from(s: &str) -> Self {
        let mut out = Self::new();
        out.write_bounded(0, format_args!("{s}"), "from");
        out
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> From<&[C]> for FixedString<C, N, T> {
    /// Copies `units`, truncated to [`FixedString::max_size`].
    #[inline]
    fn from(units: &[C]) -> Self {
        Self::from_units(units)
    }
}

impl<C: Unit, const N: usize, const K: usize, T: UnitTraits<C>> From<[C; K]> for FixedString<C, N, T> {
    /// Copies a literal list of units, truncated to [`FixedString::max_size`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedString;
    ///
    /// let s = FixedString::<char, 3>::from(['1', '2', '3']);
    /// assert_eq!(s, ['1', '2']);
    /// ```
    #[inline]
    fn from(units: [C; K]) -> Self {
        Self::from_units(&units)
    }
}

impl<C: Unit, const N: usize, const M: usize, T: UnitTraits<C>> From<&FixedString<C, M, T>> for FixedString<C, N, T> {
    /// Copies the content of a string of any capacity, truncated to [`FixedString::max_size`].
    #[inline]
    fn from(other: &FixedString<C, M, T>) -> Self {
        Self::from_units(other)
    }
}

impl<const N: usize, T: UnitTraits<u8>> From<&CStr> for FixedString<u8, N, T> {
    /// Copies the bytes of `s` before its terminator, truncated to [`FixedString::max_size`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// assert_eq!(FixedStr::<4>::from(c"hello"), "hel");
    /// ```
    #[inline]
    fn from(s: &CStr) -> Self {
        Self::from_units(s.to_bytes())
    }
}

impl<const N: usize, T: UnitTraits<u8>> FixedString<u8, N, T> {
    /// Returns the content as bytes.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.as_units()
    }

    /// Returns the content as a string slice.
    ///
    /// # Errors
    ///
    /// [`Error::Utf8`] if the content is not valid UTF-8, which truncation
    /// through the middle of a multi-byte character can cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// assert_eq!(FixedStr::<8>::from("h\u{e9}").to_str(), Ok("h\u{e9}"));
    /// assert!(FixedStr::<3>::from("h\u{e9}").to_str().is_err());
    /// ```
    #[inline]
    pub fn to_str(&self) -> Result<&str, Error> {
        Ok(core::str::from_utf8(self.as_units())?)
    }

    /// Returns the content and its terminator as a [`CStr`].
    ///
    /// # Errors
    ///
    /// [`Error::Unterminated`] if the buffer has lost its terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::{Error, FixedStr};
    ///
    /// let mut s = FixedStr::<4>::from("abc");
    /// assert_eq!(s.as_c_str(), Ok(c"abc"));
    ///
    /// s[3] = b'!';
    /// assert_eq!(s.as_c_str(), Err(Error::Unterminated));
    /// ```
    #[doc(alias = "c_str")]
    #[inline]
    pub fn as_c_str(&self) -> Result<&CStr, Error> {
        CStr::from_bytes_until_nul(&self.buf).map_err(|_| Error::Unterminated)
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<C: Unit, const N: usize, T: UnitTraits<C>> From<&String> for FixedString<C, N, T> {
    #[inline]
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<C: Unit, const N: usize, T: UnitTraits<C>> From<FixedString<C, N, T>> for String {
    /// Decodes the content; undecodable units become U+FFFD.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::WideFixedStr;
    ///
    /// let s = WideFixedStr::<8>::from("wide");
    /// assert_eq!(String::from(s), "wide");
    /// ```
    #[inline]
    fn from(s: FixedString<C, N, T>) -> Self {
        s.to_string()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<C: Unit, const N: usize, T: UnitTraits<C>> From<FixedString<C, N, T>> for Vec<C> {
    #[inline]
    fn from(s: FixedString<C, N, T>) -> Self {
        s.to_vec()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<C: Unit, const N: usize, T: UnitTraits<C>> FixedString<C, N, T> {
    /// Copies the content into a [`Vec`].
    #[must_use]
    #[inline]
    pub fn to_vec(&self) -> Vec<C> {
        self.as_units().to_vec()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<const N: usize, T: UnitTraits<u8>> std::io::Write for FixedString<u8, N, T> {
    /// Appends as many bytes of `buf` as fit and returns how many that was.
    ///
    /// Returns `Ok(0)` once the content is full, so [`std::io::Write::write_all`]
    /// reports [`std::io::ErrorKind::WriteZero`] instead of truncating silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Write;
    /// use fixed_string::FixedStr;
    ///
    /// let mut s = FixedStr::<6>::new();
    /// assert_eq!(s.write(b"abc").unwrap(), 3);
    /// assert_eq!(s.write(b"defg").unwrap(), 2);
    /// assert_eq!(s.write(b"h").unwrap(), 0);
    /// assert_eq!(s, "abcde");
    /// assert!(s.write_all(b"h").is_err());
    /// ```
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.remaining_capacity());
        self.append(&buf[..n]);
        Ok(n)
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
