use core::str::Utf8Error;

/// Errors reported by the position-checked and conversion operations.
///
/// Growing operations never fail: they truncate to the content that fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A position argument lies past the bound of the sequence it indexes.
    #[error("`{op}`: position {pos} is out of range (limit {limit})")]
    OutOfRange {
        /// The operation that rejected the position.
        op: &'static str,
        /// The offending position.
        pos: usize,
        /// The largest position the operation accepts.
        limit: usize,
    },

    /// No terminator exists within the buffer.
    #[error("buffer has no terminator within its capacity")]
    Unterminated,

    /// Narrow content is not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}

impl Error {
    #[inline]
    pub(crate) const fn out_of_range(op: &'static str, pos: usize, limit: usize) -> Self {
        Self::OutOfRange { op, pos, limit }
    }
}
