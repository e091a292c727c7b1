//! Error types for decompression and packet framing.

use thiserror::Error;

/// Result type alias for decompression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Decompression and framing error types.
///
/// Decoder variants carry the number of output bytes that had been produced
/// when the failure was detected, so callers can log partial progress.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bitstream ran out without an end-of-stream marker.
    #[error("end-of-stream marker not found ({written} bytes decoded)")]
    EofNotFound { written: usize },

    /// The end-of-stream marker arrived before the input was fully consumed.
    #[error("{remaining} trailing input bytes after end-of-stream ({written} bytes decoded)")]
    InputNotConsumed { written: usize, remaining: usize },

    /// A read would extend past the end of the input.
    #[error("input overrun: {needed} bytes needed ({written} bytes decoded)")]
    InputOverrun { written: usize, needed: usize },

    /// A write would extend past the end of the output region.
    #[error("output overrun: {needed} bytes needed ({written} bytes decoded)")]
    OutputOverrun { written: usize, needed: usize },

    /// A match referenced data before the start of the emitted output.
    #[error("lookbehind overrun: offset {offset} with only {written} bytes emitted")]
    LookbehindOverrun { written: usize, offset: usize },

    /// An internal invariant was violated; either a decoder bug or input
    /// malformed in a way the cheaper checks could not classify.
    #[error("assertion failed: {message} ({written} bytes decoded)")]
    AssertFailed {
        written: usize,
        message: &'static str,
    },

    /// The packet's framing byte is not one of the recognized tags.
    #[error("unknown framing op 0x{op:02x}")]
    UnknownOp { op: u8 },
}

impl Error {
    /// Bytes written to the output before the failure, where applicable.
    pub fn written(&self) -> Option<usize> {
        match self {
            Error::EofNotFound { written }
            | Error::InputNotConsumed { written, .. }
            | Error::InputOverrun { written, .. }
            | Error::OutputOverrun { written, .. }
            | Error::LookbehindOverrun { written, .. }
            | Error::AssertFailed { written, .. } => Some(*written),
            Error::UnknownOp { .. } => None,
        }
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::EofNotFound { .. } => "eof_not_found",
            Error::InputNotConsumed { .. } => "input_not_consumed",
            Error::InputOverrun { .. } => "input_overrun",
            Error::OutputOverrun { .. } => "output_overrun",
            Error::LookbehindOverrun { .. } => "lookbehind_overrun",
            Error::AssertFailed { .. } => "assert_failed",
            Error::UnknownOp { .. } => "unknown_op",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_present_on_decoder_errors() {
        let err = Error::InputOverrun {
            written: 5,
            needed: 2,
        };
        assert_eq!(err.written(), Some(5));
        assert_eq!(err.category(), "input_overrun");
    }

    #[test]
    fn test_written_absent_on_framing_errors() {
        let err = Error::UnknownOp { op: 0x00 };
        assert_eq!(err.written(), None);
        assert_eq!(err.category(), "unknown_op");
    }

    #[test]
    fn test_display_mentions_progress() {
        let err = Error::LookbehindOverrun {
            written: 3,
            offset: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains('3'));
    }
}
