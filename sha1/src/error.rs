//! Error type for the streaming hasher.

use crate::context::Phase;

/// Errors returned by [`Sha1Context`](crate::Sha1Context).
///
/// Hashing itself cannot fail; every variant reports a misuse of the
/// hasher's state machine or an input too large to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation is not legal in the hasher's current phase, e.g.
    /// `update` or `finalize` after the digest has already been produced.
    #[error("operation not permitted in phase {phase:?}")]
    InvalidState {
        /// Phase the hasher was in when the call was rejected.
        phase: Phase,
    },

    /// The total message length would no longer fit the 64-bit bit counter.
    #[error("message length exceeds 2^64 - 1 bits")]
    LengthOverflow,
}
