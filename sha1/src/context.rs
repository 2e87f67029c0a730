//! Streaming hasher with an explicit lifecycle.

use core::fmt;

use digest::{
    core_api::{Buffer, FixedOutputCore, UpdateCore},
    Output,
};

use crate::{consts::DIGEST_LEN, Error, Sha1Core};

/// Lifecycle phase of a [`Sha1Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly initialized, no `update` call accepted yet.
    Empty,
    /// At least one `update` call accepted, digest not yet produced.
    Accumulating,
    /// Digest produced; only [`Sha1Context::init`] is accepted.
    Finalized,
}

/// SHA-1 hasher that tracks its own lifecycle.
///
/// Unlike [`Sha1`](crate::Sha1), which is consumed or reset by the `Digest`
/// API, a context stays around after finalization and rejects further
/// input with [`Error::InvalidState`] until [`init`](Self::init) is called.
/// Finalization is not idempotent: the second `finalize` call fails too.
///
/// The bit counter is checked, so inputs totalling more than 2^64 - 1 bits
/// are refused with [`Error::LengthOverflow`] instead of wrapping.
#[derive(Clone)]
pub struct Sha1Context {
    core: Sha1Core,
    buffer: Buffer<Sha1Core>,
    bit_len: u64,
    phase: Phase,
}

impl Sha1Context {
    /// Create a context in the [`Phase::Empty`] phase.
    pub fn new() -> Self {
        Self {
            core: Sha1Core::default(),
            buffer: Default::default(),
            bit_len: 0,
            phase: Phase::Empty,
        }
    }

    /// Reset to the initial state, discarding buffered input.
    ///
    /// Legal in every phase.
    pub fn init(&mut self) {
        *self = Self::new();
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of message bits accepted since the last `init`.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Feed more message bytes.
    ///
    /// Complete 64-byte blocks are compressed immediately; at most 63 bytes
    /// are carried over to the next call. A rejected call leaves the
    /// context untouched.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.phase == Phase::Finalized {
            tracing::debug!(len = data.len(), "sha1: update after finalize rejected");
            return Err(Error::InvalidState { phase: self.phase });
        }

        let bit_len = (data.len() as u64)
            .checked_mul(8)
            .and_then(|bits| self.bit_len.checked_add(bits))
            .ok_or_else(|| {
                tracing::debug!(
                    bit_len = self.bit_len,
                    len = data.len(),
                    "sha1: message length overflow"
                );
                Error::LengthOverflow
            })?;

        let Self { core, buffer, .. } = self;
        buffer.digest_blocks(data, |blocks| core.update_blocks(blocks));
        self.bit_len = bit_len;
        self.phase = Phase::Accumulating;
        Ok(())
    }

    /// Pad the buffered tail, run the final block(s) and return the digest.
    pub fn finalize(&mut self) -> Result<[u8; DIGEST_LEN], Error> {
        if self.phase == Phase::Finalized {
            tracing::debug!("sha1: repeated finalize rejected");
            return Err(Error::InvalidState { phase: self.phase });
        }
        tracing::trace!(bit_len = self.bit_len, "sha1: finalizing");

        let mut out = Output::<Sha1Core>::default();
        self.core.finalize_fixed_core(&mut self.buffer, &mut out);
        self.phase = Phase::Finalized;

        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&out);
        Ok(digest)
    }
}

impl Default for Sha1Context {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha1Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha1Context")
            .field("phase", &self.phase)
            .field("bit_len", &self.bit_len)
            .finish_non_exhaustive()
    }
}
