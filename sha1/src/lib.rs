//! An implementation of the [SHA-1][1] cryptographic hash algorithm.
//!
//! Two front ends share one compression core:
//!
//! - [`Sha1`], the [`Digest`] implementation, which composes with generic
//!   consumers of the `digest` traits (HMAC, `std::io::Write`, ...);
//! - [`Sha1Context`], a streaming hasher with an explicit lifecycle that
//!   reports misuse as [`Error`] values.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use sha1::{Sha1, Digest};
//!
//! // create a Sha1 hasher instance
//! let mut hasher = Sha1::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 20]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"));
//! ```
//!
//! The same digest through the streaming context:
//!
//! ```rust
//! use hex_literal::hex;
//! use sha1::{Error, Sha1Context};
//!
//! let mut ctx = Sha1Context::new();
//! ctx.update(b"hello ")?;
//! ctx.update(b"world")?;
//! assert_eq!(ctx.finalize()?, hex!("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"));
//!
//! // the context refuses input once the digest has been produced
//! assert!(ctx.update(b"!").is_err());
//! # Ok::<(), Error>(())
//! ```
//!
//! # Message length
//!
//! SHA-1 encodes the message length as a 64-bit bit count, so messages of
//! 2^61 bytes or more cannot be represented. [`Sha1Context`] refuses such
//! input with [`Error::LengthOverflow`]; [`Sha1`] and [`digest()`] let the
//! counter wrap.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-1

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use core::{fmt, slice::from_ref};
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U20, U64},
    HashMarker, Output,
};

mod compress;
mod consts;
mod context;
mod error;

#[cfg(feature = "compress")]
pub use compress::compress;
#[cfg(not(feature = "compress"))]
use compress::compress;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use context::{Phase, Sha1Context};
pub use error::Error;

use consts::{H0, STATE_LEN};

/// Core SHA-1 hasher state.
#[derive(Clone)]
pub struct Sha1Core {
    h: [u32; STATE_LEN],
    block_len: u64,
}

impl HashMarker for Sha1Core {}

impl BlockSizeUser for Sha1Core {
    type BlockSize = U64;
}

impl BufferKindUser for Sha1Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Sha1Core {
    type OutputSize = U20;
}

impl UpdateCore for Sha1Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        // Assumes that the bit length does not overflow
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        compress(&mut self.h, blocks);
    }
}

impl FixedOutputCore for Sha1Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bs = Self::BlockSize::U64;
        let bit_len = self
            .block_len
            .wrapping_mul(bs)
            .wrapping_add(buffer.get_pos() as u64)
            .wrapping_mul(8);

        let mut h = self.h;
        buffer.len64_padding_be(bit_len, |b| compress(&mut h, from_ref(b)));
        for (chunk, v) in out.chunks_exact_mut(4).zip(h.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }
}

impl Default for Sha1Core {
    #[inline]
    fn default() -> Self {
        Self {
            h: H0,
            block_len: 0,
        }
    }
}

impl Reset for Sha1Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Sha1Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha1")
    }
}

impl fmt::Debug for Sha1Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha1Core { ... }")
    }
}

/// SHA-1 hasher state.
pub type Sha1 = CoreWrapper<Sha1Core>;

/// Compute the SHA-1 digest of a whole message.
///
/// Same result as feeding `data` to a fresh [`Sha1Context`], in one call
/// or in any number of pieces, and finalizing it.
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha1::digest(data));
    out
}
