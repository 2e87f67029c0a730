#![allow(clippy::unreadable_literal)]

pub(crate) const STATE_LEN: usize = 5;

/// Size of one input block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

pub(crate) const H0: [u32; STATE_LEN] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of 20 rounds.
pub(crate) const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
