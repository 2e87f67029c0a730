use crate::consts::{BLOCK_LEN, STATE_LEN};
use digest::{consts::U64, generic_array::GenericArray};

cfg_if::cfg_if! {
    if #[cfg(feature = "force-soft")] {
        mod soft;
        use soft::compress as compress_inner;
    } else if #[cfg(all(feature = "asm", any(target_arch = "x86", target_arch = "x86_64")))] {
        fn compress_inner(state: &mut [u32; STATE_LEN], blocks: &[[u8; BLOCK_LEN]]) {
            sha1_asm::compress(state, blocks);
        }
    } else {
        mod soft;
        use soft::compress as compress_inner;
    }
}

/// SHA-1 compression function.
///
/// Runs the block transform over every block in order. Padding is never
/// applied here: callers are responsible for feeding whole 64-byte blocks.
pub fn compress(state: &mut [u32; STATE_LEN], blocks: &[GenericArray<u8, U64>]) {
    // SAFETY: GenericArray<u8, U64> and [u8; 64] have
    // exactly the same memory layout
    #[allow(unsafe_code)]
    let blocks: &[[u8; BLOCK_LEN]] = unsafe { &*(blocks as *const _ as *const [[u8; BLOCK_LEN]]) };
    compress_inner(state, blocks)
}
