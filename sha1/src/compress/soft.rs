#![allow(clippy::many_single_char_names)]
use crate::consts::{BLOCK_LEN, K, STATE_LEN};

const SCHEDULE_LEN: usize = 80;

/// Expands one block into the 80-word message schedule.
#[inline(always)]
fn schedule(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in 16..SCHEDULE_LEN {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }
    w
}

/// Applies the SHA-1 block transform to `state`.
pub(crate) fn transform(state: &mut [u32; STATE_LEN], block: &[u8; BLOCK_LEN]) {
    let w = schedule(block);

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &wi) in w.iter().enumerate() {
        let f = match i / 20 {
            0 => (b & c) | (!b & d),
            1 | 3 => b ^ c ^ d,
            _ => (b & c) | (b & d) | (c & d),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[i / 20])
            .wrapping_add(wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e].iter()) {
        *s = s.wrapping_add(*v);
    }
}

pub(crate) fn compress(state: &mut [u32; STATE_LEN], blocks: &[[u8; BLOCK_LEN]]) {
    for block in blocks {
        transform(state, block);
    }
}
