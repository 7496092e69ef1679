//! Procedural cloud texture for the gas shells.

use rand::prelude::*;

use crate::constants::CLOUD_ALPHA_CUT;

/// RGBA8 speckle texture for the gas shells: a fixed cyan tint with random
/// alpha, most texels fully transparent.
pub fn cloud_texture(size: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let texels = (size as usize) * (size as usize);
    let mut data = Vec::with_capacity(texels * 4);
    for _ in 0..texels {
        let val: u8 = rng.gen_range(0..255);
        data.extend_from_slice(&[0, 200, 255, val.saturating_sub(CLOUD_ALPHA_CUT)]);
    }
    data
}
