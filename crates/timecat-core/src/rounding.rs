//! Duration rounding to 30-minute reporting blocks.

/// Size of one reporting block in minutes.
pub const BLOCK_MINUTES: u32 = 30;

/// Round `minutes` up to the next multiple of 30.
///
/// `0 -> 0`, `1..=30 -> 30`, `31..=60 -> 60`. Saturates at the largest
/// multiple of 30 that fits in a `u32`.
pub fn round_up_30(minutes: u32) -> u32 {
    let blocks = minutes.div_ceil(BLOCK_MINUTES);
    blocks
        .checked_mul(BLOCK_MINUTES)
        .unwrap_or(u32::MAX - u32::MAX % BLOCK_MINUTES)
}
