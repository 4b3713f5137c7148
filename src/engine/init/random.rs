/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    *state ^= *state << 13;
    *state ^= *state >> 17;
    *state ^= *state << 5;
    *state
}

/// Uniform float in `[0, 1)`.
#[inline]
pub(super) fn rand01(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 * (1.0 / 16_777_216.0)
}
