/// Iterates every 1 bit of the bytes, going from high to low within a byte.
///
/// This returns all bits in the sequence, so use `take` as necessary.
#[inline]
#[must_use]
pub fn iter_1bpp_high_to_low(bytes: &[u8]) -> impl Iterator<Item = bool> + '_ {
  bytes
    .iter()
    .copied()
    .flat_map(|byte| (0..8_u32).rev().map(move |shift| ((byte >> shift) & 1) != 0))
}
