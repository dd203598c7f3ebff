// Consecutive pairs of a cyclic sequence, wrapping from the last element back to
// the first. Empty for an empty slice; a single element pairs with itself.
pub fn cyclic_pairs<E>(slice: &[E]) -> impl Iterator<Item = (&E, &E)> {
  slice
    .iter()
    .zip(slice.iter().skip(1).chain(slice.first()))
}

// Position of `idx` in a sequence of length `len`, wrapping negative and
// out-of-range indices. `len` must be positive.
pub fn wrap_index(idx: isize, len: usize) -> usize {
  debug_assert!(len > 0);
  idx.rem_euclid(len as isize) as usize
}
