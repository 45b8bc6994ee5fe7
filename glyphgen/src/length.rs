/// Computes the minimum string length able to hold `count` distinct strings.
///
/// Returns the smallest `length >= 1` such that
/// `alphabet_size ^ length >= count`. For `count <= 1` this is the defensive
/// floor of 1; the coordinator never asks for a non-positive count, but the
/// function must not loop or panic if a caller does.
///
/// Pure and total: arithmetic runs in `u128` with saturation, so even a
/// `u64::MAX` count terminates without overflow.
pub fn min_length(alphabet_size: usize, count: u64) -> usize {
    if count <= 1 {
        return 1;
    }
    let base = alphabet_size.max(2) as u128;
    let mut length = 1;
    let mut capacity = base;
    while capacity < u128::from(count) {
        capacity = capacity.saturating_mul(base);
        length += 1;
    }
    length
}
