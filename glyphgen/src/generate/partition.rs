use crate::alphabet::Alphabet;

/// Prefixes never exceed this depth. Four symbols give `alphabet^4` distinct
/// starting points, enough to keep any realistic worker count apart while
/// staying cheap to compute.
pub const MAX_PREFIX_LEN: usize = 4;

/// Upper bound on the number of enumerated prefixes; large alphabets shrink
/// the prefix depth instead of materializing millions of starting points.
const MAX_PREFIXES: u128 = 1 << 16;

/// Assigns every subtree of the search space to a worker.
///
/// Enumerates all `a^depth` prefixes of depth `min(4, length)` in reflected
/// Gray code order and deals them round-robin across the workers. Worker
/// lists are pairwise disjoint and together cover the whole space exactly
/// once, for any worker count; a single worker simply receives every prefix.
/// The Gray order is cosmetic for correctness, but it hands adjacent
/// prefixes (differing in one symbol) to different workers, spreading the
/// initial positions across the enumeration order.
///
/// The returned vector may be shorter than `num_workers`: there is no point
/// launching more workers than there are subtrees, and the minimal-waste
/// choice is to leave the excess unlaunched rather than have them race over
/// someone else's region.
pub fn assign_prefixes(
    alphabet: &Alphabet,
    num_workers: usize,
    length: usize,
) -> Vec<Vec<String>> {
    let depth = prefix_depth(alphabet, length);
    let total = (alphabet.len() as u128).pow(depth as u32) as usize;
    let workers = num_workers.clamp(1, total);

    let mut assignments = vec![Vec::with_capacity(total / workers + 1); workers];
    for j in 0..total {
        assignments[j % workers].push(gray_prefix(alphabet, j, depth));
    }
    assignments
}

/// Prefix depth for this alphabet and target length: at most 4, at most the
/// target length, and never so deep that the prefix list itself gets large.
fn prefix_depth(alphabet: &Alphabet, length: usize) -> usize {
    let base = alphabet.len() as u128;
    let mut depth = length.min(MAX_PREFIX_LEN);
    while depth > 0 && base.pow(depth as u32) > MAX_PREFIXES {
        depth -= 1;
    }
    depth
}

/// Builds the `index`-th prefix in reflected Gray code order.
///
/// With base-`a` digits `d_0..d_k` of `index` (least significant first),
/// digit `j` of the Gray code is `(d_j - d_{j+1}) mod a`; for a two-symbol
/// alphabet this is the classic `i ^ (i >> 1)` bit pattern. Restricted to
/// `depth` digits the mapping is a bijection on `0..a^depth`, so enumerating
/// all indices yields every prefix exactly once.
fn gray_prefix(alphabet: &Alphabet, index: usize, depth: usize) -> String {
    let base = alphabet.len();

    let mut digits = vec![0; depth];
    let mut n = index;
    for digit in digits.iter_mut() {
        *digit = n % base;
        n /= base;
    }

    let mut prefix = String::with_capacity(depth * 4);
    for j in 0..depth {
        let next = if j + 1 < depth { digits[j + 1] } else { 0 };
        let gray_digit = (digits[j] + base - next) % base;
        prefix.push(alphabet.symbol(gray_digit));
    }
    prefix
}
