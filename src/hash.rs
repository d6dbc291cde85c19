use std::hash::{Hash, Hasher};

use ahash::RandomState;

// Fixed so that every wrapper hashes its elements the same way.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

fn element_hasher() -> RandomState {
    let [k0, k1, k2, k3] = SEEDS;
    RandomState::with_seeds(k0, k1, k2, k3)
}

/// Feeds `state` a hash of `items` that does not depend on their order.
///
/// Every element is hashed on its own and the results are summed, so equal
/// multisets hash equal whatever order they are iterated in. Unlike XOR the
/// sum keeps duplicates apart: `[1, 1]` and `[]` differ.
pub(crate) fn hash_unordered<'a, T, I, H>(items: I, state: &mut H)
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
    H: Hasher,
{
    let factory = element_hasher();
    let mut res = 0u64;
    let mut len = 0usize;
    for elem in items {
        res = res.wrapping_add(factory.hash_one(elem));
        len += 1;
    }
    state.write_u64(res);
    state.write_usize(len);
}
