//! Synthetic workloads shared by the benchmarks and the memory report.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'k', 'l', 'm', 'n', 'o', 'r', 's', 't', 'u',
    'é', 'ß', '世', '界',
];

/// Generates `num` patterns of 3 to 10 characters from a fixed seed.
pub fn generate_patterns(num: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num)
        .map(|_| {
            let len = rng.gen_range(3..=10);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
                .collect()
        })
        .collect()
}

/// Generates a haystack of `len` characters that contains none of the
/// generated patterns, so a search scans it to the end.
pub fn generate_haystack(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    // 'z' never occurs in patterns, and every third character is 'z', so no
    // pattern of three or more characters fits.
    (0..len)
        .map(|i| {
            if i % 3 == 2 {
                'z'
            } else {
                ALPHABET[rng.gen_range(0..ALPHABET.len())]
            }
        })
        .collect()
}
