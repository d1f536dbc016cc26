use crate::decoder::decode_indices;
use crate::mapper::CaseMapper;
use crate::*;

use std::collections::HashMap;

use rand::Rng;

use super::assert_invariants;

/// Generates a random string consisting of `size` characters from `charset`.
fn generate_random_string(charset: &[char], size: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}

/// Generates a random haystack mixing characters from `charset` with
/// malformed UTF-8 bytes.
fn generate_random_haystack(charset: &[char], size: usize) -> Vec<u8> {
    const GARBAGE: &[u8] = &[0x80, 0xbf, 0xc3, 0xe3, 0xff];
    let mut rng = rand::thread_rng();
    let mut haystack = vec![];
    for _ in 0..size {
        if rng.gen_range(0..10) == 0 {
            haystack.push(GARBAGE[rng.gen_range(0..GARBAGE.len())]);
        } else {
            let c = charset[rng.gen_range(0..charset.len())];
            let mut buf = [0; 4];
            haystack.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }
    haystack
}

/// Generates a set of random patterns mapping random ids.
/// The argument `props = [(num, len)]` specifies to generate `num` strings of length `len`.
fn generate_random_patids(
    charset: &[char],
    props: &[(usize, usize)],
    mapper: CaseMapper,
) -> HashMap<String, i32> {
    let mut rng = rand::thread_rng();
    let mut patids = HashMap::new();
    for &(num, len) in props {
        for _ in 0..num {
            let pattern = generate_random_string(charset, len);
            let key: String = pattern.chars().map(|c| mapper.get(c)).collect();
            // Keys are compared after case mapping, so each folded pattern
            // appears once.
            patids
                .entry(key)
                .or_insert_with(|| (pattern, rng.gen_range(0..1000)));
        }
    }
    patids.into_values().collect()
}

/// Returns the end offset of the first position where a pattern completes and
/// the id and byte length of the longest pattern completing there.
fn naive_find(
    patids: &HashMap<String, i32>,
    haystack: &[u8],
    mapper: CaseMapper,
) -> Option<(usize, i32, usize)> {
    let folded: HashMap<Vec<char>, i32> = patids
        .iter()
        .map(|(p, &id)| (p.chars().map(|c| mapper.get(c)).collect(), id))
        .collect();
    let max_len = folded.keys().map(Vec::len).max().unwrap_or(0);
    let decoded: Vec<_> = decode_indices(haystack).collect();
    for end_idx in 0..decoded.len() {
        let mut found = None;
        for start_idx in ((end_idx + 1).saturating_sub(max_len)..=end_idx).rev() {
            let key: Vec<char> = decoded[start_idx..=end_idx]
                .iter()
                .map(|&(_, _, c)| mapper.get(c))
                .collect();
            if let Some(&id) = folded.get(&key) {
                let start = decoded[start_idx].0;
                found = Some((decoded[end_idx].1, id, decoded[end_idx].1 - start));
            }
        }
        if found.is_some() {
            return found;
        }
    }
    None
}

fn check_random(charset: &[char], case_insensitive: bool) {
    let mapper = CaseMapper::new(case_insensitive);
    for _ in 0..100 {
        let patids = generate_random_patids(charset, &[(20, 1), (50, 3), (50, 6)], mapper);
        let haystack = generate_random_haystack(charset, 200);

        let trie = AcTrieBuilder::new()
            .case_insensitive(case_insensitive)
            .build_with_ids(patids.iter().map(|(p, &id)| (p, id)))
            .unwrap();
        assert_invariants(&trie);

        let expected = naive_find(&patids, &haystack, mapper);
        let actual = trie.find(&haystack);
        match (expected, actual) {
            (None, None) => {}
            (Some((end, id, len)), Some(m)) => {
                assert_eq!(end, m.end());
                assert_eq!(id, m.pattern_id());
                assert!(m.start() <= end - len);
            }
            (e, a) => panic!("expected {e:?}, got {a:?}"),
        }
    }
}

#[test]
fn test_find_random() {
    check_random(&['r', 'a', 'n', 'd', 'o', 'm'], false);
}

#[test]
fn test_find_random_multibyte() {
    check_random(&['全', '世', '界', 'に', 'a', 'é'], false);
}

#[test]
fn test_find_random_case_insensitive() {
    check_random(&['r', 'A', 'n', 'D', 'Ö', 'ö', 'm'], true);
}

#[test]
fn test_incremental_invariants_random() {
    let charset = ['a', 'b', 'c', 'd'];
    for _ in 0..20 {
        let mut trie = AcTrie::new(false);
        for id in 0..50 {
            let len = rand::thread_rng().gen_range(1..8);
            let pattern = generate_random_string(&charset, len);
            trie.add(&pattern, id).unwrap();
            assert_invariants(&trie);
        }
    }
}
