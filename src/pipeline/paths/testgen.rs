//! Seeded generators for property-style tests over key shapes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CASES: usize = 200;

const ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SEGMENT_TAIL: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_-";
const BASENAME_TAIL: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_- ";

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn pick(rng: &mut StdRng, alphabet: &[u8]) -> char {
    alphabet[rng.gen_range(0..alphabet.len())] as char
}

fn word(rng: &mut StdRng, tail: &[u8], max_tail: usize) -> String {
    let mut out = String::new();
    out.push(pick(rng, ALNUM));
    for _ in 0..rng.gen_range(0..=max_tail) {
        out.push(pick(rng, tail));
    }
    out
}

/// `[A-Za-z0-9][A-Za-z0-9_-]{0,19}`
pub fn folder_segment(rng: &mut StdRng) -> String {
    word(rng, SEGMENT_TAIL, 19)
}

/// Zero to five segments, each followed by `/`.
pub fn folder_prefix(rng: &mut StdRng) -> String {
    let depth = rng.gen_range(0..=5);
    (0..depth)
        .map(|_| format!("{}/", folder_segment(rng)))
        .collect()
}

/// `[A-Za-z0-9][A-Za-z0-9 _-]{0,29}`
pub fn basename(rng: &mut StdRng) -> String {
    word(rng, BASENAME_TAIL, 29)
}

pub fn chunk_index(rng: &mut StdRng) -> usize {
    rng.gen_range(1..=1000)
}
