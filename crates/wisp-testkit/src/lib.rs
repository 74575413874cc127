//! Small helpers for building fixtures in tests.
//!
//! Keeping these in a microcrate avoids copy-paste across the other
//! crates' test suites. Everything here is deterministic so assertions
//! can be written against exact values.

use serde_json::{Value, json};

/// A plausible user record with the shapes schema tests care about.
pub fn sample_user() -> Value {
    json!({
        "name": "Ada Lovelace",
        "age": 36,
        "email": "ada@example.com",
        "tags": ["mathematics", "computing"],
    })
}

/// A nested document mixing every JSON type.
pub fn sample_document() -> Value {
    json!({
        "id": 7,
        "title": "Notes",
        "published": true,
        "rating": 4.5,
        "subtitle": null,
        "sections": [
            { "heading": "Intro", "words": 120 },
            { "heading": "Body", "words": 840 },
        ],
        "meta": { "revision": 3 },
    })
}

/// Deterministic pseudo-words: `count` lowercase strings, no repeats
/// for any reasonable count, stable across runs.
pub fn pseudo_words(count: usize) -> Vec<String> {
    let consonants = b"bcdfglmnprstvz";
    let vowels = b"aeiou";
    // Linear congruential generator; constants from Numerical Recipes.
    let mut state: u64 = 0x5eed;
    let mut next = move |bound: usize| {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        (state >> 16) as usize % bound
    };
    (0..count)
        .map(|index| {
            let mut word = String::new();
            for _ in 0..3 {
                word.push(consonants[next(consonants.len())] as char);
                word.push(vowels[next(vowels.len())] as char);
            }
            // Suffix the index so words never collide.
            word.push_str(&index.to_string());
            word
        })
        .collect()
}

/// `count` distinct `(word, index)` pairs for map fixtures.
pub fn keyed_pairs(count: usize) -> Vec<(String, i64)> {
    pseudo_words(count)
        .into_iter()
        .enumerate()
        .map(|(index, word)| (word, index as i64))
        .collect()
}

/// Pairs where every key appears `per_key` times, for multimap fixtures.
pub fn repeated_pairs(keys: usize, per_key: usize) -> Vec<(String, i64)> {
    pseudo_words(keys)
        .into_iter()
        .enumerate()
        .flat_map(|(index, word)| {
            (0..per_key).map(move |offset| (word.clone(), (index * per_key + offset) as i64))
        })
        .collect()
}
