/*
 * Utility functions and consts used by the tests.
 *
 */

use rand::prelude::{Distribution, SmallRng};
use rand::{Rng, SeedableRng};
use rand_distr::Zipf;

/// Number of tokens of the generated texts.
pub const TEXT_LENGTH: usize = 20_000;

/// The characters the generated texts are made of, the most likely first.
const ALPHABET: &str =
    " etaoinshrdlcumwfgypbvkjxqz\nETAOINSHRDLCUMWFGYPBVKJXQZ0123456789.,;:!?'\"-\tàèéìòùñ€→";

/// Separators placed between the words of the generated texts.
const SEPARATORS: [&str; 4] = [" ", "  ", "\n", "\t "];

/// The sample texts of the character-level scenarios.
#[allow(dead_code)]
pub const CHAR_SAMPLES: [&str; 3] = [
    "aaaaaaaaaaaaaaaabbbbbbbbccccccdddddd",
    "Huffman coding is a data compression algorithm. It assigns shorter codes to more frequent characters.",
    "abcdefghiJKLMNO123456789!@#$%^&",
];

/// The sample texts of the word-level scenarios.
#[allow(dead_code)]
pub const WORD_SAMPLES: [&str; 3] = [
    "hello how are you hello how are you hello how are you hello how are you hello how are you",
    "Huffman coding is a data compression algorithm. Huffman coding assigns shorter codes to more frequent data.",
    "this is a worst case example for huffman coding algorithm where no any word being repeated, its used only ones",
];

/// Creates a text of [`TEXT_LENGTH`] characters drawn from a Zipfian distribution over
/// [`ALPHABET`].
#[allow(dead_code)]
pub fn zipfian_text(seed: u64, exponent: f64) -> String {
    let alphabet = ALPHABET.chars().collect::<Vec<_>>();
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Zipf::new(alphabet.len() as u64, exponent).unwrap();

    (0..TEXT_LENGTH)
        .map(|_| alphabet[distribution.sample(&mut rng) as usize - 1])
        .collect()
}

/// Creates a text of [`TEXT_LENGTH`] words drawn from a Zipfian distribution over a vocabulary
/// of `vocabulary` words, separated by random runs of whitespace.
#[allow(dead_code)]
pub fn zipfian_words(seed: u64, vocabulary: u64) -> String {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Zipf::new(vocabulary, 1.0).unwrap();
    let mut text = String::new();

    for _ in 0..TEXT_LENGTH {
        let rank = distribution.sample(&mut rng) as u64;
        text.push_str(&format!("w{}", rank));
        text.push_str(SEPARATORS[rng.gen_range(0..SEPARATORS.len())]);
    }
    text
}
