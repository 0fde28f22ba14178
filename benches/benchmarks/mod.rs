use rand::prelude::{Distribution, SmallRng};
use rand::SeedableRng;
use rand_distr::Zipf;

pub mod decoder;
pub mod encoder;
pub mod tree;

/// Number of characters of the text used to bench.
const TEXT_LENGTH: usize = 500_000;

/// Number of distinct characters the zipfian distribution can output.
const ALPHABET_SIZE: u32 = 2_000;

/// Creates a text of [`TEXT_LENGTH`] characters sampled from a Zipfian distribution over
/// [`ALPHABET_SIZE`] code points.
pub fn get_text() -> String {
    let mut rng = SmallRng::seed_from_u64(0);
    let distribution = Zipf::new(ALPHABET_SIZE as u64, 1.0).unwrap();

    (0..TEXT_LENGTH)
        .map(|_| {
            let rank = distribution.sample(&mut rng) as u32;
            char::from_u32(0x20 + rank).unwrap_or('?')
        })
        .collect()
}
