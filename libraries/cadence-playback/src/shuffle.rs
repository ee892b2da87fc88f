//! Randomness used by shuffle mode
//!
//! Shuffle needs two things: a uniform pick of "some other song" on advance,
//! and a Fisher-Yates permutation for the up-next preview. Both go through
//! [`ShuffleSource`] so the engine can run on entropy in production and on a
//! seeded generator in tests.

use cadence_core::Song;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of shuffle decisions
pub trait ShuffleSource: Send {
    /// Pick an index in `0..len` uniformly, never `exclude` unless it is the only index
    ///
    /// `len` must be non-zero.
    fn pick_other(&mut self, len: usize, exclude: Option<usize>) -> usize;

    /// Permute songs uniformly in place
    fn shuffle(&mut self, songs: &mut [Song]);
}

impl<R: Rng + Send> ShuffleSource for R {
    fn pick_other(&mut self, len: usize, exclude: Option<usize>) -> usize {
        match exclude {
            // Only one candidate: re-select it
            Some(current) if len <= 1 => current,
            Some(current) => {
                let pick = self.gen_range(0..len - 1);
                if pick >= current {
                    pick + 1
                } else {
                    pick
                }
            }
            None => self.gen_range(0..len),
        }
    }

    fn shuffle(&mut self, songs: &mut [Song]) {
        SliceRandom::shuffle(songs, self);
    }
}

/// Build the default source: seeded when a seed is given, entropy otherwise
pub fn shuffle_source(seed: Option<u64>) -> Box<dyn ShuffleSource> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    }
}
