//! 7-bag randomizer for piece generation
//!
//! All 7 tetromino kinds are shuffled into a bag and dealt out before
//! reshuffling, so every kind appears exactly once per bag and long
//! droughts cannot happen. Seedable for deterministic games.

use crate::tetromino::TetrominoType;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The 7-bag piece randomizer
#[derive(Debug, Clone)]
pub struct Bag {
    /// Lookahead queue of upcoming pieces, always at least one bag deep
    queue: Vec<TetrominoType>,
    rng: ChaCha8Rng,
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

impl Bag {
    /// Create a bag randomizer seeded from entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a bag randomizer with a fixed seed.
    ///
    /// Two bags built from the same seed deal identical sequences.
    pub fn with_seed(seed: u64) -> Self {
        let mut bag = Self {
            queue: Vec::with_capacity(14),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        // Keep two full bags queued so previews never run dry
        bag.refill();
        bag.refill();
        bag
    }

    /// Take the next piece from the queue
    pub fn next(&mut self) -> TetrominoType {
        if self.queue.len() <= 7 {
            self.refill();
        }
        self.queue.remove(0)
    }

    /// The next piece kind, without consuming it
    pub fn peek(&self) -> TetrominoType {
        self.queue[0]
    }

    /// Preview the next `count` pieces without removing them
    pub fn preview(&self, count: usize) -> &[TetrominoType] {
        &self.queue[..count.min(self.queue.len())]
    }

    /// Append a freshly shuffled bag to the queue
    fn refill(&mut self) {
        let mut new_bag = TetrominoType::all();
        new_bag.shuffle(&mut self.rng);
        self.queue.extend(new_bag);
    }
}
