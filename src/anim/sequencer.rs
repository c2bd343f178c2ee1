//! Randomized traversal order over the arrangement table
//!
//! A Fisher-Yates shuffle fixes the visiting order once at startup, so every
//! arrangement is shown exactly once per pass through the order - unlike
//! drawing the next group independently at random, which could repeat the
//! group currently on screen.

use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffled permutation of arrangement indices with a wrapping cursor
#[derive(Debug, Clone)]
pub struct Sequencer {
    order: Vec<usize>,
    cursor: usize,
}

impl Sequencer {
    /// Shuffle `0..n` with the given RNG. `n` must be at least 1; a single
    /// entry degenerates to the group morphing into itself.
    pub fn new(n: usize, rng: &mut impl Rng) -> Self {
        assert!(n >= 1, "sequencer needs at least one arrangement");
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self { order, cursor: 0 }
    }

    /// Index of the arrangement currently on screen
    pub fn current(&self) -> usize {
        self.order[self.cursor]
    }

    /// Index of the arrangement being morphed toward
    pub fn peek_next(&self) -> usize {
        self.order[(self.cursor + 1) % self.order.len()]
    }

    /// Move to the next arrangement, wrapping at the end of the order
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.order.len();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position within the order (not the arrangement index)
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
