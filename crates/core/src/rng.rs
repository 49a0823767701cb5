//! RNG module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (I, J, L, O, S, T, Z), shuffled.
//! Draws come off the front of an internal buffer; a fresh bag is appended
//! only when the buffer is empty, so every bag-aligned window of 7 draws
//! holds each kind exactly once.
//!
//! The shuffle source is a seedable `StdRng`: the same seed yields the same
//! piece sequence.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Upcoming kinds, front is drawn next
    pending: VecDeque<PieceKind>,
    /// RNG for shuffling
    rng: StdRng,
    /// Number of bags generated so far
    bags: u64,
}

impl PieceQueue {
    /// Create a new piece queue.
    ///
    /// `None` seeds the shuffle from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            pending: VecDeque::with_capacity(PieceKind::ALL.len()),
            rng,
            bags: 0,
        }
    }

    /// One uniformly shuffled permutation of all seven kinds.
    fn shuffled_bag(&mut self) -> [PieceKind; 7] {
        let mut bag = PieceKind::ALL;
        bag.shuffle(&mut self.rng);
        self.bags += 1;
        bag
    }

    /// Draw the next piece, starting a new bag when the current one is spent.
    pub fn next(&mut self) -> PieceKind {
        match self.pending.pop_front() {
            Some(kind) => kind,
            None => {
                let bag = self.shuffled_bag();
                self.pending.extend(&bag[1..]);
                bag[0]
            }
        }
    }

    /// Peek at the next piece of the current bag without drawing it.
    ///
    /// Returns `None` at a bag boundary, where the next kind has not been
    /// shuffled yet.
    pub fn peek(&self) -> Option<PieceKind> {
        self.pending.front().copied()
    }

    /// Kinds still waiting in the current bag.
    pub fn remaining_in_bag(&self) -> usize {
        self.pending.len()
    }

    /// Number of bags shuffled so far.
    pub fn bags_drawn(&self) -> u64 {
        self.bags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_deterministic_for_seed() {
        let mut a = PieceQueue::new(Some(12345));
        let mut b = PieceQueue::new(Some(12345));

        for _ in 0..100 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_piece_queue_draws_all_seven() {
        let mut queue = PieceQueue::new(Some(1));

        let mut drawn: Vec<PieceKind> = (0..7).map(|_| queue.next()).collect();
        drawn.sort();
        assert_eq!(drawn, PieceKind::ALL.to_vec());
    }

    #[test]
    fn test_bag_refills_only_when_empty() {
        let mut queue = PieceQueue::new(Some(7));
        assert_eq!(queue.remaining_in_bag(), 0);
        assert_eq!(queue.peek(), None);

        queue.next();
        assert_eq!(queue.bags_drawn(), 1);
        assert_eq!(queue.remaining_in_bag(), 6);

        for _ in 0..6 {
            queue.next();
        }
        assert_eq!(queue.bags_drawn(), 1);
        assert_eq!(queue.remaining_in_bag(), 0);

        queue.next();
        assert_eq!(queue.bags_drawn(), 2);
    }

    #[test]
    fn test_piece_queue_peek() {
        let mut queue = PieceQueue::new(Some(1));
        queue.next();

        let peeked = queue.peek().unwrap();
        assert_eq!(peeked, queue.next());
    }

    #[test]
    fn test_unseeded_queue_still_deals_bags() {
        let mut queue = PieceQueue::new(None);
        let mut drawn: Vec<PieceKind> = (0..7).map(|_| queue.next()).collect();
        drawn.sort();
        drawn.dedup();
        assert_eq!(drawn.len(), 7);
    }
}
