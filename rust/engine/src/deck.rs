use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The undealt cards of one game, shuffled by a ChaCha20 stream.
///
/// A seeded deck produces the same sequence of shuffles every time, which
/// makes whole series of games reproducible.
///
/// # Examples
///
/// ```
/// use klondike_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(7);
/// deck.reset();
/// assert_eq!(deck.remaining(), 52);
/// let first = deck.deal();
/// assert!(first.is_some());
/// assert_eq!(deck.remaining(), 51);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Deck seeded from the thread RNG; every shuffle is unpredictable.
    pub fn new() -> Self {
        Self::from_rng(ChaCha20Rng::from_rng(&mut rand::rng()))
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha20Rng) -> Self {
        // Empty until the first reset
        Self {
            cards: Vec::new(),
            position: 0,
            rng,
        }
    }

    /// Rebuilds all 52 cards and shuffles them.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
        self.shuffle();
    }

    /// Shuffles the undealt cards in place.
    pub fn shuffle(&mut self) {
        self.cards[self.position..].shuffle(&mut self.rng);
    }

    /// Removes and returns the front card, or `None` once the deck is drained.
    pub fn deal(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
