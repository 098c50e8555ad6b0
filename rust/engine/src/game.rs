use serde::{Deserialize, Serialize};

use crate::cards::{Card, PileCard};

pub const FOUNDATION_COUNT: usize = 4;
pub const TABLEAU_COUNT: usize = 7;
pub const SUIT_SIZE: usize = 13;
pub const DECK_SIZE: usize = 52;

/// Snapshot of every pile in a Klondike game plus the running score and move
/// counter. The [`crate::engine::Engine`] owns the live instance; hosts read it
/// for rendering and compare snapshots with `==`.
///
/// All piles are stored bottom to top: the last element is the top card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down draw pile
    pub stock: Vec<PileCard>,
    /// Face-up discard pile fed by the stock
    pub waste: Vec<PileCard>,
    /// Four build slots, each an ascending same-suit run from the ace
    pub foundations: [Vec<PileCard>; FOUNDATION_COUNT],
    /// Seven columns: face-down cards followed by a face-up run
    pub tableau: [Vec<PileCard>; TABLEAU_COUNT],
    /// Accumulated score; only grows during play
    pub score: u32,
    /// Number of successful state-changing operations
    pub moves: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_game_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == SUIT_SIZE)
    }

    pub fn top_card(pile: &[PileCard]) -> Option<&PileCard> {
        pile.last()
    }

    pub fn top_foundation_card(&self, index: usize) -> Option<&Card> {
        self.foundations.get(index)?.last().map(|pc| &pc.card)
    }

    pub fn top_waste_card(&self) -> Option<&Card> {
        self.waste.last().map(|pc| &pc.card)
    }

    /// The face-up cards of a column, bottom to top. Empty for an unknown column.
    pub fn visible_tableau_cards(&self, column: usize) -> Vec<Card> {
        self.tableau
            .get(column)
            .map(|col| col.iter().filter(|pc| pc.face_up).map(|pc| pc.card).collect())
            .unwrap_or_default()
    }

    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    pub fn has_hidden_tableau_cards(&self) -> bool {
        self.tableau.iter().flatten().any(|pc| !pc.face_up)
    }

    /// Every card in the game, pile by pile: stock, waste, foundations, tableau.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
            .map(|pc| &pc.card)
    }

    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }
}
