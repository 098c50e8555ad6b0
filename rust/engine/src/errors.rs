use thiserror::Error;

/// Pile kinds named in index errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileKind {
    Foundation,
    Tableau,
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileKind::Foundation => write!(f, "foundation"),
            PileKind::Tableau => write!(f, "tableau column"),
        }
    }
}

/// Why a stock draw or card move was rejected. A rejected operation never
/// changes the game state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Game already completed")]
    GameCompleted,
    #[error("Source pile is empty")]
    EmptySource,
    #[error("No {kind} with index {index}")]
    InvalidPileIndex { kind: PileKind, index: usize },
    #[error("Card index {index} out of range for a column of {len} cards")]
    InvalidCardIndex { index: usize, len: usize },
    #[error("Card at index {index} is face down")]
    FaceDownCard { index: usize },
    #[error("Only the top card of a column can move to a foundation")]
    NotTopCard,
    #[error("Card cannot be placed on foundation {index}")]
    IllegalFoundationPlacement { index: usize },
    #[error("Card cannot be placed on tableau column {index}")]
    IllegalTableauPlacement { index: usize },
    #[error("Source and destination are the same column")]
    SameColumn,
    #[error("Cards cannot move between foundations")]
    FoundationToFoundation,
    #[error("Cards below index {index} do not form a descending alternating run")]
    BrokenRun { index: usize },
    #[error("Stock and waste are both empty")]
    StockEmpty,
}

/// Failure of the initial deal. Only reachable when the deck was not reset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("Deck exhausted after dealing {dealt} cards")]
    DeckExhausted { dealt: usize },
}
