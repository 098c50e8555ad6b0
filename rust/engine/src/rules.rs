use serde::{Deserialize, Serialize};

use crate::cards::{Card, PileCard, Rank};
use crate::errors::{MoveError, PileKind};
use crate::game::{GameState, FOUNDATION_COUNT, TABLEAU_COUNT};

/// Where a move takes its card(s) from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// Top card of the waste
    Waste,
    /// The card at `card_index` of a column together with every card above it
    Tableau { column: usize, card_index: usize },
    /// Top card of a foundation
    Foundation(usize),
}

/// Where a move puts its card(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDestination {
    Foundation(usize),
    Tableau(usize),
}

/// A move that passed every legality check against a particular state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    pub source: MoveSource,
    pub destination: MoveDestination,
    /// The card that lands directly on the destination
    pub card: Card,
    /// Number of cards travelling together (always 1 for foundations)
    pub count: usize,
}

/// Checks a move against `state` without changing anything.
///
/// Every legality decision in the engine goes through this function, so an
/// `Ok` here is exactly the set of moves [`crate::engine::Engine::move_card`]
/// will perform.
///
/// # Errors
///
/// Returns the first [`MoveError`] that rules the move out, e.g.
/// [`MoveError::EmptySource`] for an empty waste or
/// [`MoveError::IllegalTableauPlacement`] when colors or ranks do not fit.
///
/// # Examples
///
/// ```
/// use klondike_engine::cards::{Card, PileCard, Rank, Suit};
/// use klondike_engine::errors::MoveError;
/// use klondike_engine::game::GameState;
/// use klondike_engine::rules::{validate_move, MoveDestination, MoveSource};
///
/// let mut state = GameState::new();
/// state.waste.push(PileCard::face_up(Card::new(Suit::Hearts, Rank::Ace)));
///
/// let mv = validate_move(&state, MoveSource::Waste, MoveDestination::Foundation(0)).unwrap();
/// assert_eq!(mv.count, 1);
///
/// let err = validate_move(&state, MoveSource::Waste, MoveDestination::Tableau(3)).unwrap_err();
/// assert_eq!(err, MoveError::IllegalTableauPlacement { index: 3 });
/// ```
pub fn validate_move(
    state: &GameState,
    source: MoveSource,
    destination: MoveDestination,
) -> Result<ValidatedMove, MoveError> {
    if let (MoveSource::Foundation(_), MoveDestination::Foundation(_)) = (source, destination) {
        return Err(MoveError::FoundationToFoundation);
    }
    let (card, count) = resolve_source(state, source)?;

    match destination {
        MoveDestination::Foundation(index) => {
            let foundation = state
                .foundations
                .get(index)
                .ok_or(MoveError::InvalidPileIndex {
                    kind: PileKind::Foundation,
                    index,
                })?;
            if count != 1 {
                return Err(MoveError::NotTopCard);
            }
            if !card.can_place_on_foundation(foundation.last().map(|pc| &pc.card)) {
                return Err(MoveError::IllegalFoundationPlacement { index });
            }
        }
        MoveDestination::Tableau(index) => {
            let column = state.tableau.get(index).ok_or(MoveError::InvalidPileIndex {
                kind: PileKind::Tableau,
                index,
            })?;
            if let MoveSource::Tableau { column: from, .. } = source {
                if from == index {
                    return Err(MoveError::SameColumn);
                }
            }
            let legal = match column.last() {
                None => card.rank == Rank::King,
                Some(top) => top.face_up && card.can_place_on_tableau(&top.card),
            };
            if !legal {
                return Err(MoveError::IllegalTableauPlacement { index });
            }
        }
    }

    Ok(ValidatedMove {
        source,
        destination,
        card,
        count,
    })
}

/// The card a source offers and how many cards would travel with it.
fn resolve_source(state: &GameState, source: MoveSource) -> Result<(Card, usize), MoveError> {
    match source {
        MoveSource::Waste => state
            .waste
            .last()
            .map(|pc| (pc.card, 1))
            .ok_or(MoveError::EmptySource),
        MoveSource::Tableau { column, card_index } => {
            let col = state.tableau.get(column).ok_or(MoveError::InvalidPileIndex {
                kind: PileKind::Tableau,
                index: column,
            })?;
            if col.is_empty() {
                return Err(MoveError::EmptySource);
            }
            let pc = col.get(card_index).ok_or(MoveError::InvalidCardIndex {
                index: card_index,
                len: col.len(),
            })?;
            if !pc.face_up {
                return Err(MoveError::FaceDownCard { index: card_index });
            }
            if !is_valid_run(&col[card_index..]) {
                return Err(MoveError::BrokenRun { index: card_index });
            }
            Ok((pc.card, col.len() - card_index))
        }
        MoveSource::Foundation(index) => {
            let foundation = state
                .foundations
                .get(index)
                .ok_or(MoveError::InvalidPileIndex {
                    kind: PileKind::Foundation,
                    index,
                })?;
            foundation
                .last()
                .map(|pc| (pc.card, 1))
                .ok_or(MoveError::EmptySource)
        }
    }
}

/// True when every card is face up and each one sits on a card one rank
/// higher of the opposite color. An empty slice is a valid run.
pub fn is_valid_run(cards: &[PileCard]) -> bool {
    cards.iter().all(|pc| pc.face_up)
        && cards
            .windows(2)
            .all(|pair| pair[1].card.can_place_on_tableau(&pair[0].card))
}

/// True when every card in the foundation is an ascending single-suit run
/// starting at the ace.
pub fn is_valid_foundation(cards: &[PileCard]) -> bool {
    cards
        .iter()
        .enumerate()
        .all(|(i, pc)| pc.card.rank.value() as usize == i + 1 && pc.card.suit == cards[0].card.suit)
}

/// Whether the waste top or any face-up tableau card can legally move to a
/// foundation or another column right now. Stock draws are not counted.
pub fn has_available_moves(state: &GameState) -> bool {
    candidate_moves(state)
        .into_iter()
        .any(|(source, destination)| validate_move(state, source, destination).is_ok())
}

fn candidate_moves(state: &GameState) -> Vec<(MoveSource, MoveDestination)> {
    let mut sources = Vec::new();
    if !state.waste.is_empty() {
        sources.push(MoveSource::Waste);
    }
    for (column, cards) in state.tableau.iter().enumerate() {
        for (card_index, pc) in cards.iter().enumerate() {
            if pc.face_up {
                sources.push(MoveSource::Tableau { column, card_index });
            }
        }
    }

    let destinations = (0..FOUNDATION_COUNT)
        .map(MoveDestination::Foundation)
        .chain((0..TABLEAU_COUNT).map(MoveDestination::Tableau))
        .collect::<Vec<_>>();

    sources
        .into_iter()
        .flat_map(|s| destinations.iter().map(move |&d| (s, d)))
        .collect()
}
