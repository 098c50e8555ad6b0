//! Drives seeded games with random intents and checks the structural
//! invariants after every call, successful or not.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use klondike_engine::cards::Card;
use klondike_engine::clock::ManualClock;
use klondike_engine::engine::Engine;
use klondike_engine::game::GameState;
use klondike_engine::rules::{is_valid_foundation, is_valid_run, MoveDestination, MoveSource};

fn assert_invariants(state: &GameState) {
    let cards: HashSet<Card> = state.all_cards().copied().collect();
    assert_eq!(cards.len(), 52, "a card was lost or duplicated");
    assert_eq!(state.card_count(), 52);

    for (i, foundation) in state.foundations.iter().enumerate() {
        assert!(is_valid_foundation(foundation), "foundation {} out of order", i);
    }
    for (i, column) in state.tableau.iter().enumerate() {
        let first_up = column.iter().position(|pc| pc.face_up).unwrap_or(column.len());
        assert!(is_valid_run(&column[first_up..]), "column {} run broken", i);
        if let Some(top) = column.last() {
            assert!(top.face_up, "column {} top left face down", i);
        }
    }
    assert!(state.stock.iter().all(|pc| !pc.face_up));
    assert!(state.waste.iter().all(|pc| pc.face_up));
}

fn random_source(rng: &mut ChaCha8Rng, state: &GameState) -> MoveSource {
    match rng.random_range(0..10) {
        0..=2 => MoveSource::Waste,
        3 => MoveSource::Foundation(rng.random_range(0..5)),
        _ => {
            let column = rng.random_range(0..8);
            let len = state.tableau.get(column).map_or(1, Vec::len);
            MoveSource::Tableau {
                column,
                card_index: rng.random_range(0..len + 1),
            }
        }
    }
}

fn random_destination(rng: &mut ChaCha8Rng) -> MoveDestination {
    if rng.random_bool(0.4) {
        MoveDestination::Foundation(rng.random_range(0..5))
    } else {
        MoveDestination::Tableau(rng.random_range(0..8))
    }
}

#[test]
fn random_play_preserves_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    for game in 0..25u64 {
        let mut engine = Engine::with_clock(Some(game), ManualClock::default());
        engine.new_game();
        assert_invariants(engine.state());

        for _ in 0..400 {
            let before = engine.state().clone();
            let ok = if rng.random_bool(0.2) {
                engine.deal_from_stock()
            } else {
                let source = random_source(&mut rng, &before);
                let destination = random_destination(&mut rng);
                engine.move_card(source, destination)
            };

            let after = engine.state();
            assert_invariants(after);
            assert!(after.score >= before.score);
            if ok {
                assert_eq!(after.moves, before.moves + 1);
            } else {
                assert_eq!(after, &before, "failed call must not change state");
            }
            if engine.is_completed() {
                break;
            }
        }
    }
}

#[test]
fn greedy_play_keeps_hint_consistent_with_moves() {
    for seed in 0..20u64 {
        let mut engine = Engine::with_clock(Some(seed), ManualClock::default());
        engine.new_game();
        for _ in 0..200 {
            if engine.has_available_moves() {
                assert!(engine.is_potentially_winnable());
            }
            let moved = (0..7).any(|column| {
                let Some(card_index) = engine.state().tableau[column].len().checked_sub(1) else {
                    return false;
                };
                (0..4).any(|slot| {
                    engine.move_card(
                        MoveSource::Tableau { column, card_index },
                        MoveDestination::Foundation(slot),
                    )
                })
            }) || (0..4).any(|slot| {
                engine.move_card(MoveSource::Waste, MoveDestination::Foundation(slot))
            });
            if !moved && !engine.deal_from_stock() {
                break;
            }
            assert_invariants(engine.state());
        }
    }
}
