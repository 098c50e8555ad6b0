use std::collections::HashSet;

use klondike_engine::cards::{all_ranks, full_deck, Card, Color, PileCard, Rank as R, Suit as S};

fn card(suit: S, rank: R) -> Card {
    Card { suit, rank }
}

#[test]
fn colors_follow_suits() {
    assert_eq!(card(S::Hearts, R::Two).color(), Color::Red);
    assert_eq!(card(S::Diamonds, R::Two).color(), Color::Red);
    assert_eq!(card(S::Clubs, R::Two).color(), Color::Black);
    assert_eq!(card(S::Spades, R::Two).color(), Color::Black);
}

#[test]
fn ranks_run_from_ace_one_to_king_thirteen() {
    let values: Vec<u8> = all_ranks().iter().map(|r| r.value()).collect();
    assert_eq!(values, (1..=13).collect::<Vec<u8>>());
    assert_eq!(R::from_u8(11), Some(R::Jack));
    assert_eq!(R::from_u8(0), None);
    assert_eq!(R::from_u8(14), None);
}

#[test]
fn tableau_needs_one_rank_lower_and_opposite_color() {
    let black_nine = card(S::Clubs, R::Nine);
    assert!(card(S::Hearts, R::Eight).can_place_on_tableau(&black_nine));
    assert!(card(S::Diamonds, R::Eight).can_place_on_tableau(&black_nine));
    assert!(!card(S::Spades, R::Eight).can_place_on_tableau(&black_nine));
    assert!(!card(S::Hearts, R::Seven).can_place_on_tableau(&black_nine));
    assert!(!card(S::Hearts, R::Ten).can_place_on_tableau(&black_nine));
    assert!(!card(S::Hearts, R::Nine).can_place_on_tableau(&black_nine));
}

#[test]
fn king_never_goes_on_another_card() {
    let king = card(S::Hearts, R::King);
    for other in full_deck() {
        assert!(!king.can_place_on_tableau(&other), "K♥ on {}", other);
    }
}

#[test]
fn empty_foundation_takes_only_aces() {
    for c in full_deck() {
        assert_eq!(c.can_place_on_foundation(None), c.rank == R::Ace, "{}", c);
    }
}

#[test]
fn foundation_builds_same_suit_upward() {
    let five = card(S::Spades, R::Five);
    assert!(card(S::Spades, R::Six).can_place_on_foundation(Some(&five)));
    assert!(!card(S::Clubs, R::Six).can_place_on_foundation(Some(&five)));
    assert!(!card(S::Spades, R::Seven).can_place_on_foundation(Some(&five)));
    assert!(!card(S::Spades, R::Four).can_place_on_foundation(Some(&five)));
}

#[test]
fn full_deck_is_52_distinct_cards() {
    let deck = full_deck();
    assert_eq!(deck.len(), 52);
    let set: HashSet<Card> = deck.into_iter().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn turning_a_pile_card_keeps_its_identity() {
    let c = card(S::Diamonds, R::Queen);
    let mut pc = PileCard::face_down(c);
    assert!(!pc.face_up);
    pc.turn_up();
    assert!(pc.face_up);
    assert_eq!(pc.card, c);
    pc.turn_down();
    assert_eq!(pc, PileCard::face_down(c));
}

#[test]
fn cards_display_rank_and_suit() {
    assert_eq!(card(S::Hearts, R::Ace).to_string(), "A♥");
    assert_eq!(card(S::Spades, R::Ten).to_string(), "10♠");
    assert_eq!(card(S::Clubs, R::King).to_string(), "K♣");
}
