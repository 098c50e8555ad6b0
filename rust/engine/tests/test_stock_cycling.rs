use klondike_engine::cards::Card;
use klondike_engine::engine::{Engine, StockAction};
use klondike_engine::errors::MoveError;
use klondike_engine::game::GameState;
use klondike_engine::clock::ManualClock;

fn draw_all(engine: &mut Engine) -> Vec<Card> {
    let mut drawn = Vec::new();
    while !engine.state().stock.is_empty() {
        match engine.try_deal_from_stock().expect("draw") {
            StockAction::Drawn(card) => drawn.push(card),
            StockAction::Recycled(_) => panic!("stock was not empty"),
        }
    }
    drawn
}

#[test]
fn draw_takes_the_stock_top_face_up() {
    let mut engine = Engine::new(Some(8));
    engine.new_game();
    let top = engine.state().stock.last().expect("stock").card;

    assert_eq!(engine.try_deal_from_stock(), Ok(StockAction::Drawn(top)));
    let state = engine.state();
    assert_eq!(state.stock.len(), 23);
    assert_eq!(state.waste.len(), 1);
    assert_eq!(state.top_waste_card(), Some(&top));
    assert!(state.waste[0].face_up);
    assert_eq!(state.moves, 1);
    assert_eq!(state.score, 0);
}

#[test]
fn exhausting_stock_moves_every_card_to_waste_in_draw_order() {
    let mut engine = Engine::new(Some(21));
    engine.new_game();
    let drawn = draw_all(&mut engine);

    assert_eq!(drawn.len(), 24);
    let state = engine.state();
    assert!(state.stock.is_empty());
    let waste: Vec<Card> = state.waste.iter().map(|pc| pc.card).collect();
    assert_eq!(waste, drawn);
    assert!(state.waste.iter().all(|pc| pc.face_up));
    assert_eq!(state.moves, 24);
}

#[test]
fn recycle_turns_waste_back_and_replays_the_same_order() {
    let mut engine = Engine::new(Some(21));
    engine.new_game();
    let first_pass = draw_all(&mut engine);

    assert_eq!(engine.try_deal_from_stock(), Ok(StockAction::Recycled(24)));
    let state = engine.state();
    assert!(state.waste.is_empty());
    assert_eq!(state.stock.len(), 24);
    assert!(state.stock.iter().all(|pc| !pc.face_up));
    assert_eq!(state.moves, 25, "recycling counts as a single move");

    let second_pass = draw_all(&mut engine);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn recycle_restores_the_original_stock_exactly() {
    let mut engine = Engine::new(Some(4));
    engine.new_game();
    let original = engine.state().stock.clone();
    draw_all(&mut engine);
    engine.deal_from_stock();
    assert_eq!(engine.state().stock, original);
}

#[test]
fn empty_stock_and_waste_is_rejected_without_change() {
    let mut engine = Engine::from_state(GameState::new(), ManualClock::default());
    let before = engine.state().clone();
    assert_eq!(engine.try_deal_from_stock(), Err(MoveError::StockEmpty));
    assert!(!engine.deal_from_stock());
    assert_eq!(engine.state(), &before);
}
