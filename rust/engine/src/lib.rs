//! # klondike-engine: Klondike Solitaire Rule Engine
//!
//! Owns the deck, the deal, move legality, scoring and win detection for
//! single-player Klondike with one-card draws from the stock. Rendering and
//! input belong to the host, which calls into [`engine::Engine`] and reads
//! [`game::GameState`] snapshots.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and placement predicates
//! - [`deck`] - Deck shuffling with a ChaCha20 RNG, optionally seeded
//! - [`game`] - Game state: stock, waste, foundations, tableau, score, moves
//! - [`rules`] - Move sources/destinations and move validation
//! - [`engine`] - New game, stock cycling, move execution, completion
//! - [`scoring`] - Score awards and the completion bonus
//! - [`clock`] - Injectable wall clock for game timing
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`config`] - Seed and record path from file and environment
//! - [`errors`] - Error types for rejected moves and deals
//!
//! ## Quick Start
//!
//! ```rust
//! use klondike_engine::engine::Engine;
//! use klondike_engine::rules::{MoveDestination, MoveSource};
//!
//! let mut engine = Engine::new(Some(42));
//! engine.new_game();
//!
//! // Try every column top against the first foundation
//! for column in 0..7 {
//!     let card_index = engine.state().tableau[column].len() - 1;
//!     engine.move_card(
//!         MoveSource::Tableau { column, card_index },
//!         MoveDestination::Foundation(0),
//!     );
//! }
//! println!("{} after {} moves", engine.state().score, engine.state().moves);
//! ```
//!
//! ## Deterministic Deals
//!
//! ```rust
//! use klondike_engine::engine::Engine;
//!
//! let mut a = Engine::new(Some(7));
//! let mut b = Engine::new(Some(7));
//! a.new_game();
//! b.new_game();
//! assert_eq!(a.state(), b.state());
//! ```

pub mod cards;
pub mod clock;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod rules;
pub mod scoring;
