use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::cards::{Card, PileCard};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::deck::Deck;
use crate::errors::{DealError, MoveError};
use crate::game::{GameState, DECK_SIZE, TABLEAU_COUNT};
use crate::logger::GameRecord;
use crate::rules::{self, MoveDestination, MoveSource};
use crate::scoring::{completion_bonus, FOUNDATION_BONUS, REVEAL_BONUS};

/// Whether the current game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every foundation is full; terminal until the next new game
    Completed { at: DateTime<Utc> },
}

/// What a successful stock operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// One card went from stock to waste, face up
    Drawn(Card),
    /// The whole waste (this many cards) went back to the stock, face down
    Recycled(usize),
}

/// Result of a successful [`Engine::try_move_card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub cards_moved: usize,
    /// A face-down card was turned up at the source column
    pub revealed: bool,
    /// Points awarded by this move, not counting a completion bonus
    pub score_delta: u32,
}

/// Klondike rule engine: owns the deck and the live [`GameState`] and is the
/// only thing that mutates it.
///
/// Every mutating operation has a boolean form (`deal_from_stock`,
/// `move_card`) and a `try_` form that reports why a move was refused.
/// Refused operations never change the state.
///
/// # Examples
///
/// ```
/// use klondike_engine::engine::Engine;
/// use klondike_engine::rules::{MoveDestination, MoveSource};
///
/// let mut engine = Engine::new(Some(12345));
/// engine.new_game();
///
/// let state = engine.state();
/// assert_eq!(state.stock.len(), 24);
/// assert_eq!(state.tableau[6].len(), 7);
///
/// // Draw one card from the stock onto the waste
/// assert!(engine.deal_from_stock());
/// assert_eq!(engine.state().moves, 1);
///
/// // A refused move leaves the state untouched
/// let before = engine.state().clone();
/// if !engine.move_card(MoveSource::Waste, MoveDestination::Foundation(0)) {
///     assert_eq!(engine.state(), &before);
/// }
/// ```
#[derive(Debug)]
pub struct Engine<C: Clock = SystemClock> {
    /// The deck the next game is dealt from
    deck: Deck,
    /// Seed the deck was created with, when reproducible
    seed: Option<u64>,
    /// All piles, score and move counter of the current game
    state: GameState,
    status: GameStatus,
    /// When the current game started, by `clock`
    started_at: DateTime<Utc>,
    clock: C,
}

impl Engine<SystemClock> {
    /// Engine on the system clock. `None` shuffles from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_clock(seed, SystemClock)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.seed)
    }
}

impl<C: Clock> Engine<C> {
    /// Engine with an empty table. Call [`Engine::new_game`] to deal.
    pub fn with_clock(seed: Option<u64>, clock: C) -> Self {
        let deck = match seed {
            Some(s) => Deck::new_with_seed(s),
            None => Deck::new(),
        };
        let started_at = clock.now();
        Self {
            deck,
            seed,
            state: GameState::new(),
            status: GameStatus::InProgress,
            started_at,
            clock,
        }
    }

    /// Adopts an existing snapshot. Timing restarts now; a snapshot that is
    /// already won is completed at once, without a second bonus.
    pub fn from_state(state: GameState, clock: C) -> Self {
        let now = clock.now();
        let status = if state.is_game_won() {
            GameStatus::Completed { at: now }
        } else {
            GameStatus::InProgress
        };
        Self {
            deck: Deck::new(),
            seed: None,
            state,
            status,
            started_at: now,
            clock,
        }
    }

    /// Shuffles a fresh deck and deals it: columns of 1 through 7 cards with
    /// only the last card of each face up, the other 24 face down in the stock.
    pub fn new_game(&mut self) {
        self.deck.reset();
        self.state = GameState::new();
        self.status = GameStatus::InProgress;
        self.started_at = self.clock.now();

        if let Err(e) = self.deal_initial_cards() {
            warn!(error = %e, "initial deal stopped early");
            return;
        }
        info!(
            seed = ?self.seed,
            stock = self.state.stock.len(),
            "new game dealt"
        );
    }

    fn deal_initial_cards(&mut self) -> Result<(), DealError> {
        let mut dealt = 0;
        for col in 0..TABLEAU_COUNT {
            for row in 0..=col {
                let card = self.deck.deal().ok_or(DealError::DeckExhausted { dealt })?;
                dealt += 1;
                let mut pc = PileCard::face_down(card);
                if row == col {
                    pc.turn_up();
                }
                self.state.tableau[col].push(pc);
            }
        }
        while let Some(card) = self.deck.deal() {
            self.state.stock.push(PileCard::face_down(card));
        }
        Ok(())
    }

    pub fn deal_from_stock(&mut self) -> bool {
        self.try_deal_from_stock().is_ok()
    }

    /// Draws the stock's top card onto the waste face up. With an empty
    /// stock, turns the whole waste back over into the stock so the next
    /// draws replay the same order. Either way counts as one move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameCompleted`] after a win, [`MoveError::StockEmpty`]
    /// when stock and waste are both empty.
    pub fn try_deal_from_stock(&mut self) -> Result<StockAction, MoveError> {
        self.ensure_in_progress()?;

        if let Some(mut pc) = self.state.stock.pop() {
            pc.turn_up();
            self.state.waste.push(pc);
            self.state.moves += 1;
            debug!(card = %pc.card, moves = self.state.moves, "drew from stock");
            return Ok(StockAction::Drawn(pc.card));
        }

        if self.state.waste.is_empty() {
            return Err(MoveError::StockEmpty);
        }
        let recycled = self.state.waste.len();
        while let Some(mut pc) = self.state.waste.pop() {
            pc.turn_down();
            self.state.stock.push(pc);
        }
        self.state.moves += 1;
        debug!(recycled, moves = self.state.moves, "recycled waste into stock");
        Ok(StockAction::Recycled(recycled))
    }

    pub fn move_card(&mut self, source: MoveSource, destination: MoveDestination) -> bool {
        self.try_move_card(source, destination).is_ok()
    }

    /// Moves a card, or a tableau run headed by it, to a foundation or column.
    ///
    /// A tableau source moves every card from `card_index` to the column end
    /// as one unit. Turning up the newly exposed column card earns
    /// [`REVEAL_BONUS`]; reaching a foundation earns [`FOUNDATION_BONUS`].
    /// The move counter grows by one however many cards travel.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`] from [`rules::validate_move`], or
    /// [`MoveError::GameCompleted`] after a win.
    pub fn try_move_card(
        &mut self,
        source: MoveSource,
        destination: MoveDestination,
    ) -> Result<MoveOutcome, MoveError> {
        self.ensure_in_progress()?;
        let mv = rules::validate_move(&self.state, source, destination)?;

        let cards = self.take_cards(source, mv.count);
        let mut score_delta = 0;
        match destination {
            MoveDestination::Foundation(index) => {
                self.state.foundations[index].extend(cards);
                score_delta += FOUNDATION_BONUS;
            }
            MoveDestination::Tableau(index) => self.state.tableau[index].extend(cards),
        }

        let revealed = match source {
            MoveSource::Tableau { column, .. } => self.reveal_top(column),
            MoveSource::Waste | MoveSource::Foundation(_) => false,
        };
        if revealed {
            score_delta += REVEAL_BONUS;
        }

        self.state.score += score_delta;
        self.state.moves += 1;
        debug!(
            ?source,
            ?destination,
            card = %mv.card,
            cards = mv.count,
            score = self.state.score,
            moves = self.state.moves,
            "card moved"
        );

        self.check_game_completion();
        Ok(MoveOutcome {
            cards_moved: mv.count,
            revealed,
            score_delta,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::Completed { .. } => Err(MoveError::GameCompleted),
        }
    }

    // Only called with a validated source, so the pile holds at least `count` cards.
    fn take_cards(&mut self, source: MoveSource, count: usize) -> Vec<PileCard> {
        let pile = match source {
            MoveSource::Waste => &mut self.state.waste,
            MoveSource::Tableau { column, .. } => &mut self.state.tableau[column],
            MoveSource::Foundation(index) => &mut self.state.foundations[index],
        };
        let at = pile.len().saturating_sub(count);
        pile.split_off(at)
    }

    fn reveal_top(&mut self, column: usize) -> bool {
        match self.state.tableau[column].last_mut() {
            Some(top) if !top.face_up => {
                top.turn_up();
                true
            }
            _ => false,
        }
    }

    fn check_game_completion(&mut self) {
        if self.status != GameStatus::InProgress || !self.state.is_game_won() {
            return;
        }
        let at = self.clock.now();
        let elapsed = seconds_between(self.started_at, at);
        let bonus = completion_bonus(elapsed, self.state.moves);
        self.state.score += bonus;
        self.status = GameStatus::Completed { at };
        info!(
            elapsed_secs = elapsed,
            moves = self.state.moves,
            bonus,
            score = self.state.score,
            "game completed"
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, GameStatus::Completed { .. })
    }

    pub fn completion_time(&self) -> Option<DateTime<Utc>> {
        match self.status {
            GameStatus::Completed { at } => Some(at),
            GameStatus::InProgress => None,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds from the start of the game to its completion, or to now
    /// while it is still running.
    pub fn duration_seconds(&self) -> u64 {
        let end = self.completion_time().unwrap_or_else(|| self.clock.now());
        seconds_between(self.started_at, end)
    }

    /// Elapsed game time as `MM:SS`.
    pub fn formatted_game_time(&self) -> String {
        let secs = self.duration_seconds();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn foundation_card_count(&self) -> usize {
        self.state.foundation_card_count()
    }

    /// Share of the deck already on foundations, rounded down, 0 to 100.
    pub fn completion_percentage(&self) -> u32 {
        (self.foundation_card_count() * 100 / DECK_SIZE) as u32
    }

    pub fn has_available_moves(&self) -> bool {
        rules::has_available_moves(&self.state)
    }

    /// Optimistic hint: a face-down tableau card might still unlock play, so
    /// any hidden card counts as winnable; otherwise some legal move must
    /// exist now. Never false while a legal move exists.
    pub fn is_potentially_winnable(&self) -> bool {
        if self.is_completed() {
            return true;
        }
        self.state.has_hidden_tableau_cards() || self.has_available_moves()
    }

    /// Summary of the current game for the game log.
    pub fn game_record(&self, game_id: impl Into<String>) -> GameRecord {
        GameRecord {
            game_id: game_id.into(),
            seed: self.seed,
            score: self.state.score,
            moves: self.state.moves,
            foundation_cards: self.foundation_card_count(),
            completed: self.is_completed(),
            duration_secs: self.duration_seconds(),
            ts: None,
            meta: None,
        }
    }
}

fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    (end - start).num_seconds().max(0) as u64
}
