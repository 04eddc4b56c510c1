//! Turn controller: owns the session and applies the turn rules.

use std::time::Duration;

use smallvec::smallvec;
use tracing::{debug, info, trace};

use super::deck::build_deck;
use super::view::GameView;
use crate::cards::{CardId, Catalog};
use crate::core::{
    Action, Fired, GameConfig, GameRng, GameSession, IgnoreReason, Outcome, Pair, Phase, Result,
    SessionId, TimerHandle, TimerQueue,
};

/// Timer payloads. Each carries the session it was scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerEvent {
    Tick(SessionId),
    ResetTurn(SessionId),
}

/// Runs memory games over one catalog.
///
/// All mutation happens inside [`apply`](Self::apply) (or the
/// `start_game` / `choose_card` shorthands) and [`advance`](Self::advance),
/// each running to completion. Time only moves when the host calls
/// `advance`.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::cards::Catalog;
/// use memory_match::core::{GameConfig, Phase};
/// use memory_match::games::memory::TurnController;
///
/// let catalog = Catalog::from_names(["fox", "owl", "cat", "elk"]).unwrap();
/// let config = GameConfig::default().with_select_count(2).with_seed(7);
/// let mut game = TurnController::new(catalog, config).unwrap();
///
/// assert_eq!(game.phase(), Phase::Idle);
/// game.start_game().unwrap();
/// assert_eq!(game.session().cards.len(), 4);
///
/// game.advance(Duration::from_secs(3));
/// assert_eq!(game.session().elapsed, 3);
/// ```
#[derive(Clone, Debug)]
pub struct TurnController {
    catalog: Catalog,
    config: GameConfig,
    rng: GameRng,
    session: GameSession,
    timers: TimerQueue<TimerEvent>,
    /// Elapsed-time clock of the running session.
    tick: Option<TimerHandle>,
    /// Flip-back of a mismatched pair.
    pending_reset: Option<TimerHandle>,
}

impl TurnController {
    /// Validate the configuration and deal a face-down preview deck.
    ///
    /// The controller starts idle: no clock, input disabled.
    pub fn new(catalog: Catalog, config: GameConfig) -> Result<Self> {
        config.validate(catalog.len())?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let cards = build_deck(catalog.images(), config.select_count, &mut rng)?;
        info!(seed = rng.seed(), cards = cards.len(), "dealt preview deck");

        Ok(Self {
            catalog,
            config,
            rng,
            session: GameSession::new(SessionId::default(), cards),
            timers: TimerQueue::new(),
            tick: None,
            pending_reset: None,
        })
    }

    /// Dispatch an inbound event.
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::StartGame => self.start_game(),
            Action::Choose(id) => Ok(self.choose_card(id)),
        }
    }

    /// Deal a new deck and start the clock.
    ///
    /// Valid in every phase. A running game is abandoned: its clock and
    /// any pending flip-back are cancelled before the new deal exists.
    pub fn start_game(&mut self) -> Result<Outcome> {
        let cards = build_deck(self.catalog.images(), self.config.select_count, &mut self.rng)?;

        self.stop_timers();

        let id = self.session.id.next();
        let mut session = GameSession::new(id, cards);
        session.active = true;
        session.input_disabled = false;
        self.session = session;

        self.tick = self
            .timers
            .schedule_repeating(self.config.tick_interval(), TimerEvent::Tick(id));

        let cards = self.session.cards.len();
        info!(session = id.0, cards, "game started");

        Ok(self
            .check_completion()
            .unwrap_or(Outcome::Started { cards }))
    }

    /// Handle a click on card `id`.
    ///
    /// Clicks while idle or resolving, on the current first choice, on a
    /// matched card, or on an unknown id are ignored.
    pub fn choose_card(&mut self, id: CardId) -> Outcome {
        if let Some(reason) = self.rejection(id) {
            debug!(card = id.0, ?reason, "choice ignored");
            return Outcome::Ignored(reason);
        }

        let Some(first) = self.session.first_choice else {
            self.session.first_choice = Some(id);
            debug!(card = id.0, "first choice");
            return Outcome::FirstChosen(id);
        };

        self.session.second_choice = Some(id);
        self.session.input_disabled = true;
        let pair: Pair = smallvec![first, id];

        let first_card = &self.session.cards[first.index()];
        let second_card = &self.session.cards[id.index()];

        if first_card.pairs_with(second_card) {
            let src = first_card.src.clone();
            self.session.mark_matched(&src);
            self.session.reset_turn();
            debug!(first = first.0, second = id.0, %src, turns = self.session.turns, "matched");

            self.check_completion()
                .unwrap_or(Outcome::Matched { pair })
        } else {
            self.pending_reset = Some(self.timers.schedule_once(
                self.config.flip_delay(),
                TimerEvent::ResetTurn(self.session.id),
            ));
            debug!(first = first.0, second = id.0, "mismatched");

            Outcome::Mismatched { pair }
        }
    }

    /// Abandon the running game. Stops the clock and blocks input.
    pub fn end_game(&mut self) {
        self.stop_timers();
        if self.session.active {
            info!(session = self.session.id.0, "game abandoned");
        }
        self.session.active = false;
        self.session.input_disabled = true;
    }

    /// Let `elapsed` of time pass, firing due timers in order.
    ///
    /// Returns the outcome of every timer that changed state. Ticks due
    /// back to back report once with the combined count. The clock stops
    /// at `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Outcome> {
        let until = self.timers.now().saturating_add(elapsed);
        let mut outcomes = Vec::new();

        while let Some(fired) = self.timers.pop_due(until) {
            if let Some(outcome) = self.fire(fired) {
                outcomes.push(outcome);
            }
        }
        self.timers.advance_to(until);

        outcomes
    }

    fn fire(&mut self, fired: Fired<TimerEvent>) -> Option<Outcome> {
        let Fired { handle, event, count } = fired;
        match event {
            TimerEvent::Tick(session) => {
                if session != self.session.id || !self.session.active {
                    return None;
                }
                let seconds = u32::try_from(count).unwrap_or(u32::MAX);
                self.session.elapsed = self.session.elapsed.saturating_add(seconds);
                trace!(elapsed = self.session.elapsed, "tick");
                Some(Outcome::Ticked {
                    elapsed: self.session.elapsed,
                })
            }
            TimerEvent::ResetTurn(session) => {
                if session != self.session.id || self.pending_reset != Some(handle) {
                    debug!(session = session.0, "stale flip-back dropped");
                    return None;
                }
                self.pending_reset = None;
                self.session.reset_turn();
                debug!(turns = self.session.turns, "turn reset");
                Some(Outcome::TurnReset {
                    turns: self.session.turns,
                })
            }
        }
    }

    fn rejection(&self, id: CardId) -> Option<IgnoreReason> {
        if !self.session.active {
            return Some(IgnoreReason::NotActive);
        }
        if self.session.input_disabled {
            return Some(IgnoreReason::InputDisabled);
        }
        if self.session.first_choice == Some(id) {
            return Some(IgnoreReason::AlreadySelected);
        }
        match self.session.card(id) {
            None => Some(IgnoreReason::UnknownCard),
            Some(card) if card.matched => Some(IgnoreReason::AlreadyMatched),
            Some(_) => None,
        }
    }

    /// End the session if every card is matched.
    fn check_completion(&mut self) -> Option<Outcome> {
        if !self.session.active || !self.session.all_matched() {
            return None;
        }

        self.stop_timers();
        self.session.active = false;
        info!(
            session = self.session.id.0,
            turns = self.session.turns,
            elapsed = self.session.elapsed,
            "game complete"
        );

        Some(Outcome::Completed {
            turns: self.session.turns,
            elapsed: self.session.elapsed,
        })
    }

    fn stop_timers(&mut self) {
        if let Some(handle) = self.tick.take() {
            self.timers.cancel(handle);
        }
        if let Some(handle) = self.pending_reset.take() {
            self.timers.cancel(handle);
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_session(&self.session)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the deals are drawn from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Virtual time since the controller was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Is the elapsed-time clock running?
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }

    /// Is a mismatched pair waiting to flip back?
    #[must_use]
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Timers currently scheduled (clock plus flip-back).
    #[must_use]
    pub fn scheduled_timers(&self) -> usize {
        self.timers.len()
    }

    /// Caption for the start button.
    #[must_use]
    pub fn button_caption(&self) -> &str {
        self.catalog.text().button_caption(self.session.active)
    }
}
