//! Game session: the mutable state of one deal.
//!
//! ## GameSession
//!
//! - Dealt cards, in grid order
//! - First and second choice of the current turn
//! - Turn count and elapsed seconds
//! - Input-disabled and active flags
//!
//! Uses an `im` vector so the host can hold a snapshot of the grid while
//! play continues, at O(1) clone cost.
//!
//! ## Phases
//!
//! The flags combine into five phases, see [`Phase`]. The session only
//! stores the flags; `phase()` derives the name.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, ImageRef};

/// Identifies one deal. Bumped on every start so stale timers can tell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Named state of the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game running and pairs left face down (before the first start).
    Idle,
    /// Waiting for the first card of a turn.
    AwaitingFirst,
    /// One card up, waiting for the second.
    AwaitingSecond,
    /// Two cards up, input blocked until the turn resets.
    Resolving,
    /// Every pair found. The clock is stopped.
    Complete,
}

/// State of one deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Which deal this is.
    pub id: SessionId,

    /// Cards in grid order. `cards[i].id == CardId(i)`.
    pub cards: Vector<Card>,

    /// Completed turns.
    pub turns: u32,

    /// Clock ticks since the start.
    pub elapsed: u32,

    pub first_choice: Option<CardId>,
    pub second_choice: Option<CardId>,

    /// Clicks are dropped while set.
    pub input_disabled: bool,

    /// A game is running.
    pub active: bool,
}

impl GameSession {
    /// Wrap a fresh deal. The session starts idle with input disabled.
    #[must_use]
    pub fn new(id: SessionId, cards: Vec<Card>) -> Self {
        Self {
            id,
            cards: cards.into_iter().collect(),
            turns: 0,
            elapsed: 0,
            first_choice: None,
            second_choice: None,
            input_disabled: true,
            active: false,
        }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Derive the current phase from the flags.
    ///
    /// Only a dealt game can be `Complete`; the preview deck (default id)
    /// stays `Idle` even when it is empty.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.active {
            return if self.id != SessionId::default() && self.all_matched() {
                Phase::Complete
            } else {
                Phase::Idle
            };
        }
        match (self.first_choice, self.second_choice) {
            (None, _) => Phase::AwaitingFirst,
            (Some(_), None) if !self.input_disabled => Phase::AwaitingSecond,
            _ => Phase::Resolving,
        }
    }

    /// Is this card face up?
    #[must_use]
    pub fn is_flipped(&self, card: &Card) -> bool {
        self.first_choice == Some(card.id) || self.second_choice == Some(card.id) || card.matched
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Mark every card showing `src` as matched. Returns how many changed.
    pub fn mark_matched(&mut self, src: &ImageRef) -> usize {
        let mut changed = 0;
        for card in self.cards.iter_mut() {
            if card.src == *src && !card.matched {
                card.matched = true;
                changed += 1;
            }
        }
        changed
    }

    /// End the current turn: clear both choices and re-enable input.
    pub fn reset_turn(&mut self) {
        self.first_choice = None;
        self.second_choice = None;
        self.turns = self.turns.saturating_add(1);
        self.input_disabled = false;
    }
}
