//! Inbound events and what became of them.
//!
//! A host forwards exactly two kinds of input: "start a game" and
//! "the player clicked card N". Every handler answers with an `Outcome`
//! so the host (and the tests) can see what the click did without
//! diffing state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Inbound event from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deal a fresh deck and start the clock. Valid in any state.
    StartGame,
    /// The player clicked a card.
    Choose(CardId),
}

/// The two cards chosen in one turn, first choice first.
pub type Pair = SmallVec<[CardId; 2]>;

/// Why a click was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No game is running.
    NotActive,
    /// A turn is resolving.
    InputDisabled,
    /// The card is already the first choice.
    AlreadySelected,
    /// The card's pair was already found.
    AlreadyMatched,
    /// No card with that id in this deal.
    UnknownCard,
}

/// Result of handling an event or a timer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A new deck was dealt and the clock started.
    Started { cards: usize },
    /// First card of a turn flipped.
    FirstChosen(CardId),
    /// Second card matched the first. The turn already ended.
    Matched { pair: Pair },
    /// Second card did not match. Both flip back after the delay.
    Mismatched { pair: Pair },
    /// Choices cleared after a mismatch delay.
    TurnReset { turns: u32 },
    /// One clock period elapsed.
    Ticked { elapsed: u32 },
    /// The last pair was found.
    Completed { turns: u32, elapsed: u32 },
    /// Input dropped without touching state.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Did this event leave the state unchanged?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ignored() {
        assert!(Outcome::Ignored(IgnoreReason::InputDisabled).is_ignored());
        assert!(!Outcome::FirstChosen(CardId::new(0)).is_ignored());
    }

    #[test]
    fn test_pair_inline() {
        let pair: Pair = SmallVec::from_slice(&[CardId::new(1), CardId::new(4)]);
        assert!(!pair.spilled());
        assert_eq!(pair[0], CardId::new(1));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Choose(CardId::new(7));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
