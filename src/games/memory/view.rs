//! Render boundary: what a presentation layer needs to draw the grid.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, ImageRef};
use crate::core::{GameSession, Phase};

/// One tile as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub src: ImageRef,
    /// Face up: chosen this turn or already matched.
    pub flipped: bool,
    pub matched: bool,
}

/// Aggregate counters shown above the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub turns: u32,
    /// Seconds (clock ticks) since the start.
    pub elapsed: u32,
    pub active: bool,
}

/// Render-ready snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub cards: Vec<CardView>,
    pub scoreboard: Scoreboard,
    /// Tiles ignore clicks while set.
    pub input_disabled: bool,
    pub phase: Phase,
}

impl GameView {
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let cards = session
            .cards
            .iter()
            .map(|card| CardView {
                id: card.id,
                src: card.src.clone(),
                flipped: session.is_flipped(card),
                matched: card.matched,
            })
            .collect();

        Self {
            cards,
            scoreboard: Scoreboard {
                turns: session.turns,
                elapsed: session.elapsed,
                active: session.active,
            },
            input_disabled: session.input_disabled,
            phase: session.phase(),
        }
    }

    /// Ids of the face-up cards.
    pub fn flipped_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().filter(|c| c.flipped).map(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::SessionId;

    #[test]
    fn test_view_flags() {
        let cards = ["a", "b", "b", "a"]
            .iter()
            .enumerate()
            .map(|(i, s)| Card::new(CardId::new(i as u32), ImageRef::from_name(s)))
            .collect();
        let mut session = GameSession::new(SessionId(1), cards);
        session.active = true;
        session.input_disabled = false;
        session.mark_matched(&ImageRef::from_name("b"));
        session.first_choice = Some(CardId::new(3));

        let view = GameView::from_session(&session);

        assert_eq!(view.cards.len(), 4);
        assert_eq!(
            view.flipped_ids().collect::<Vec<_>>(),
            vec![CardId::new(1), CardId::new(2), CardId::new(3)]
        );
        assert!(view.cards[1].matched);
        assert!(!view.cards[3].matched);
        assert_eq!(view.phase, Phase::AwaitingSecond);
        assert_eq!(
            view.scoreboard,
            Scoreboard {
                turns: 0,
                elapsed: 0,
                active: true
            }
        );
    }

    #[test]
    fn test_view_serializes() {
        // Empty preview deck: nothing dealt yet
        let preview = GameSession::new(SessionId::default(), vec![]);
        let json = serde_json::to_value(GameView::from_session(&preview)).unwrap();

        assert_eq!(json["scoreboard"]["turns"], 0);
        assert_eq!(json["input_disabled"], true);
        assert_eq!(json["phase"], "Idle");

        // The same empty deck once dealt is already won
        let dealt = GameSession::new(SessionId(1), vec![]);
        let json = serde_json::to_value(GameView::from_session(&dealt)).unwrap();
        assert_eq!(json["phase"], "Complete");
    }
}
