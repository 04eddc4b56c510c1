//! Card instances - one tile of a dealt grid.

use serde::{Deserialize, Serialize};

use super::definition::{CardId, ImageRef};

/// A card in a dealt deck.
///
/// `matched` only ever goes from false to true within a deal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position in the deal.
    pub id: CardId,

    /// Face image, shared with exactly one other card.
    pub src: ImageRef,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl Card {
    /// Create an unmatched card.
    #[must_use]
    pub fn new(id: CardId, src: ImageRef) -> Self {
        Self {
            id,
            src,
            matched: false,
        }
    }

    /// Do two cards form a pair? Distinct positions, same face.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.src == other.src
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unmatched() {
        let card = Card::new(CardId::new(3), ImageRef::from_name("fox"));
        assert_eq!(card.id, CardId::new(3));
        assert!(!card.matched);
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(CardId::new(0), ImageRef::from_name("fox"));
        let b = Card::new(CardId::new(1), ImageRef::from_name("fox"));
        let c = Card::new(CardId::new(2), ImageRef::from_name("owl"));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
        assert!(!a.pairs_with(&a));
    }
}
