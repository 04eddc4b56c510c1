//! Dealing: pick images, pair them up, shuffle.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cards::{Card, CardId, ImageRef};
use crate::core::{ConfigError, GameRng, Result};

/// Deal a deck of `select_count` pairs drawn from `catalog`.
///
/// Draws `select_count` distinct images uniformly, duplicates each, and
/// shuffles the result uniformly. Card ids are the final positions.
///
/// Fails with `InvalidConfiguration` if the catalog holds fewer images
/// than requested.
///
/// ```
/// use memory_match::cards::ImageRef;
/// use memory_match::core::GameRng;
/// use memory_match::games::memory::build_deck;
///
/// let catalog: Vec<ImageRef> = ["a", "b", "c", "d"].iter().map(|n| ImageRef::from_name(n)).collect();
/// let deck = build_deck(&catalog, 3, &mut GameRng::new(1)).unwrap();
///
/// assert_eq!(deck.len(), 6);
/// assert!(deck.iter().enumerate().all(|(i, c)| c.id.index() == i));
/// ```
pub fn build_deck(catalog: &[ImageRef], select_count: usize, rng: &mut GameRng) -> Result<Vec<Card>> {
    let selected = rng
        .sample(catalog, select_count)
        .ok_or(ConfigError::SelectionTooLarge {
            requested: select_count,
            available: catalog.len(),
        })?;

    let mut faces: Vec<ImageRef> = Vec::with_capacity(selected.len() * 2);
    faces.extend(selected.iter().cloned());
    faces.extend(selected);
    rng.shuffle(&mut faces);

    let deck: Vec<Card> = faces
        .into_iter()
        .enumerate()
        .map(|(i, src)| Card::new(CardId::new(i as u32), src))
        .collect();

    debug!(pairs = select_count, cards = deck.len(), "dealt deck");
    Ok(deck)
}

/// Count how many cards show each image.
#[must_use]
pub fn pair_counts(cards: &[Card]) -> FxHashMap<&ImageRef, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(&card.src).or_insert(0) += 1;
    }
    counts
}

/// Does every image appear exactly twice, with ids matching positions?
#[must_use]
pub fn is_well_formed(cards: &[Card]) -> bool {
    let positional = cards.iter().enumerate().all(|(i, c)| c.id.index() == i);
    positional && pair_counts(cards).values().all(|&n| n == 2)
}
