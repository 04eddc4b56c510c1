//! Card identity: image references and positional ids.
//!
//! An `ImageRef` is the pairing key. Exactly two cards of a deal share one.
//! A `CardId` is the card's index in the dealt order and only means
//! something within that deal.

use serde::{Deserialize, Serialize};

/// Reference to a card face image.
///
/// ## Example
///
/// ```
/// use memory_match::cards::ImageRef;
///
/// let fox = ImageRef::from_name("fox");
/// assert_eq!(fox.as_str(), "/images/fox.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Directory the face images are served from.
    pub const ASSET_DIR: &'static str = "/images";

    /// Wrap an already resolved image path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Resolve a catalog image name to its asset path.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(format!("{}/{}.png", Self::ASSET_DIR, name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positional card identifier, assigned at deal time.
///
/// Equal to the card's index in the dealt sequence. Not stable across deals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the dealt sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(CardId::from(42), id);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_image_ref_paths() {
        assert_eq!(ImageRef::from_name("owl").as_str(), "/images/owl.png");
        assert_eq!(ImageRef::new("custom/x.svg").to_string(), "custom/x.svg");
        assert_ne!(ImageRef::from_name("owl"), ImageRef::from_name("fox"));
    }

    #[test]
    fn test_image_ref_serializes_as_string() {
        let json = serde_json::to_string(&ImageRef::from_name("fox")).unwrap();
        assert_eq!(json, r#""/images/fox.png""#);
    }
}
