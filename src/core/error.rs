//! Error types.
//!
//! Only startup can fail. Bad input during play is ignored rather than
//! reported, see [`IgnoreReason`](super::IgnoreReason).

use thiserror::Error;

use crate::cards::ImageRef;

/// Errors produced while setting up a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The configuration cannot produce a valid deal. No game state exists.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// The catalog resource could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// Specific configuration faults.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("selection count {requested} exceeds catalog size {available}")]
    SelectionTooLarge { requested: usize, available: usize },

    #[error("image {0} appears more than once in the catalog")]
    DuplicateImage(ImageRef),

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

/// Result alias for setup operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::from(ConfigError::SelectionTooLarge {
            requested: 8,
            available: 3,
        });
        assert_eq!(
            err.to_string(),
            "invalid configuration: selection count 8 exceeds catalog size 3"
        );

        let dup = ConfigError::DuplicateImage(ImageRef::from_name("fox"));
        assert_eq!(
            dup.to_string(),
            "image /images/fox.png appears more than once in the catalog"
        );
    }

    #[test]
    fn test_catalog_error_from_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GameError = parse.into();
        assert!(matches!(err, GameError::Catalog(_)));
    }
}
