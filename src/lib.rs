//! # memory-match
//!
//! Deck dealing and turn state machine for a memory-matching card game.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven Time**: No threads or sleeps. The host reports elapsed
//!    time via `advance` and due timers fire in order.
//!
//! 2. **Explicit Session**: All game state lives in one `GameSession` owned
//!    by the `TurnController`. Cards are compared by positional id.
//!
//! 3. **Uniform Dealing**: Selection and shuffling are unbiased and
//!    reproducible from a seed.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, inputs, timers, session state
//! - `cards`: Image references, dealt cards, catalog
//! - `games`: The memory game (deck builder, turn controller, view)

pub mod core;
pub mod cards;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Action, ConfigError, Fired, GameConfig, GameError, GameRng, GameSession, IgnoreReason, Outcome,
    Pair, Phase, Result, SessionId, TimerHandle, TimerQueue,
};

pub use crate::cards::{Card, CardId, Catalog, DisplayText, ImageRef};

pub use crate::games::memory::{
    build_deck, CardView, GameView, Scoreboard, TurnController,
};
