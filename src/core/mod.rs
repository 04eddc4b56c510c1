//! Core engine types: RNG, configuration, errors, inputs, timers, session state.
//!
//! These are independent of how the game is presented. The memory game
//! in `games::memory` composes them.

pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod timer;
pub mod state;

pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{ConfigError, GameError, Result};
pub use action::{Action, IgnoreReason, Outcome, Pair};
pub use timer::{Fired, TimerHandle, TimerQueue};
pub use state::{GameSession, Phase, SessionId};
