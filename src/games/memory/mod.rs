//! Memory matching game.
//!
//! A deck of paired image cards is dealt face down. The player flips two
//! cards per turn:
//! - A pair stays face up and the turn ends at once
//! - A mismatch flips back after a short delay
//! - The game ends when every pair is face up
//!
//! The elapsed-time clock ticks once per second while a game runs.

mod controller;
mod deck;
mod view;

pub use controller::TurnController;
pub use deck::{build_deck, is_well_formed, pair_counts};
pub use view::{CardView, GameView, Scoreboard};
