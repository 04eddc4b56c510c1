//! Card system: image references, dealt cards, and the image catalog.
//!
//! ## Key Types
//!
//! - `ImageRef`: Face image path, the pairing key
//! - `CardId`: Positional identifier assigned when a deck is dealt
//! - `Card`: One tile of the grid (id, face, matched flag)
//! - `Catalog`: Pool of distinct images plus display captions

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardId, ImageRef};
pub use instance::Card;
pub use registry::{Catalog, DisplayText};
