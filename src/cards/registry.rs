//! Image catalog and display text.
//!
//! The `Catalog` is the read-only content resource a game is set up from:
//! the pool of face images plus the captions the UI shows. It is usually
//! loaded from JSON:
//!
//! ```
//! use memory_match::cards::Catalog;
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "imageNames": ["fox", "owl", "cat"],
//!     "text": {
//!         "title": "Memory",
//!         "time": "Time:",
//!         "turns": "Turns:",
//!         "buttonInitialText": "New Game",
//!         "buttonActiveText": "Restart"
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(catalog.len(), 3);
//! assert_eq!(catalog.images()[0].as_str(), "/images/fox.png");
//! ```

use std::io::Read;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::definition::ImageRef;
use crate::core::error::{ConfigError, Result};

/// Captions shown around the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayText {
    pub title: String,
    /// Label before the elapsed seconds.
    pub time: String,
    /// Label before the turn count.
    pub turns: String,
    /// Start button caption while no game is running.
    pub button_initial_text: String,
    /// Start button caption during a game.
    pub button_active_text: String,
}

impl DisplayText {
    /// Caption for the start button.
    #[must_use]
    pub fn button_caption(&self, active: bool) -> &str {
        if active {
            &self.button_active_text
        } else {
            &self.button_initial_text
        }
    }
}

/// On-disk shape of the content resource.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    image_names: Vec<String>,
    #[serde(default)]
    text: DisplayText,
}

/// Pool of distinct face images a deck is drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<ImageRef>,
    text: DisplayText,
}

impl Catalog {
    /// Build a catalog. Fails if any image appears twice.
    pub fn new(images: Vec<ImageRef>, text: DisplayText) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for image in &images {
            if !seen.insert(image) {
                return Err(ConfigError::DuplicateImage(image.clone()).into());
            }
        }
        Ok(Self { images, text })
    }

    /// Build a catalog from bare image names with empty captions.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let images = names
            .into_iter()
            .map(|n| ImageRef::from_name(n.as_ref()))
            .collect();
        Self::new(images, DisplayText::default())
    }

    /// Parse the JSON content resource.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Parse the JSON content resource from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::from_file(file)
    }

    fn from_file(file: CatalogFile) -> Result<Self> {
        let images = file
            .image_names
            .iter()
            .map(|n| ImageRef::from_name(n))
            .collect();
        Self::new(images, file.text)
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[must_use]
    pub fn text(&self) -> &DisplayText {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
