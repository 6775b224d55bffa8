//! Font catalog with a deferred load queue.
//!
//! Decoding a profile only records which fonts it asks for. Creating the actual font
//! resources usually needs a rendering context that is not around while a document is
//! being parsed, so the host drains the queue later through
//! [`FontCatalog::load_scheduled`] with whatever [`FontBackend`] it owns.

use indexmap::IndexMap;

/// Name of the built-in font. Always first in the system font list.
pub const DEFAULT_FONT: &str = "Default";

/// Pixel sizes loaded for every font.
pub const TINY_SIZE_PX: f32 = 8.0;
pub const MEDIUM_SIZE_PX: f32 = 10.0;
pub const BIG_SIZE_PX: f32 = 13.0;

/// Opaque handle returned by a [`FontBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u64);

/// The three sizes of one loaded font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSet {
    pub tiny: FontHandle,
    pub medium: FontHandle,
    pub big: FontHandle,
}

/// Creates font resources. Implemented by the host's renderer.
#[cfg_attr(test, mockall::automock)]
pub trait FontBackend {
    /// Load `name` at `size_px`. `None` means the font is unavailable.
    fn load(&mut self, name: &str, size_px: f32) -> Option<FontHandle>;
}

/// Known system fonts, pending load requests and loaded font sets.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    system_fonts: Vec<String>,
    scheduled: Vec<String>,
    loaded: IndexMap<String, FontSet>,
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FontCatalog {
    /// Build a catalog from an enumeration of installed fonts.
    ///
    /// The list is sorted and deduplicated with [`DEFAULT_FONT`] kept at index 0, so a
    /// font index of 0 always means "the built-in font". The default font starts out
    /// scheduled.
    pub fn new(installed: Vec<String>) -> Self {
        let mut fonts: Vec<String> = installed
            .into_iter()
            .filter(|name| !name.is_empty() && name != DEFAULT_FONT && !name.starts_with('@'))
            .collect();
        fonts.sort();
        fonts.dedup();
        fonts.insert(0, DEFAULT_FONT.to_string());

        Self {
            system_fonts: fonts,
            scheduled: vec![DEFAULT_FONT.to_string()],
            loaded: IndexMap::new(),
        }
    }

    pub fn system_fonts(&self) -> &[String] {
        &self.system_fonts
    }

    /// Position of `name` in the system font list.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.system_fonts.iter().position(|font| font == name)
    }

    /// Queue `name` for the next [`load_scheduled`](Self::load_scheduled) call.
    pub fn schedule(&mut self, name: &str) {
        tracing::debug!("Scheduling font load: {}", name);
        self.scheduled.push(name.to_string());
    }

    pub fn scheduled(&self) -> &[String] {
        &self.scheduled
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FontSet> {
        self.loaded.get(name)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// Resolve every pending request through `backend` and clear the queue.
    ///
    /// Fonts that are already loaded are skipped. A font the backend cannot provide at
    /// every size is dropped with a warning.
    ///
    /// # Returns
    /// `true` if at least one new font set was loaded
    pub fn load_scheduled(&mut self, backend: &mut dyn FontBackend) -> bool {
        let mut loaded_any = false;

        for name in std::mem::take(&mut self.scheduled) {
            if self.loaded.contains_key(&name) {
                continue;
            }

            let set = backend.load(&name, TINY_SIZE_PX).and_then(|tiny| {
                let medium = backend.load(&name, MEDIUM_SIZE_PX)?;
                let big = backend.load(&name, BIG_SIZE_PX)?;
                Some(FontSet { tiny, medium, big })
            });

            match set {
                Some(set) => {
                    tracing::info!("Loaded font: {}", name);
                    self.loaded.insert(name, set);
                    loaded_any = true;
                }
                None => tracing::warn!("Font unavailable, skipping: {}", name),
            }
        }

        loaded_any
    }
}
