//! Font abstraction for the render pipeline.
//!
//! A [`Font`] exposes exactly what text drawing needs: a cell height, a
//! per-character advance width, and glyph bitmaps relative to the pen
//! position. Loading font data (BDF files, embedded tables) is the device
//! side's business, injected through a [`FontProvider`]; the engine memoizes
//! loaded fonts per layout load in a [`FontLibrary`].

use crate::RenderError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

/// A glyph bitmap. Pixel offsets are relative to the pen position: `dx`
/// rightward from the cursor, `dy` downward from the baseline (so rows above
/// the baseline are negative).
#[derive(Debug, Clone)]
pub struct Glyph {
    pub advance: i32,
    pub pixels: Vec<(i32, i32)>,
}

pub trait Font: Send + Sync {
    /// Pixel height of the glyph cell.
    fn height(&self) -> i32;

    /// Advance width for `ch`, including the fallback width for characters
    /// the font has no glyph for.
    fn advance(&self, ch: char) -> i32;

    /// Lit pixels for `ch`, or `None` for unmapped characters (which still
    /// advance the pen by [`Font::advance`]).
    fn glyph(&self, ch: char) -> Option<&Glyph>;
}

/// A trait for resolving font identifiers to loaded fonts.
pub trait FontProvider: Send + Sync + Debug {
    /// Load a font by its identifier (e.g. `"7x13.bdf"`).
    fn load(&self, name: &str) -> Result<Arc<dyn Font>, RenderError>;

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory font provider.
///
/// Fonts are registered up front and served by identifier. Works in any
/// environment, which makes it the natural provider for simulators and tests.
#[derive(Default)]
pub struct InMemoryFontProvider {
    fonts: RwLock<HashMap<String, Arc<dyn Font>>>,
}

impl Debug for InMemoryFontProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = match self.fonts.read() {
            Ok(map) => map.keys().cloned().collect(),
            Err(_) => vec![],
        };
        f.debug_struct("InMemoryFontProvider")
            .field("fonts", &names)
            .finish()
    }
}

impl InMemoryFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, name: &str, font: Arc<dyn Font>) {
        if let Ok(mut map) = self.fonts.write() {
            map.insert(name.to_string(), font);
        }
    }
}

impl FontProvider for InMemoryFontProvider {
    fn load(&self, name: &str) -> Result<Arc<dyn Font>, RenderError> {
        self.fonts
            .read()
            .ok()
            .and_then(|map| map.get(name).cloned())
            .ok_or_else(|| RenderError::FontNotFound(name.to_string()))
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

/// Memoizes identifier -> loaded font for the lifetime of one layout load.
pub struct FontLibrary {
    provider: Arc<dyn FontProvider>,
    cache: RwLock<HashMap<String, Arc<dyn Font>>>,
}

impl Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontLibrary")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl FontLibrary {
    pub fn new(provider: Arc<dyn FontProvider>) -> Self {
        Self {
            provider,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load and memoize one font. Missing fonts are an error here and only
    /// here; after a successful preload the per-frame path never fails.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Font>, RenderError> {
        if let Ok(cache) = self.cache.read() {
            if let Some(font) = cache.get(name) {
                return Ok(Arc::clone(font));
            }
        }
        let font = self.provider.load(name)?;
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(name.to_string(), Arc::clone(&font));
        }
        Ok(font)
    }
}

/// A uniform-advance placeholder font for simulators and tests.
///
/// Every printable character renders as a block one pixel narrower and one
/// row shorter than its cell, sitting on the baseline; whitespace advances
/// without lighting pixels.
#[derive(Debug)]
pub struct FixedAdvanceFont {
    advance: i32,
    height: i32,
    block: Glyph,
}

impl FixedAdvanceFont {
    pub fn new(advance: i32, height: i32) -> Self {
        let mut pixels = Vec::new();
        for dx in 0..advance - 1 {
            for row in 0..height - 1 {
                pixels.push((dx, -row));
            }
        }
        Self {
            advance,
            height,
            block: Glyph { advance, pixels },
        }
    }
}

impl Font for FixedAdvanceFont {
    fn height(&self) -> i32 {
        self.height
    }

    fn advance(&self, _ch: char) -> i32 {
        self.advance
    }

    fn glyph(&self, ch: char) -> Option<&Glyph> {
        if ch.is_whitespace() {
            None
        } else {
            Some(&self.block)
        }
    }
}
