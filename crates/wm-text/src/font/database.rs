//! Font database for loading and managing fonts

use std::path::Path;
use std::sync::Arc;

use fontdb::{Database, FaceInfo, Source};

use super::matching::generic_family;
use super::{FontId, FontQuery, FontShorthand};
use crate::{Result, TextError};

/// Font database for loading and matching fonts
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Create a new empty font database
    pub fn new() -> Self {
        Self { db: Database::new() }
    }

    /// Create a font database with system fonts loaded
    pub fn with_system_fonts() -> Self {
        let mut db = Self::new();
        db.load_system_fonts();
        db
    }

    /// Load system fonts into the database
    pub fn load_system_fonts(&mut self) {
        self.db.load_system_fonts();
        tracing::debug!("Loaded system fonts, {} faces available", self.db.len());
    }

    /// Load a font from file
    pub fn load_font_file(&mut self, path: &Path) -> Result<()> {
        self.db
            .load_font_file(path)
            .map_err(|e| TextError::FontParsing(format!("{}: {}", path.display(), e)))
    }

    /// Load every font found under a directory
    pub fn load_fonts_dir(&mut self, path: &Path) {
        self.db.load_fonts_dir(path);
    }

    /// Load a font from memory
    pub fn load_font_data(&mut self, data: Arc<dyn AsRef<[u8]> + Send + Sync>) {
        self.db.load_font_source(Source::Binary(data));
    }

    /// Find a font matching the query
    pub fn query(&self, query: &FontQuery) -> Option<FontId> {
        let families: Vec<fontdb::Family> = query
            .families
            .iter()
            .map(|f| generic_family(f).unwrap_or(fontdb::Family::Name(f.as_str())))
            .collect();

        self.db
            .query(&fontdb::Query {
                families: &families,
                weight: fontdb::Weight(query.weight.0),
                stretch: fontdb::Stretch::Normal,
                style: query.style.into(),
            })
            .map(FontId)
    }

    /// Resolve a parsed descriptor to a loaded face.
    ///
    /// Falls back to the generic sans-serif family and then to the first
    /// loaded face when none of the requested families is installed.
    pub fn resolve(&self, shorthand: &FontShorthand) -> Result<FontId> {
        if let Some(id) = self.query(&shorthand.to_query()) {
            return Ok(id);
        }

        let fallback = self
            .query(&FontQuery::default().weight(shorthand.weight).style(shorthand.style))
            .or_else(|| self.db.faces().next().map(|face| FontId(face.id)));
        match fallback {
            Some(id) => {
                tracing::warn!(
                    "No installed font for {:?}, falling back to {}",
                    shorthand.families,
                    self.family_name(id).unwrap_or("<unnamed>")
                );
                Ok(id)
            }
            None => Err(TextError::FontNotFound(format!(
                "{:?} (font database is empty)",
                shorthand.families
            ))),
        }
    }

    /// Get font info by ID
    pub fn face_info(&self, id: FontId) -> Option<&FaceInfo> {
        self.db.face(id.0)
    }

    /// First family name of a face
    pub fn family_name(&self, id: FontId) -> Option<&str> {
        self.face_info(id)
            .and_then(|info| info.families.first())
            .map(|(name, _)| name.as_str())
    }

    /// Get font data by ID (for shaping)
    pub fn with_face_data<R>(&self, id: FontId, f: impl FnOnce(&[u8], u32) -> R) -> Option<R> {
        self.db.with_face_data(id.0, f)
    }

    /// Number of loaded fonts
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.db.len() == 0
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wm_layout::FontDescriptor;

    #[test]
    fn test_empty_database_cannot_resolve() {
        let db = FontDatabase::new();
        let shorthand = FontShorthand::parse(&FontDescriptor::new("18px serif")).unwrap();
        assert!(matches!(db.resolve(&shorthand), Err(TextError::FontNotFound(_))));
    }

    #[test]
    fn test_unknown_family_falls_back() {
        let db = FontDatabase::with_system_fonts();
        if db.is_empty() {
            // Skip on systems without fonts
            return;
        }
        let shorthand = FontShorthand::parse(&FontDescriptor::new("18px 'Definitely Not Installed'")).unwrap();
        assert!(db.resolve(&shorthand).is_ok());
    }

    #[test]
    fn test_missing_font_file() {
        let mut db = FontDatabase::new();
        let result = db.load_font_file(Path::new("/nonexistent/font.ttf"));
        assert!(matches!(result, Err(TextError::FontParsing(_))));
    }
}
