use std::fs;
use std::path::Path;

pub(crate) const MISSING_CATALOG_PLACEHOLDER: &str = "Catalog data not available.";
pub(crate) const UNREADABLE_CATALOG_PLACEHOLDER: &str = "Error loading catalog data.";

/// Full text of the external course-catalog document, read once at startup.
/// A missing or unreadable file degrades to a placeholder rather than an
/// error; retrieval over a degraded corpus yields no snippets.
#[derive(Debug, Clone)]
pub struct CatalogCorpus {
    text: String,
    available: bool,
}

impl CatalogCorpus {
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            println!("⚠️  Catalog file not found at {}", path.display());
            return Self {
                text: MISSING_CATALOG_PLACEHOLDER.to_string(),
                available: false,
            };
        }

        match fs::read_to_string(path) {
            Ok(text) => Self {
                text,
                available: true,
            },
            Err(error) => {
                println!("⚠️  Error loading catalog at {}: {error}", path.display());
                Self {
                    text: UNREADABLE_CATALOG_PLACEHOLDER.to_string(),
                    available: false,
                }
            }
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            available: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}
