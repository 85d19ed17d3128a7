//! The project catalog and slug lookup.
//!
//! A [`Catalog`] keeps records in authored order and indexes them by slug.
//! It is built once and never mutated; renderers borrow it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::record::{ProjectRecord, RawRecord, RecordError};

/// Immutable, ordered collection of project records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Records in authored order
    records: Vec<ProjectRecord>,

    /// Slug -> position in `records`
    index: HashMap<String, usize>,
}

/// Lookup miss for a slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No project with slug {slug:?}")]
pub struct RecordNotFound {
    pub slug: String,
}

/// Errors that can occur when loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid project at position {index}: {source}")]
    InvalidRecord { index: usize, source: RecordError },

    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),
}

impl Catalog {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from validated records, rejecting duplicate slugs.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if index.insert(record.slug.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSlug(record.slug.clone()));
            }
        }

        Ok(Self { records, index })
    }

    /// Parse and validate a JSON array of records.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawRecord> =
            serde_json::from_str(source).map_err(|e| CatalogError::InvalidJson(e.to_string()))?;

        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                ProjectRecord::try_from(raw)
                    .map_err(|source| CatalogError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(records)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json(&source)?;
        tracing::debug!("Loaded {} projects from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    /// Look up a record by exact slug.
    pub fn find(&self, slug: &str) -> Result<&ProjectRecord, RecordNotFound> {
        self.get(slug).ok_or_else(|| RecordNotFound {
            slug: slug.to_string(),
        })
    }

    /// Look up a record by exact slug, as an `Option`.
    pub fn get(&self, slug: &str) -> Option<&ProjectRecord> {
        self.index.get(slug).map(|&position| &self.records[position])
    }

    /// Check whether a slug exists.
    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    /// All records in authored order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Iterate records in authored order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    /// Records that have a live demo, in authored order.
    pub fn with_demos(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter().filter(|r| r.demo_url.is_some())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
