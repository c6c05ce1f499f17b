use std::collections::{HashMap, HashSet};

use crate::record::ContentRecord;
use crate::text::slugify;

/// Integrity violation detected while constructing a registry. These are
/// startup errors: a registry that fails construction never serves traffic.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate slug '{slug}' in {category} registry")]
    DuplicateSlug {
        category: &'static str,
        slug: String,
    },
    #[error("duplicate id '{id}' in {category} registry")]
    DuplicateId {
        category: &'static str,
        id: String,
    },
    #[error("slug '{slug}' in {category} registry is not canonical (expected '{expected}')")]
    MalformedSlug {
        category: &'static str,
        slug: String,
        expected: String,
    },
}

/// Immutable, ordered collection of summary records with slug-indexed lookup.
///
/// Records keep their declaration order; every listing operation preserves
/// it. Uniqueness of slugs and ids is enforced eagerly at construction, so
/// `get` can return at most one record and no first-match-wins path exists.
#[derive(Debug)]
pub struct Registry<T> {
    category: &'static str,
    records: Vec<T>,
    by_slug: HashMap<String, usize>,
}

impl<T: ContentRecord> Registry<T> {
    pub fn new(category: &'static str, records: Vec<T>) -> Result<Self, RegistryError> {
        let mut by_slug = HashMap::with_capacity(records.len());
        let mut ids = HashSet::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            let slug = record.slug();
            let canonical = slugify(slug);
            if slug.is_empty() || slug != canonical {
                return Err(RegistryError::MalformedSlug {
                    category,
                    slug: slug.to_string(),
                    expected: canonical,
                });
            }
            if by_slug.insert(slug.to_string(), idx).is_some() {
                return Err(RegistryError::DuplicateSlug {
                    category,
                    slug: slug.to_string(),
                });
            }
            let id = record.id_key();
            if !ids.insert(id.clone()) {
                return Err(RegistryError::DuplicateId { category, id });
            }
        }

        Ok(Self {
            category,
            records,
            by_slug,
        })
    }

    /// Look up the record whose slug equals `slug` exactly (case-sensitive).
    pub fn get(&self, slug: &str) -> Option<&T> {
        self.by_slug.get(slug).map(|&idx| &self.records[idx])
    }

    /// All records in declaration order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Featured records, preserving their relative declaration order.
    pub fn featured(&self) -> impl Iterator<Item = &T> {
        self.records.iter().filter(|r| r.featured())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn category(&self) -> &'static str {
        self.category
    }
}
