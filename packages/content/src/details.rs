use std::collections::HashMap;

/// Explicit key → detail-record map for one category.
///
/// Keys are detail file stems. The whole mapping is known once loading
/// finishes, so the only absent-case left at request time is a genuinely
/// dangling key.
#[derive(Debug)]
pub struct DetailStore<D> {
    category: &'static str,
    records: HashMap<String, D>,
}

impl<D> DetailStore<D> {
    pub fn new(category: &'static str, records: HashMap<String, D>) -> Self {
        Self { category, records }
    }

    pub fn empty(category: &'static str) -> Self {
        Self {
            category,
            records: HashMap::new(),
        }
    }

    /// Quiet lookup: exact key first, then the key with its trailing
    /// `.extension` stripped. Authored data mixes `"kodeshell"` and
    /// `"ncpc-onsite-2023.ts"` key styles; both must resolve.
    pub fn resolve(&self, key: &str) -> Option<&D> {
        if let Some(detail) = self.records.get(key) {
            return Some(detail);
        }
        if let Some(stem) = strip_extension(key) {
            return self.records.get(stem);
        }
        None
    }

    /// Resolution-pipeline entry point. An absent key short-circuits with no
    /// lookup; a dangling key degrades to `None` after a diagnostic log.
    /// This call never fails.
    pub fn load(&self, key: Option<&str>) -> Option<&D> {
        let key = key?;
        let detail = self.resolve(key);
        if detail.is_none() {
            tracing::warn!(category = self.category, key, "details file not found");
        }
        detail
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn strip_extension(key: &str) -> Option<&str> {
    let (stem, ext) = key.rsplit_once('.')?;
    (!stem.is_empty() && !ext.is_empty()).then_some(stem)
}
