use crate::details::DetailStore;
use crate::record::ContentRecord;
use crate::registry::Registry;

/// Terminal outcome of resolving a category + slug request. Exactly one
/// variant is reached per resolution, and the choice between `Fallback` and
/// `Rich` is a pure function of the detail lookup.
#[derive(Debug)]
pub enum Resolution<'a, R, D> {
    /// Slug not present in the registry. The only negative outcome that
    /// crosses the core boundary; the route layer maps it to a 404.
    NotFound,
    /// Record found, no extended content: render from summary fields only.
    Fallback(&'a R),
    /// Record found and its extended record resolved.
    Rich(&'a R, &'a D),
}

impl<'a, R, D> Resolution<'a, R, D> {
    pub fn record(&self) -> Option<&'a R> {
        match self {
            Resolution::NotFound => None,
            Resolution::Fallback(record) => Some(record),
            Resolution::Rich(record, _) => Some(record),
        }
    }

    pub fn detail(&self) -> Option<&'a D> {
        match self {
            Resolution::Rich(_, detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

pub(crate) fn resolve<'a, R, D>(
    registry: &'a Registry<R>,
    details: &'a DetailStore<D>,
    slug: &str,
) -> Resolution<'a, R, D>
where
    R: ContentRecord,
{
    let Some(record) = registry.get(slug) else {
        return Resolution::NotFound;
    };
    match details.load(record.details_file()) {
        Some(detail) => Resolution::Rich(record, detail),
        None => Resolution::Fallback(record),
    }
}
