/// Category filter semantics: `None` and the literal `All` disable the
/// filter; anything else must match exactly.
pub fn matches_category(category: &str, filter: Option<&str>) -> bool {
    match filter {
        None | Some("All") => true,
        Some(wanted) => category == wanted,
    }
}

/// Tag filter semantics: case-insensitive substring match against any tag.
pub fn matches_tag(tags: &[String], filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => {
            let needle = wanted.to_lowercase();
            tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        }
    }
}
