use std::collections::HashSet;

/// Order-preserving de-duplication, seeded with the source page URL.
///
/// The source URL is always entry 0. Links then keep their discovery
/// order, first occurrence wins; the source URL is never re-inserted
/// even when it also appears among the links.
pub fn dedupe(source_url: &str, normalized_links: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(normalized_links.len() + 1);
    seen.insert(source_url);

    let mut unique = Vec::with_capacity(normalized_links.len() + 1);
    unique.push(source_url.to_string());

    for link in normalized_links {
        if seen.insert(link) {
            unique.push(link.clone());
        }
    }

    unique
}
