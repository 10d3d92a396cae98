/**
 * Slug Derivation
 *
 * Derives the URL-safe identifier of an article from its title: lowercase,
 * alphanumerics kept, everything else collapsed into single hyphens.
 * Derivation is deterministic, so two articles with the same title produce
 * the same slug and the second creation fails the uniqueness check.
 */

/// Derive a slug from an article title
///
/// `"Hello World"` becomes `"hello-world"`; punctuation is dropped rather
/// than encoded, and leading/trailing separators are trimmed.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
