//! URL slug helper

/// Slug used for category pages and links: lowercased, spaces to hyphens
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
