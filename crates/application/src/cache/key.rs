use std::fmt;

/// Namespace prefix for every note-related cache key. Namespacing keeps
/// keys for different resources from colliding and gives bulk
/// invalidation a stable pattern to match.
pub const NOTES_NAMESPACE: &str = "notes";

/// Deterministic cache key derived from a resource and its identifying
/// parameters. Two requests with identical resource + parameters always
/// produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for the full note collection.
    pub fn note_collection() -> Self {
        Self(format!("{NOTES_NAMESPACE}:all"))
    }

    /// Key for a single note.
    pub fn note_item(id: i64) -> Self {
        Self(format!("{NOTES_NAMESPACE}:{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Glob pattern covering the whole notes namespace.
pub fn notes_pattern() -> String {
    format!("{NOTES_NAMESPACE}:*")
}
