//! Localized string lookup.

/// Resource key for the lookup's default placeholder.
pub const SEARCH_PLACEHOLDER: &str = "search_placeholder";

/// Source of localized UI strings.
///
/// Implement this to plug in a host's translation catalog.
pub trait Resources {
    /// Look up the string for `key`, if the catalog has one.
    fn get_string(&self, key: &str) -> Option<String>;
}

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResources;

impl Resources for DefaultResources {
    fn get_string(&self, key: &str) -> Option<String> {
        match key {
            SEARCH_PLACEHOLDER => Some("Search".to_string()),
            _ => None,
        }
    }
}
