//! Lookup configuration.

use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default quiet period before a search runs.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 300;

/// Per-instance lookup configuration.
///
/// Supplied once when a [`Lookup`](crate::widgets::lookup::Lookup) is
/// created. Missing fields in a JSON document fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Allow more than one selected item.
    pub multiple: bool,

    /// Milliseconds of inactivity after a keystroke before searching.
    pub search_delay_ms: u64,

    /// Minimum number of characters before a search opens the menu.
    pub min_chars: usize,

    /// Candidate properties compared against the search text.
    pub searchable_properties: Vec<String>,

    /// Candidate property used as the candidate's display text.
    pub descriptor_property: String,

    /// Maximum number of results (None or 0 = unlimited).
    pub results_limit: Option<usize>,

    /// Placeholder for the search input. Falls back to the localized default.
    pub placeholder_text: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            min_chars: 1,
            searchable_properties: vec!["name".to_string()],
            descriptor_property: "name".to_string(),
            results_limit: None,
            placeholder_text: None,
        }
    }
}

impl LookupConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Enable or disable multi-select.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set the debounce delay.
    pub fn search_delay(mut self, delay: Duration) -> Self {
        self.search_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the minimum number of characters before searching.
    pub fn min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Set the properties searched on each candidate.
    pub fn searchable_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Set the property used as a candidate's display text.
    pub fn descriptor_property(mut self, property: impl Into<String>) -> Self {
        self.descriptor_property = property.into();
        self
    }

    /// Cap the number of results.
    pub fn results_limit(mut self, limit: usize) -> Self {
        self.results_limit = Some(limit);
        self
    }

    /// Set the placeholder text.
    pub fn placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = Some(text.into());
        self
    }

    /// The debounce delay as a Duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Effective results cap. A zero limit counts as no limit.
    pub fn effective_limit(&self) -> Option<usize> {
        self.results_limit.filter(|&limit| limit > 0)
    }

    /// Check the config for inconsistencies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.searchable_properties.is_empty() {
            warn!("Lookup config has no searchable properties");
            return Err(ConfigError::NoSearchableProperties);
        }
        if let Some(index) = self
            .searchable_properties
            .iter()
            .position(|p| p.trim().is_empty())
        {
            warn!("Lookup config has an empty searchable property at {}", index);
            return Err(ConfigError::EmptyPropertyName { index });
        }
        if self.descriptor_property.trim().is_empty() {
            warn!("Lookup config has an empty descriptor property");
            return Err(ConfigError::EmptyDescriptorProperty);
        }
        Ok(())
    }
}
