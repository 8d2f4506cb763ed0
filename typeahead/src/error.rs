//! Error types.

use thiserror::Error;

/// Errors produced when loading or validating a [`LookupConfig`](crate::config::LookupConfig).
///
/// The lookup itself never fails at runtime; these only surface when a
/// caller asks for a config to be checked up front.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has the wrong shape.
    #[error("Invalid lookup configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// No searchable properties were configured, so nothing can ever match.
    #[error("At least one searchable property is required")]
    NoSearchableProperties,

    /// A searchable property name is empty.
    #[error("Searchable property at index {index} is empty")]
    EmptyPropertyName {
        /// Position in the configured property list.
        index: usize,
    },

    /// The descriptor property name is empty.
    #[error("Descriptor property must not be empty")]
    EmptyDescriptorProperty,
}
