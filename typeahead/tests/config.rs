use std::time::Duration;

use typeahead::config::LookupConfig;
use typeahead::error::ConfigError;

#[test]
fn test_defaults() {
    let config = LookupConfig::default();
    assert!(!config.multiple);
    assert_eq!(config.delay(), Duration::from_millis(300));
    assert_eq!(config.min_chars, 1);
    assert_eq!(config.searchable_properties, vec!["name".to_string()]);
    assert_eq!(config.descriptor_property, "name");
    assert_eq!(config.results_limit, None);
    assert_eq!(config.placeholder_text, None);
}

#[test]
fn test_builder() {
    let config = LookupConfig::new()
        .multiple(true)
        .search_delay(Duration::from_millis(50))
        .min_chars(2)
        .searchable_properties(["name", "email"])
        .descriptor_property("email")
        .results_limit(5)
        .placeholder_text("Find a person");

    assert!(config.multiple);
    assert_eq!(config.search_delay_ms, 50);
    assert_eq!(config.min_chars, 2);
    assert_eq!(config.searchable_properties.len(), 2);
    assert_eq!(config.descriptor_property, "email");
    assert_eq!(config.effective_limit(), Some(5));
    assert_eq!(config.placeholder_text.as_deref(), Some("Find a person"));
}

#[test]
fn test_zero_limit_is_unlimited() {
    let config = LookupConfig::new().results_limit(0);
    assert_eq!(config.effective_limit(), None);
}

#[test]
fn test_from_json_partial() {
    let config = LookupConfig::from_json(r#"{ "multiple": true, "results_limit": 10 }"#).unwrap();
    assert!(config.multiple);
    assert_eq!(config.results_limit, Some(10));
    assert_eq!(config.search_delay_ms, 300);
    assert_eq!(config.descriptor_property, "name");
}

#[test]
fn test_from_json_malformed() {
    let err = LookupConfig::from_json("{ multiple: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_validate_no_properties() {
    let config = LookupConfig::new().searchable_properties(Vec::<String>::new());
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NoSearchableProperties)
    ));
}

#[test]
fn test_validate_empty_property_name() {
    let config = LookupConfig::new().searchable_properties(["name", " "]);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyPropertyName { index: 1 })
    ));
}

#[test]
fn test_validate_empty_descriptor() {
    let err = LookupConfig::from_json(r#"{ "descriptor_property": "" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyDescriptorProperty));
    assert!(err.to_string().contains("Descriptor"));
}

#[test]
fn test_huge_search_delay_saturates() {
    let config = LookupConfig::new().search_delay(Duration::MAX);
    assert_eq!(config.search_delay_ms, u64::MAX);

    let config = LookupConfig::new().search_delay(Duration::from_millis(450));
    assert_eq!(config.delay(), Duration::from_millis(450));
}
