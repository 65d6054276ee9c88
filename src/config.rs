use chrono::{DateTime, Locale, Utc};
use serde::{Deserialize, Serialize};

use crate::PickerError;
use crate::bounds::Bounds;
use crate::types::Mode;

/// Initial picker settings, typically deserialized from the host
/// application's own configuration.
///
/// ```json
/// { "mode": "quarter-year", "minimum_date": "2020-01-01T00:00:00Z", "locale": "fr_FR" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    pub mode:         Mode,
    /// Starting date; the current time when absent
    pub date:         Option<DateTime<Utc>>,
    pub minimum_date: Option<DateTime<Utc>>,
    pub maximum_date: Option<DateTime<Utc>>,
    /// POSIX locale name such as `en_US`
    pub locale:       Option<String>,
}

impl PickerConfig {
    pub const fn bounds(&self) -> Bounds {
        Bounds::new(self.minimum_date, self.maximum_date)
    }

    /// Resolves the locale name
    ///
    /// # Errors
    /// Returns `PickerError::UnknownLocale` if the name is not a known locale.
    pub fn parsed_locale(&self) -> Result<Option<Locale>, PickerError> {
        self.locale.as_deref().map(parse_locale).transpose()
    }
}

/// Parses a POSIX locale name (`de_DE`, `fr_FR`, ...)
///
/// # Errors
/// Returns `PickerError::UnknownLocale` if the name is not a known locale.
pub fn parse_locale(name: &str) -> Result<Locale, PickerError> {
    let trimmed = name.trim();
    Locale::try_from(trimmed).map_err(|_| PickerError::UnknownLocale(trimmed.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::utc;

    #[test]
    fn test_empty_config_is_default() {
        let config: PickerConfig = serde_json::from_str("{}").expect("failed to parse empty config");
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.mode, Mode::MonthAndYear);
        assert_eq!(config.bounds(), Bounds::default());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "mode": "quarter-year",
            "date": "2023-03-15T00:00:00Z",
            "minimum_date": "2020-01-01T00:00:00Z",
            "maximum_date": "2025-12-01T00:00:00Z",
            "locale": "fr_FR"
        }"#;
        let config: PickerConfig = serde_json::from_str(json).expect("failed to parse full config");

        assert_eq!(config.mode, Mode::QuarterAndYear);
        assert_eq!(config.date, Some(utc(2023, 3, 15)));
        assert_eq!(config.bounds(), Bounds::new(Some(utc(2020, 1, 1)), Some(utc(2025, 12, 1))));
        assert_eq!(config.parsed_locale().expect("fr_FR should be known"), Some(Locale::fr_FR));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<PickerConfig, _> = serde_json::from_str(r#"{ "timezone": "Europe/Paris" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_locale() {
        let config = PickerConfig {
            locale: Some("xx_YY".to_owned()),
            ..PickerConfig::default()
        };
        let result = config.parsed_locale();
        assert!(matches!(result, Err(PickerError::UnknownLocale(ref s)) if s == "xx_YY"));
    }
}
