// ⚙️ View Configuration - Initial filter state for every page
//
// Precedence: defaults < JSON file < environment (RA_TIMEFRAME,
// RA_LOCATIONS, RA_DATA) < command-line flags.

use crate::entities::location::Timeframe;
use crate::notification::DEFAULT_NOTICE_SECS;
use crate::selection::Selection;
use anyhow::{bail, Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub timeframe: Timeframe,

    /// Location ids; empty means all
    pub locations: Vec<String>,

    /// Owner ids for the statements page; empty means all
    pub owners: Vec<String>,

    /// Restaurant ids for the statements page; empty means all
    pub restaurants: Vec<String>,

    /// Bank account ids for the financials page; empty means all
    pub bank_accounts: Vec<String>,

    pub notification_secs: i64,

    /// Optional dataset JSON replacing the built-in samples
    pub data_path: Option<PathBuf>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            timeframe: Timeframe::Monthly,
            locations: Vec::new(),
            owners: Vec::new(),
            restaurants: Vec::new(),
            bank_accounts: Vec::new(),
            notification_secs: DEFAULT_NOTICE_SECS,
            data_path: None,
        }
    }
}

/// Comma-separated ids; "all" or blank yields an empty list
pub fn split_ids(value: &str) -> Vec<String> {
    match Selection::parse_list(value) {
        Selection::All => Vec::new(),
        Selection::Subset(ids) => ids.into_iter().collect(),
    }
}

impl ViewConfig {
    /// Load configuration from JSON file; missing keys keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: ViewConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        config.notification_lifetime()?;

        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in `apply_env`)
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("RA_TIMEFRAME") {
            self.timeframe = Timeframe::parse(&value)
                .map_err(anyhow::Error::msg)
                .context("Invalid RA_TIMEFRAME")?;
        }
        if let Some(value) = lookup("RA_LOCATIONS") {
            self.locations = split_ids(&value);
        }
        if let Some(value) = lookup("RA_DATA") {
            self.data_path = Some(PathBuf::from(value));
        }
        Ok(())
    }

    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    pub fn set_locations(&mut self, value: &str) {
        self.locations = split_ids(value);
    }

    // Selections keep only ids present in `universe`; nothing left means all

    pub fn location_selection(&self, universe: &[String]) -> Selection<String> {
        Selection::from_ids_in(self.locations.iter().cloned(), universe)
    }

    pub fn owner_selection(&self, universe: &[String]) -> Selection<String> {
        Selection::from_ids_in(self.owners.iter().cloned(), universe)
    }

    pub fn restaurant_selection(&self, universe: &[String]) -> Selection<String> {
        Selection::from_ids_in(self.restaurants.iter().cloned(), universe)
    }

    pub fn bank_account_selection(&self, universe: &[String]) -> Selection<String> {
        Selection::from_ids_in(self.bank_accounts.iter().cloned(), universe)
    }

    /// Notice lifetime; must be a positive, representable number of seconds
    pub fn notification_lifetime(&self) -> Result<Duration> {
        if self.notification_secs <= 0 {
            bail!(
                "notification_secs must be positive, got {}",
                self.notification_secs
            );
        }
        Duration::try_seconds(self.notification_secs)
            .with_context(|| format!("notification_secs out of range: {}", self.notification_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn known() -> Vec<String> {
        ["downtown-bistro", "harbor-grill", "uptown-steakhouse", "garden-cafe"]
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();

        assert_eq!(config.timeframe, Timeframe::Monthly);
        assert_eq!(config.location_selection(&known()), Selection::All);
        assert_eq!(config.notification_lifetime().unwrap(), Duration::seconds(3));
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_from_file_partial() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"{ "timeframe": "weekly", "locations": ["harbor-grill"] }"#,
        )
        .unwrap();

        let config = ViewConfig::from_file(file.path()).unwrap();

        assert_eq!(config.timeframe, Timeframe::Weekly);
        assert_eq!(
            config.location_selection(&known()),
            Selection::from_ids(vec!["harbor-grill".to_string()])
        );
        assert_eq!(config.notification_secs, 3);
    }

    #[test]
    fn test_from_file_invalid_timeframe() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{ "timeframe": "yearly" }"#).unwrap();

        assert!(ViewConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_variable_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RA_TIMEFRAME", "Quarterly"),
            ("RA_LOCATIONS", "garden-cafe, harbor-grill"),
            ("RA_DATA", "/tmp/data.json"),
        ]
        .into_iter()
        .collect();

        let mut config = ViewConfig::default();
        config
            .apply_vars(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.timeframe, Timeframe::Quarterly);
        assert_eq!(config.locations, vec!["garden-cafe", "harbor-grill"]);
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/data.json")));
    }

    #[test]
    fn test_bad_timeframe_variable() {
        let mut config = ViewConfig::default();
        let result = config.apply_vars(|key| (key == "RA_TIMEFRAME").then(|| "hourly".to_string()));

        assert!(result.is_err());
    }

    #[test]
    fn test_all_locations_string() {
        let mut config = ViewConfig::default();
        config.set_locations("all");

        assert!(config.locations.is_empty());
        assert!(config.location_selection(&known()).is_all());
    }

    #[test]
    fn test_unknown_location_ids_are_dropped() {
        let mut config = ViewConfig::default();
        config.set_locations("harbor-grill,downtwn-bistro");
        assert_eq!(
            config.location_selection(&known()),
            Selection::from_ids(vec!["harbor-grill".to_string()])
        );

        config.set_locations("downtwn-bistro");
        assert_eq!(config.location_selection(&known()), Selection::All);
    }

    #[test]
    fn test_from_file_rejects_out_of_range_notification_secs() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{ "notification_secs": 9223372036854775807 }"#).unwrap();

        let err = ViewConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_from_file_rejects_non_positive_notification_secs() {
        for secs in ["0", "-5"] {
            let file = tempfile::NamedTempFile::new().unwrap();
            fs::write(file.path(), format!(r#"{{ "notification_secs": {} }}"#, secs)).unwrap();

            assert!(ViewConfig::from_file(file.path()).is_err(), "accepted {}", secs);
        }
    }
}
