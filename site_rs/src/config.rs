//! Configuration file support for the site.
//!
//! Loads optional `site.toml` from the project root.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::disclosure::{DisclosureEntry, DisclosureGroup, ExpandMode};
use crate::error::{ConfigError, DisclosureError};

/// File name looked up by [`SiteConfig::load`].
pub const CONFIG_FILE: &str = "site.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    /// FAQ accordion on the home page
    pub faq: DisclosureConfig,
    /// Per-project detail accordions in the portfolio section
    pub portfolio: DisclosureConfig,
}

/// Identity of the deployed site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
    /// Absolute origin used for canonical links, Open Graph and the sitemap.
    pub base_url: String,
    pub locale: String,
}

/// Mode and initial state of one accordion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureConfig {
    pub mode: ExpandMode,
    /// Id of the item open on page load (`item-0`, `item-1`, ...).
    pub default_open: Option<String>,
}

impl DisclosureConfig {
    /// Build a group from `entries` with this mode and default.
    pub fn try_build(
        &self,
        entries: Vec<DisclosureEntry>,
    ) -> Result<DisclosureGroup, DisclosureError> {
        DisclosureGroup::from_entries(entries, self.mode, self.default_open.as_deref())
    }

    /// Like [`try_build`](Self::try_build), but a bad default is logged and
    /// the group starts fully collapsed instead.
    pub fn build(&self, entries: Vec<DisclosureEntry>) -> DisclosureGroup {
        match self.try_build(entries.clone()) {
            Ok(group) => group,
            Err(e) => {
                tracing::warn!("{e}; starting collapsed");
                DisclosureGroup::collapsed(entries, self.mode)
            }
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Ghost Protocol".into(),
            base_url: "https://ghostprotocol.lk".into(),
            locale: "en_US".into(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection::default(),
            faq: DisclosureConfig::default(),
            portfolio: DisclosureConfig {
                mode: ExpandMode::Multiple,
                default_open: None,
            },
        }
    }
}

impl SiteConfig {
    /// Load config from `site.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no site config, using defaults");
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default site config");
                Self::default()
            }
        }
    }

    /// Load config from a path the caller explicitly asked for.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.site.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.site.name, "Ghost Protocol");
        assert_eq!(config.base_url(), "https://ghostprotocol.lk");
        assert_eq!(config.faq.mode, ExpandMode::Single);
        assert_eq!(config.portfolio.mode, ExpandMode::Multiple);
        assert!(config.faq.default_open.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
[site]
name = "Ghost Protocol Staging"
base_url = "https://staging.ghostprotocol.lk/"

[faq]
mode = "multiple"
default_open = "item-2"
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.site.name, "Ghost Protocol Staging");
        assert_eq!(config.base_url(), "https://staging.ghostprotocol.lk");
        assert_eq!(config.site.locale, "en_US");
        assert_eq!(config.faq.mode, ExpandMode::Multiple);
        assert_eq!(config.faq.default_open.as_deref(), Some("item-2"));
        assert_eq!(config.portfolio.mode, ExpandMode::Multiple);
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "").expect("write config");
        assert_eq!(SiteConfig::load(temp.path()), SiteConfig::default());
    }

    #[test]
    fn test_malformed_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[faq]\nmode = \"sometimes\"\n")
            .expect("write config");
        assert_eq!(SiteConfig::load(temp.path()), SiteConfig::default());
    }

    #[test]
    fn test_from_path_reports_parse_errors() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[site\n").expect("write config");

        let err = SiteConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("site.toml"));
    }

    #[test]
    fn test_disclosure_config_builds_group() {
        let config = DisclosureConfig {
            mode: ExpandMode::Single,
            default_open: Some("item-1".into()),
        };
        let entries = vec![DisclosureEntry::new("a", "1"), DisclosureEntry::new("b", "2")];
        let group = config.build(entries);
        assert_eq!(group.expanded_ids(), vec!["item-1"]);
    }

    #[test]
    fn test_disclosure_config_unknown_default_starts_collapsed() {
        let config = DisclosureConfig {
            mode: ExpandMode::Single,
            default_open: Some("item-7".into()),
        };
        let entries = vec![DisclosureEntry::new("a", "1")];
        assert!(config.try_build(entries.clone()).is_err());

        let group = config.build(entries);
        assert_eq!(group.len(), 1);
        assert!(group.expanded_ids().is_empty());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
