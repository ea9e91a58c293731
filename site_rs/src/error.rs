use std::path::PathBuf;

use thiserror::Error;

/// Misuse of a [`DisclosureGroup`](crate::disclosure::DisclosureGroup).
///
/// Neither variant leaves the group in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisclosureError {
    /// `toggle` was called with an id the group does not own.
    #[error("no disclosure item with id `{0}` in this group")]
    InvalidReference(String),
    /// The group was configured with an impossible initial state.
    #[error("invalid disclosure group configuration: {0}")]
    InvalidConfiguration(ConfigurationIssue),
}

/// Why a disclosure group refused its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationIssue {
    #[error("default expanded id `{0}` does not match any item")]
    UnknownDefault(String),
    #[error("item id `{0}` appears more than once")]
    DuplicateId(String),
    #[error("single mode allows at most one expanded item, got {0}")]
    TooManyDefaults(usize),
}

impl From<ConfigurationIssue> for DisclosureError {
    fn from(issue: ConfigurationIssue) -> Self {
        DisclosureError::InvalidConfiguration(issue)
    }
}

/// Failure to load an explicitly requested `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_issue_converts_into_disclosure_error() {
        let err: DisclosureError = ConfigurationIssue::UnknownDefault("faq-9".into()).into();
        assert_eq!(
            err,
            DisclosureError::InvalidConfiguration(ConfigurationIssue::UnknownDefault(
                "faq-9".into()
            ))
        );
        assert_eq!(
            err.to_string(),
            "invalid disclosure group configuration: default expanded id `faq-9` does not match any item"
        );
    }

    #[test]
    fn invalid_reference_names_the_id() {
        let err = DisclosureError::InvalidReference("ghost".into());
        assert!(err.to_string().contains("`ghost`"));
    }
}
