use serde::{Deserialize, Serialize};

use crate::{ItemAccess, SiteTreeSettings};

/// Errors raised while loading [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings document could not be decoded.
    #[error("Malformed settings: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(error: serde_json::Error) -> Self {
        Self::Malformed(error.to_string())
    }
}

/// Configuration of the access engine.
///
/// Every field has a default, so an empty document is valid:
///
/// ```json
/// {
///   "item_access": "container_wide",
///   "site_tree": { "BlogPost": true }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rights of writers and contributors over posts they did not author.
    pub item_access: ItemAccess,
    /// Site tree configuration per content type.
    pub site_tree: SiteTreeSettings,
}

impl Settings {
    /// Decodes settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ContentType;
    use testresult::TestResult;

    #[test]
    fn it_defaults_every_field() -> TestResult {
        let settings = Settings::from_json("{}")?;
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.item_access, ItemAccess::AuthorsOnly);
        assert!(settings.site_tree.is_excluded(&ContentType::BLOG_POST));
        Ok(())
    }

    #[test]
    fn it_reads_a_full_document() -> TestResult {
        let settings = Settings::from_json(
            r#"{ "item_access": "container_wide", "site_tree": { "BlogPost": true, "Blog": false } }"#,
        )?;

        assert_eq!(settings.item_access, ItemAccess::ContainerWide);
        assert!(!settings.site_tree.is_excluded(&ContentType::BLOG_POST));
        assert!(settings.site_tree.is_excluded(&ContentType::BLOG));
        Ok(())
    }

    #[test]
    fn it_rejects_unknown_item_access() {
        let result = Settings::from_json(r#"{ "item_access": "everyone" }"#);
        assert!(matches!(result, Err(SettingsError::Malformed(_))));
    }
}
