use std::collections::BTreeMap;

use folio_content::ContentType;
use serde::{Deserialize, Serialize};

/// Whether a content type with the given `show_in_tree` flag is hidden from
/// the site tree.
pub const fn excluded_from_tree(show_in_tree: bool) -> bool {
    !show_in_tree
}

/// Per content type "show in tree" configuration.
///
/// This is a configuration lookup, not a permission: the answer never
/// depends on who is asking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteTreeSettings {
    show_in_tree: BTreeMap<ContentType, bool>,
}

impl SiteTreeSettings {
    /// Sets the `show_in_tree` flag of `content_type`.
    pub fn set_show_in_tree(&mut self, content_type: ContentType, show: bool) -> &mut Self {
        self.show_in_tree.insert(content_type, show);
        self
    }

    /// The `show_in_tree` flag of `content_type`.
    ///
    /// Posts are hidden unless configured otherwise; every other type is
    /// shown.
    pub fn show_in_tree(&self, content_type: &ContentType) -> bool {
        self.show_in_tree
            .get(content_type)
            .copied()
            .unwrap_or_else(|| *content_type != ContentType::BLOG_POST)
    }

    /// Whether `content_type` is hidden from the site tree.
    pub fn is_excluded(&self, content_type: &ContentType) -> bool {
        excluded_from_tree(self.show_in_tree(content_type))
    }

    /// The subset of `candidates` the site tree must hide.
    pub fn excluded_types(&self, candidates: impl IntoIterator<Item = ContentType>) -> Vec<ContentType> {
        candidates
            .into_iter()
            .filter(|content_type| self.is_excluded(content_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::Blog;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_excludes_exactly_when_hidden() {
        assert!(excluded_from_tree(false));
        assert!(!excluded_from_tree(true));
    }

    #[test]
    fn it_hides_posts_by_default() {
        let settings = SiteTreeSettings::default();
        assert!(settings.is_excluded(&ContentType::BLOG_POST));
        assert!(!settings.is_excluded(&ContentType::BLOG));
        assert!(!settings.is_excluded(&ContentType::from("Page")));
    }

    #[test]
    fn it_follows_the_configured_flag() {
        let blog = Blog::new("first-blog", "First Blog");
        let mut settings = SiteTreeSettings::default();

        settings.set_show_in_tree(ContentType::BLOG_POST, true);
        assert!(settings.excluded_types(blog.child_types()).is_empty());

        settings.set_show_in_tree(ContentType::BLOG_POST, false);
        assert_eq!(
            settings.excluded_types(blog.child_types()),
            vec![ContentType::BLOG_POST]
        );
    }
}
