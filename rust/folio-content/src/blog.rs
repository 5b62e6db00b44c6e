use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{BlogId, MemberId, Role};

/// Identifier of a content class, such as `Blog` or `BlogPost`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType(Cow<'static, str>);

impl ContentType {
    /// The blog container type.
    pub const BLOG: ContentType = ContentType(Cow::Borrowed("Blog"));
    /// The blog post item type.
    pub const BLOG_POST: ContentType = ContentType(Cow::Borrowed("BlogPost"));

    /// The type name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ContentType {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A blog: the container node of the content hierarchy.
///
/// Holds at most one [`Role`] per member. Assigning a member again replaces
/// the earlier role rather than stacking with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Identifier of the blog.
    pub id: BlogId,
    /// Human readable title.
    pub title: String,
    /// Role assignments keyed by member.
    #[serde(default)]
    pub assignments: BTreeMap<MemberId, Role>,
}

impl Blog {
    /// Creates a blog with no assignments.
    pub fn new(id: impl Into<BlogId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            assignments: BTreeMap::new(),
        }
    }

    /// Builds a blog from separate editor, writer and contributor lists.
    ///
    /// A member listed more than once keeps only their highest role.
    pub fn from_role_lists<I>(
        id: impl Into<BlogId>,
        title: impl Into<String>,
        editors: I,
        writers: I,
        contributors: I,
    ) -> Self
    where
        I: IntoIterator<Item = MemberId>,
    {
        let mut held: BTreeMap<MemberId, Vec<Role>> = BTreeMap::new();
        let lists = [
            (Role::Editor, editors),
            (Role::Writer, writers),
            (Role::Contributor, contributors),
        ];
        for (role, members) in lists {
            for member in members {
                held.entry(member).or_default().push(role);
            }
        }

        let mut blog = Self::new(id, title);
        for (member, roles) in held {
            if let Some(role) = Role::highest(roles) {
                blog.assignments.insert(member, role);
            }
        }
        blog
    }

    /// Assigns `role` to `member`, replacing any role they held before.
    pub fn assign(mut self, member: impl Into<MemberId>, role: Role) -> Self {
        self.assignments.insert(member.into(), role);
        self
    }

    /// The role `member` holds against this blog.
    pub fn role_of(&self, member: &MemberId) -> Option<Role> {
        self.assignments.get(member).copied()
    }

    /// Content types a blog may hold as children.
    pub fn child_types(&self) -> Vec<ContentType> {
        vec![ContentType::BLOG_POST]
    }
}
