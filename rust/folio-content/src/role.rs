use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named privilege level a member holds against a blog.
///
/// The set is closed. Variants are declared in ascending privilege so the
/// derived ordering gives `Editor > Writer > Contributor`. "No role" is
/// represented as `Option::<Role>::None` and is never a member of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May edit posts they authored and add new posts. Cannot publish.
    Contributor,
    /// May edit and publish posts they authored and add new posts.
    Writer,
    /// Blanket rights over the blog and every post in it.
    Editor,
}

impl Role {
    /// Every role, highest privilege first.
    pub const ALL: [Role; 3] = [Role::Editor, Role::Writer, Role::Contributor];

    /// Display name of the role.
    pub fn name(self) -> &'static str {
        match self {
            Role::Editor => "Editor",
            Role::Writer => "Writer",
            Role::Contributor => "Contributor",
        }
    }

    /// Picks the highest-precedence role out of `roles`, if any.
    pub fn highest(roles: impl IntoIterator<Item = Role>) -> Option<Role> {
        roles.into_iter().max()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A role name that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownRole(value.to_owned()))
    }
}
