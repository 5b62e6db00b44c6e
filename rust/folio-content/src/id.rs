use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier! {
    /// Stable identifier of a member account.
    MemberId
}

identifier! {
    /// Stable identifier of a blog.
    BlogId
}

identifier! {
    /// Stable identifier of a post.
    PostId
}

/// The actor an evaluation is performed for.
///
/// Authentication happens elsewhere; by the time a principal reaches Folio
/// it is either a known member or explicitly anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Principal {
    /// No session. Always resolves to no role.
    Anonymous,
    /// A signed-in member.
    Member(MemberId),
}

impl Principal {
    /// The member behind this principal, if any.
    pub fn member(&self) -> Option<&MemberId> {
        match self {
            Principal::Anonymous => None,
            Principal::Member(member) => Some(member),
        }
    }

    /// Whether this is the anonymous principal.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Principal::Anonymous)
    }
}

impl From<MemberId> for Principal {
    fn from(value: MemberId) -> Self {
        Principal::Member(value)
    }
}

impl From<Option<MemberId>> for Principal {
    fn from(value: Option<MemberId>) -> Self {
        value.map_or(Principal::Anonymous, Principal::Member)
    }
}

impl Display for Principal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Principal::Anonymous => f.write_str("anonymous"),
            Principal::Member(member) => write!(f, "member:{member}"),
        }
    }
}
