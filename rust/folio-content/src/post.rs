use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{BlogId, MemberId, PostId};

/// Whether a post is visible on the live site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicationState {
    /// Visible to everyone once its publication timestamp has passed.
    #[default]
    Published,
    /// Only visible to privileged members reading the draft stage.
    Draft,
}

/// A post: the item node of the content hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier of the post.
    pub id: PostId,
    /// The blog this post belongs to.
    pub blog: BlogId,
    /// Human readable title.
    pub title: String,
    /// Members that authored the post.
    #[serde(default)]
    pub authors: BTreeSet<MemberId>,
    /// When the post is (or was) published.
    pub published_at: NaiveDateTime,
    /// Current publication state.
    #[serde(default)]
    pub state: PublicationState,
    /// Creation order, assigned by the store. Used to break timestamp ties.
    #[serde(default)]
    pub sequence: u64,
}

impl Post {
    /// Creates a published post with no authors.
    pub fn new(
        id: impl Into<PostId>,
        blog: impl Into<BlogId>,
        title: impl Into<String>,
        published_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            blog: blog.into(),
            title: title.into(),
            authors: BTreeSet::new(),
            published_at,
            state: PublicationState::Published,
            sequence: 0,
        }
    }

    /// Adds `member` to the authors of this post.
    pub fn authored_by(mut self, member: impl Into<MemberId>) -> Self {
        self.authors.insert(member.into());
        self
    }

    /// Marks this post as a draft.
    pub fn draft(mut self) -> Self {
        self.state = PublicationState::Draft;
        self
    }

    /// Whether `member` is one of the authors.
    pub fn is_author(&self, member: &MemberId) -> bool {
        self.authors.contains(member)
    }

    /// Whether the post is in the published state.
    pub fn is_published(&self) -> bool {
        self.state == PublicationState::Published
    }
}
