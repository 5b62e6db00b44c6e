use crate::{BlogId, PostId};

/// Errors raised while loading content into a [`crate::ContentStore`].
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A blog was requested that the store does not hold.
    #[error("Unknown blog '{0}'")]
    UnknownBlog(BlogId),

    /// A blog with this id was already loaded.
    #[error("Duplicate blog '{0}'")]
    DuplicateBlog(BlogId),

    /// A post with this id was already loaded.
    #[error("Duplicate post '{0}'")]
    DuplicatePost(PostId),

    /// A post lists no authors.
    #[error("Post '{0}' has no authors")]
    MissingAuthors(PostId),

    /// The content document could not be decoded.
    #[error("Malformed content document: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ContentError {
    fn from(error: serde_json::Error) -> Self {
        Self::Malformed(error.to_string())
    }
}

/// Result type for content loading.
pub type ContentResult<T> = Result<T, ContentError>;
