use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Blog, BlogId, ContentError, ContentResult, Post, PostId};

/// Read-only access to loaded content.
///
/// This is the seam to the storage collaborator: whatever persists blogs
/// and posts hands them to Folio through this trait, already loaded.
pub trait ContentSource {
    /// Looks up a blog by id.
    fn blog(&self, id: &BlogId) -> Option<&Blog>;

    /// Every blog the source holds.
    fn blogs(&self) -> Vec<&Blog>;

    /// Looks up a post by id.
    fn post(&self, id: &PostId) -> Option<&Post>;

    /// The posts that belong to `blog`, in creation order.
    fn posts_of(&self, blog: &BlogId) -> Vec<&Post>;
}

/// Serialized form of a [`ContentStore`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Blogs to load.
    #[serde(default)]
    pub blogs: Vec<Blog>,
    /// Posts to load, in creation order.
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// In-memory [`ContentSource`].
///
/// Posts receive their creation sequence number from the order in which
/// they are inserted.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    blogs: BTreeMap<BlogId, Blog>,
    posts: Vec<Post>,
}

impl ContentStore {
    /// Loads a store from a JSON [`ContentDocument`].
    pub fn from_json(json: &str) -> ContentResult<Self> {
        let document: ContentDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    /// Adds a blog. Fails if a blog with the same id is already present.
    pub fn insert_blog(&mut self, blog: Blog) -> ContentResult<()> {
        if self.blogs.contains_key(&blog.id) {
            return Err(ContentError::DuplicateBlog(blog.id));
        }
        tracing::trace!(blog = %blog.id, "Loaded blog");
        self.blogs.insert(blog.id.clone(), blog);
        Ok(())
    }

    /// Adds a post to an already loaded blog and assigns its sequence.
    pub fn insert_post(&mut self, mut post: Post) -> ContentResult<()> {
        if !self.blogs.contains_key(&post.blog) {
            return Err(ContentError::UnknownBlog(post.blog));
        }
        if post.authors.is_empty() {
            return Err(ContentError::MissingAuthors(post.id));
        }
        if self.posts.iter().any(|existing| existing.id == post.id) {
            return Err(ContentError::DuplicatePost(post.id));
        }

        post.sequence = self.posts.len() as u64;
        tracing::trace!(post = %post.id, blog = %post.blog, sequence = post.sequence, "Loaded post");
        self.posts.push(post);
        Ok(())
    }

    /// Looks up a blog, failing if it is unknown.
    pub fn require_blog(&self, id: &BlogId) -> ContentResult<&Blog> {
        self.blogs
            .get(id)
            .ok_or_else(|| ContentError::UnknownBlog(id.clone()))
    }
}

impl TryFrom<ContentDocument> for ContentStore {
    type Error = ContentError;

    fn try_from(document: ContentDocument) -> Result<Self, Self::Error> {
        let mut store = ContentStore::default();
        for blog in document.blogs {
            store.insert_blog(blog)?;
        }
        for post in document.posts {
            store.insert_post(post)?;
        }
        tracing::debug!(
            blogs = store.blogs.len(),
            posts = store.posts.len(),
            "Loaded content document"
        );
        Ok(store)
    }
}

impl ContentSource for ContentStore {
    fn blog(&self, id: &BlogId) -> Option<&Blog> {
        self.blogs.get(id)
    }

    fn blogs(&self) -> Vec<&Blog> {
        self.blogs.values().collect()
    }

    fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    fn posts_of(&self, blog: &BlogId) -> Vec<&Post> {
        self.posts.iter().filter(|post| &post.blog == blog).collect()
    }
}
