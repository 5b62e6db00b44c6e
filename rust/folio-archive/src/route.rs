use chrono::NaiveDateTime;
use folio_access::Authority;
use folio_content::{Blog, BlogId, ContentSource, Post, Principal};

use crate::{ArchiveQuery, DateFilter, NotFound, Stage};

/// Name of the archive action in blog URLs.
pub const ARCHIVE_ACTION: &str = "archive";

/// Splits the path following `archive` into raw date segments.
///
/// Empty segments, such as those produced by a trailing slash, are dropped.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Joins `blog_link`, the archive action and the segments of `filter`.
///
/// ```rust
/// use folio_archive::{archive_link, DateFilter};
///
/// let filter = DateFilter::day(2013, 10, 1).unwrap();
/// assert_eq!(archive_link("/first-blog/", Some(&filter)), "/first-blog/archive/2013/10/01");
/// assert_eq!(archive_link("/first-blog", None), "/first-blog/archive");
/// ```
pub fn archive_link(blog_link: &str, filter: Option<&DateFilter>) -> String {
    let mut link = format!("{}/{ARCHIVE_ACTION}", blog_link.trim_end_matches('/'));
    for segment in filter.map(DateFilter::segments).unwrap_or_default() {
        link.push('/');
        link.push_str(&segment);
    }
    link
}

/// An inbound request for a blog's archive.
#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    /// The blog whose archive is requested.
    pub blog: BlogId,
    /// Raw date segments following `archive`.
    pub segments: Vec<String>,
    /// Who is asking.
    pub principal: Principal,
    /// Reading stage supplied by the content-state collaborator.
    pub stage: Stage,
    /// Clock used to hide scheduled posts.
    pub as_of: Option<NaiveDateTime>,
}

impl ArchiveRequest {
    /// A live-stage request with no date segments.
    pub fn new(blog: impl Into<BlogId>, principal: Principal) -> Self {
        Self {
            blog: blog.into(),
            segments: Vec::new(),
            principal,
            stage: Stage::Live,
            as_of: None,
        }
    }

    /// Sets the raw date segments.
    pub fn segments<S: Into<String>>(mut self, segments: impl IntoIterator<Item = S>) -> Self {
        self.segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the date segments from the path following `archive`.
    pub fn path(self, path: &str) -> Self {
        self.segments(split_segments(path))
    }

    /// Sets the reading stage.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// Sets the clock.
    pub fn as_of(mut self, now: NaiveDateTime) -> Self {
        self.as_of = Some(now);
        self
    }

    /// Validates the segments and runs the archive query.
    pub fn resolve<'s, S: ContentSource>(&self, source: &'s S, authority: &Authority) -> ArchiveOutcome<'s> {
        match self.try_resolve(source, authority) {
            Ok(page) => ArchiveOutcome::Found(page),
            Err(reason) => {
                tracing::debug!(blog = %self.blog, %reason, "Archive not found");
                ArchiveOutcome::NotFound(reason)
            }
        }
    }

    fn try_resolve<'s, S: ContentSource>(
        &self,
        source: &'s S,
        authority: &Authority,
    ) -> Result<ArchivePage<'s>, NotFound> {
        let filter = DateFilter::parse(&self.segments)?;
        let blog = source
            .blog(&self.blog)
            .ok_or_else(|| NotFound::UnknownBlog(self.blog.clone()))?;

        let mut query = ArchiveQuery::new(authority).stage(self.stage);
        if let Some(now) = self.as_of {
            query = query.as_of(now);
        }
        let posts = query.run(blog, source.posts_of(&blog.id), &filter, &self.principal);

        Ok(ArchivePage {
            blog,
            filter,
            posts,
        })
    }
}

/// A resolved archive page.
#[derive(Debug, Clone)]
pub struct ArchivePage<'s> {
    /// The blog the archive belongs to.
    pub blog: &'s Blog,
    /// The validated filter.
    pub filter: DateFilter,
    /// Matching posts, oldest first.
    pub posts: Vec<&'s Post>,
}

/// Result of resolving an [`ArchiveRequest`].
#[derive(Debug, Clone)]
pub enum ArchiveOutcome<'s> {
    /// A valid filter over an existing blog. May hold no posts.
    Found(ArchivePage<'s>),
    /// Invalid segments or an unknown blog.
    NotFound(NotFound),
}

impl<'s> ArchiveOutcome<'s> {
    /// Transport status for this outcome: 200 when found, 404 otherwise.
    pub fn status(&self) -> u16 {
        match self {
            ArchiveOutcome::Found(_) => 200,
            ArchiveOutcome::NotFound(_) => 404,
        }
    }

    /// The page, if found.
    pub fn page(&self) -> Option<&ArchivePage<'s>> {
        match self {
            ArchiveOutcome::Found(page) => Some(page),
            ArchiveOutcome::NotFound(_) => None,
        }
    }
}
