use chrono::NaiveDateTime;
use folio_access::{Authority, Visibility};
use folio_content::{Blog, Post, Principal};
use serde::{Deserialize, Serialize};

use crate::DateFilter;

/// Which copy of the content is being read.
///
/// Supplied by the content-state collaborator. Only privileged requesters
/// are ever served the draft stage; everyone else reads live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// The published site.
    #[default]
    Live,
    /// Work in progress, including unpublished posts.
    Draft,
}

/// Whether `post` is readable under `visibility` at `stage`.
///
/// Live reads see published posts only, and when `as_of` is given only
/// those whose publication time has passed. Privileged draft reads see
/// everything.
pub fn is_visible(
    post: &Post,
    visibility: Visibility,
    stage: Stage,
    as_of: Option<&NaiveDateTime>,
) -> bool {
    match (visibility, stage) {
        (Visibility::Privileged, Stage::Draft) => true,
        _ => post.is_published() && as_of.is_none_or(|now| post.published_at <= *now),
    }
}

/// Resolves the posts of a blog that fall within a [`DateFilter`].
///
/// Results are ordered oldest first, with creation order breaking ties.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveQuery<'a> {
    authority: &'a Authority,
    stage: Stage,
    as_of: Option<NaiveDateTime>,
}

impl<'a> ArchiveQuery<'a> {
    /// A live-stage query with no clock.
    pub fn new(authority: &'a Authority) -> Self {
        Self {
            authority,
            stage: Stage::Live,
            as_of: None,
        }
    }

    /// Reads from `stage` instead of the live site.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// Hides posts scheduled after `now` from live reads.
    pub fn as_of(mut self, now: NaiveDateTime) -> Self {
        self.as_of = Some(now);
        self
    }

    /// Runs the query for `principal` over `posts` of `blog`.
    ///
    /// Posts belonging to any other blog are ignored. An empty result is a
    /// successful, valid answer.
    pub fn run<'p>(
        &self,
        blog: &Blog,
        posts: impl IntoIterator<Item = &'p Post>,
        filter: &DateFilter,
        principal: &Principal,
    ) -> Vec<&'p Post> {
        let visibility = self.authority.visibility(principal, &blog.id);

        let mut matches: Vec<&Post> = posts
            .into_iter()
            .filter(|post| post.blog == blog.id)
            .filter(|post| filter.contains(&post.published_at))
            .filter(|post| is_visible(post, visibility, self.stage, self.as_of.as_ref()))
            .collect();
        matches.sort_by_key(|post| (post.published_at, post.sequence));

        tracing::debug!(
            blog = %blog.id,
            %filter,
            ?visibility,
            stage = ?self.stage,
            count = matches.len(),
            "Resolved archive"
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_access::Settings;
    use folio_content::helpers::{blog_editor, fixture_now, timestamp, visitor, writer};
    use folio_content::{ContentSource, ContentStore, Role};
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn titles(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|post| post.title.clone()).collect()
    }

    fn staged_store() -> TestResult<ContentStore> {
        let mut store = ContentStore::default();
        store.insert_blog(
            Blog::new("journal", "Journal")
                .assign(blog_editor(), Role::Editor)
                .assign(writer(), Role::Writer),
        )?;
        store.insert_blog(Blog::new("other", "Other"))?;

        let noon = timestamp(2014, 3, 1, 12, 0);
        store.insert_post(Post::new("b", "journal", "Tie B", noon).authored_by(writer()))?;
        store.insert_post(Post::new("a", "journal", "Tie A", noon).authored_by(writer()))?;
        store.insert_post(
            Post::new("early", "journal", "Early", timestamp(2014, 1, 1, 8, 0)).authored_by(writer()),
        )?;
        store.insert_post(
            Post::new("wip", "journal", "Work In Progress", timestamp(2014, 2, 1, 8, 0))
                .authored_by(writer())
                .draft(),
        )?;
        store.insert_post(
            Post::new("elsewhere", "other", "Elsewhere", timestamp(2014, 2, 1, 8, 0)).authored_by(writer()),
        )?;
        Ok(store)
    }

    #[test]
    fn it_orders_oldest_first_with_creation_order_ties() -> TestResult {
        let store = staged_store()?;
        let authority = Authority::from_source(&store, &Settings::default());
        let blog = store.require_blog(&"journal".into())?;
        let filter = DateFilter::year(2014)?;

        let posts = ArchiveQuery::new(&authority).run(
            blog,
            store.posts_of(&blog.id),
            &filter,
            &Principal::Anonymous,
        );
        assert_eq!(titles(&posts), vec!["Early", "Tie B", "Tie A"]);

        let again = ArchiveQuery::new(&authority).run(
            blog,
            store.posts_of(&blog.id),
            &filter,
            &Principal::Anonymous,
        );
        assert_eq!(titles(&again), titles(&posts));
        Ok(())
    }

    #[test]
    fn it_ignores_posts_of_other_blogs() -> TestResult {
        let store = staged_store()?;
        let authority = Authority::from_source(&store, &Settings::default());
        let blog = store.require_blog(&"journal".into())?;

        // Hand the query every post, including those of another blog.
        let everything: Vec<&Post> = store
            .blogs()
            .into_iter()
            .flat_map(|blog| store.posts_of(&blog.id))
            .collect();
        let posts = ArchiveQuery::new(&authority).run(
            blog,
            everything,
            &DateFilter::month(2014, 2)?,
            &blog_editor().into(),
        );
        assert!(posts.is_empty());
        Ok(())
    }

    #[test]
    fn it_shows_drafts_only_to_privileged_draft_reads() -> TestResult {
        let store = staged_store()?;
        let authority = Authority::from_source(&store, &Settings::default());
        let blog = store.require_blog(&"journal".into())?;
        let filter = DateFilter::month(2014, 2)?;
        let query = |stage: Stage, principal: Principal| {
            ArchiveQuery::new(&authority)
                .stage(stage)
                .run(blog, store.posts_of(&blog.id), &filter, &principal)
                .len()
        };

        assert_eq!(query(Stage::Draft, blog_editor().into()), 1);
        assert_eq!(query(Stage::Draft, writer().into()), 1);
        assert_eq!(query(Stage::Live, blog_editor().into()), 0);
        assert_eq!(query(Stage::Draft, Principal::Anonymous), 0);
        assert_eq!(query(Stage::Draft, visitor().into()), 0);
        Ok(())
    }

    #[test]
    fn it_hides_scheduled_posts_from_live_reads() -> TestResult {
        let store = staged_store()?;
        let authority = Authority::from_source(&store, &Settings::default());
        let blog = store.require_blog(&"journal".into())?;
        let filter = DateFilter::year(2014)?;

        let before_noon = ArchiveQuery::new(&authority)
            .as_of(timestamp(2014, 3, 1, 11, 59))
            .run(blog, store.posts_of(&blog.id), &filter, &Principal::Anonymous);
        assert_eq!(titles(&before_noon), vec!["Early"]);

        let at_noon = ArchiveQuery::new(&authority)
            .as_of(timestamp(2014, 3, 1, 12, 0))
            .run(blog, store.posts_of(&blog.id), &filter, &Principal::Anonymous);
        assert_eq!(titles(&at_noon), vec!["Early", "Tie B", "Tie A"]);

        let drafts = ArchiveQuery::new(&authority)
            .as_of(fixture_now())
            .stage(Stage::Draft)
            .run(blog, store.posts_of(&blog.id), &filter, &blog_editor().into());
        assert_eq!(drafts.len(), 4);
        Ok(())
    }

    #[test]
    fn it_decides_visibility_from_state_and_stage() {
        let published = Post::new("p", "journal", "P", timestamp(2014, 1, 1, 0, 0)).authored_by(writer());
        let draft = published.clone().draft();

        assert!(is_visible(&published, Visibility::PublishedOnly, Stage::Live, None));
        assert!(is_visible(&published, Visibility::PublishedOnly, Stage::Draft, None));
        assert!(!is_visible(&draft, Visibility::PublishedOnly, Stage::Draft, None));
        assert!(!is_visible(&draft, Visibility::Privileged, Stage::Live, None));
        assert!(is_visible(&draft, Visibility::Privileged, Stage::Draft, None));
    }
}
