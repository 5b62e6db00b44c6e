use std::fmt::{Display, Formatter};

use folio_content::{Blog, BlogId, Post, Principal, Role};
use serde::{Deserialize, Serialize};

use crate::MembershipIndex;

/// A node of the content hierarchy an evaluation is performed against.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A blog.
    Container(&'a Blog),
    /// A post.
    Item(&'a Post),
}

impl Node<'_> {
    /// The scope permissions on this node are evaluated at.
    pub fn scope(&self) -> Scope {
        match self {
            Node::Container(_) => Scope::Container,
            Node::Item(_) => Scope::Item,
        }
    }

    /// The blog this node is, or belongs to.
    pub fn blog_id(&self) -> &BlogId {
        match self {
            Node::Container(blog) => &blog.id,
            Node::Item(post) => &post.blog,
        }
    }
}

impl<'a> From<&'a Blog> for Node<'a> {
    fn from(value: &'a Blog) -> Self {
        Node::Container(value)
    }
}

impl<'a> From<&'a Post> for Node<'a> {
    fn from(value: &'a Post) -> Self {
        Node::Item(value)
    }
}

/// The level of the hierarchy an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// The blog itself.
    Container,
    /// A single post.
    Item,
}

/// The role a principal effectively holds against a particular node.
///
/// At container scope this is always one of the container roles. At item
/// scope, writers and contributors who authored the post are reported as
/// an author, remembering which container role the authorship was granted
/// under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectiveRole {
    /// Container editor. Unaffected by authorship.
    Editor,
    /// Container writer acting on something they did not author.
    Writer,
    /// Container contributor acting on something they did not author.
    Contributor,
    /// Author of the post, holding writer at the container.
    WriterAuthor,
    /// Author of the post, holding contributor at the container.
    ContributorAuthor,
}

impl EffectiveRole {
    /// The container role this effective role derives from.
    pub fn container_role(self) -> Role {
        match self {
            EffectiveRole::Editor => Role::Editor,
            EffectiveRole::Writer | EffectiveRole::WriterAuthor => Role::Writer,
            EffectiveRole::Contributor | EffectiveRole::ContributorAuthor => Role::Contributor,
        }
    }

    /// Whether the role was granted through authorship.
    pub fn is_author(self) -> bool {
        matches!(
            self,
            EffectiveRole::WriterAuthor | EffectiveRole::ContributorAuthor
        )
    }

    /// Display name. Both author variants are called "Author".
    pub fn name(self) -> &'static str {
        if self.is_author() {
            "Author"
        } else {
            self.container_role().name()
        }
    }
}

impl From<Role> for EffectiveRole {
    fn from(value: Role) -> Self {
        match value {
            Role::Editor => EffectiveRole::Editor,
            Role::Writer => EffectiveRole::Writer,
            Role::Contributor => EffectiveRole::Contributor,
        }
    }
}

impl Display for EffectiveRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What writers and contributors may do to posts they did not author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAccess {
    /// Nothing: item rights come from authorship alone.
    #[default]
    AuthorsOnly,
    /// Their container role applies to every post in the blog.
    ContainerWide,
}

/// Resolves the effective role of a principal against a node.
#[derive(Debug, Clone, Copy)]
pub struct RoleResolver<'a> {
    index: &'a MembershipIndex,
    item_access: ItemAccess,
}

impl<'a> RoleResolver<'a> {
    /// Creates a resolver over `index`.
    pub fn new(index: &'a MembershipIndex, item_access: ItemAccess) -> Self {
        Self { index, item_access }
    }

    /// The effective role of `principal` on `node`, or `None`.
    pub fn resolve<'n>(&self, principal: &Principal, node: impl Into<Node<'n>>) -> Option<EffectiveRole> {
        let node = node.into();
        let resolved = match node {
            Node::Container(blog) => self
                .index
                .role_of_container(principal, &blog.id)
                .map(EffectiveRole::from),
            Node::Item(post) => self.resolve_item(principal, post),
        };

        tracing::debug!(
            %principal,
            blog = %node.blog_id(),
            scope = ?node.scope(),
            role = ?resolved,
            "Resolved role"
        );
        resolved
    }

    fn resolve_item(&self, principal: &Principal, post: &Post) -> Option<EffectiveRole> {
        // Authorship only counts against the post's own blog.
        let role = self.index.role_of_container(principal, &post.blog)?;
        let authored = principal.member().is_some_and(|member| post.is_author(member));

        match (role, authored, self.item_access) {
            (Role::Editor, _, _) => Some(EffectiveRole::Editor),
            (Role::Writer, true, _) => Some(EffectiveRole::WriterAuthor),
            (Role::Contributor, true, _) => Some(EffectiveRole::ContributorAuthor),
            (_, false, ItemAccess::AuthorsOnly) => None,
            (role, false, ItemAccess::ContainerWide) => Some(EffectiveRole::from(role)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ContentSource;
    use folio_content::helpers::{blog_editor, contributor, fixture_store, visitor, writer};

    fn post<'a>(store: &'a impl ContentSource, id: &str) -> &'a Post {
        store.post(&id.into()).unwrap()
    }

    fn blog<'a>(store: &'a impl ContentSource, id: &str) -> &'a Blog {
        store.blog(&id.into()).unwrap()
    }

    #[test]
    fn it_reports_container_roles() {
        let store = fixture_store();
        let index = MembershipIndex::from_source(&store);
        let resolver = RoleResolver::new(&index, ItemAccess::default());
        let fourth = blog(&store, "fourth-blog");

        assert_eq!(
            resolver.resolve(&blog_editor().into(), fourth),
            Some(EffectiveRole::Editor)
        );
        assert_eq!(
            resolver.resolve(&writer().into(), fourth),
            Some(EffectiveRole::Writer)
        );
        assert_eq!(
            resolver.resolve(&contributor().into(), fourth),
            Some(EffectiveRole::Contributor)
        );
        assert_eq!(resolver.resolve(&visitor().into(), fourth), None);
    }

    #[test]
    fn it_upgrades_authors_at_item_scope() {
        let store = fixture_store();
        let index = MembershipIndex::from_source(&store);
        let resolver = RoleResolver::new(&index, ItemAccess::default());
        let post_a = post(&store, "post-a");

        let as_writer = resolver.resolve(&writer().into(), post_a);
        let as_contributor = resolver.resolve(&contributor().into(), post_a);

        assert_eq!(as_writer, Some(EffectiveRole::WriterAuthor));
        assert_eq!(as_contributor, Some(EffectiveRole::ContributorAuthor));
        assert_eq!(as_writer.map(EffectiveRole::name), Some("Author"));
    }

    #[test]
    fn it_keeps_editor_regardless_of_authorship() {
        let store = fixture_store();
        let index = MembershipIndex::from_source(&store);
        let resolver = RoleResolver::new(&index, ItemAccess::default());

        for post in store.posts_of(&"fourth-blog".into()) {
            assert_eq!(
                resolver.resolve(&blog_editor().into(), post),
                Some(EffectiveRole::Editor),
                "editor on {}",
                post.id
            );
        }
    }

    #[test]
    fn it_ignores_authorship_outside_the_posts_blog() {
        let store = fixture_store();
        let index = MembershipIndex::from_source(&store);
        let resolver = RoleResolver::new(&index, ItemAccess::ContainerWide);
        let post_b = post(&store, "post-b");

        // Writer authored post-b but holds no role on second-blog.
        assert_eq!(resolver.resolve(&writer().into(), post_b), None);
        assert_eq!(resolver.resolve(&contributor().into(), post_b), None);
    }

    #[test]
    fn it_applies_item_access_policy_to_non_authors() {
        let store = fixture_store();
        let index = MembershipIndex::from_source(&store);
        let post_d = post(&store, "post-d");

        let strict = RoleResolver::new(&index, ItemAccess::AuthorsOnly);
        assert_eq!(strict.resolve(&writer().into(), post_d), None);
        assert_eq!(strict.resolve(&contributor().into(), post_d), None);

        let wide = RoleResolver::new(&index, ItemAccess::ContainerWide);
        assert_eq!(
            wide.resolve(&writer().into(), post_d),
            Some(EffectiveRole::Writer)
        );
        assert_eq!(
            wide.resolve(&contributor().into(), post_d),
            Some(EffectiveRole::Contributor)
        );
    }

    #[test]
    fn it_resolves_anonymous_to_no_role() {
        let store = fixture_store();
        let index = MembershipIndex::from_source(&store);
        let resolver = RoleResolver::new(&index, ItemAccess::ContainerWide);

        for blog in store.blogs() {
            assert_eq!(resolver.resolve(&Principal::Anonymous, blog), None);
            for post in store.posts_of(&blog.id) {
                assert_eq!(resolver.resolve(&Principal::Anonymous, post), None);
            }
        }
    }
}
