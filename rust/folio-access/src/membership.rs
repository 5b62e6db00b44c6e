use std::collections::BTreeMap;

use folio_content::{Blog, BlogId, ContentSource, MemberId, Principal, Role};

/// Lookup table of container-level roles.
///
/// Keyed by blog and then by member, so each (member, blog) pair carries at
/// most one role. Unknown pairs and the anonymous principal fail closed to
/// no role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipIndex {
    roles: BTreeMap<BlogId, BTreeMap<MemberId, Role>>,
}

impl MembershipIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the assignments of every blog in `blogs`.
    pub fn from_blogs<'a>(blogs: impl IntoIterator<Item = &'a Blog>) -> Self {
        let mut index = Self::new();
        for blog in blogs {
            for (member, role) in &blog.assignments {
                index.assign(blog.id.clone(), member.clone(), *role);
            }
        }
        index
    }

    /// Indexes every blog a content source holds.
    pub fn from_source(source: &impl ContentSource) -> Self {
        Self::from_blogs(source.blogs())
    }

    /// Records `role` for `member` on `blog`, replacing any earlier role.
    pub fn assign(&mut self, blog: BlogId, member: MemberId, role: Role) {
        self.roles.entry(blog).or_default().insert(member, role);
    }

    /// The role `principal` holds against `blog`.
    pub fn role_of_container(&self, principal: &Principal, blog: &BlogId) -> Option<Role> {
        let member = principal.member()?;
        self.roles.get(blog)?.get(member).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::helpers::{blog_editor, contributor, fixture_store, visitor, writer};

    #[test]
    fn it_looks_up_container_roles() {
        let index = MembershipIndex::from_source(&fixture_store());
        let fourth = BlogId::from("fourth-blog");

        assert_eq!(
            index.role_of_container(&blog_editor().into(), &fourth),
            Some(Role::Editor)
        );
        assert_eq!(
            index.role_of_container(&writer().into(), &fourth),
            Some(Role::Writer)
        );
        assert_eq!(
            index.role_of_container(&contributor().into(), &fourth),
            Some(Role::Contributor)
        );
        assert_eq!(index.role_of_container(&visitor().into(), &fourth), None);
    }

    #[test]
    fn it_fails_closed_for_unknown_pairs() {
        let index = MembershipIndex::from_source(&fixture_store());

        assert_eq!(
            index.role_of_container(&blog_editor().into(), &"first-blog".into()),
            None
        );
        assert_eq!(
            index.role_of_container(&writer().into(), &"no-such-blog".into()),
            None
        );
    }

    #[test]
    fn it_never_grants_anonymous_a_role() {
        let index = MembershipIndex::from_source(&fixture_store());
        for blog in ["first-blog", "second-blog", "fourth-blog"] {
            assert_eq!(
                index.role_of_container(&Principal::Anonymous, &blog.into()),
                None
            );
        }
    }

    #[test]
    fn it_replaces_on_reassignment() {
        let mut index = MembershipIndex::new();
        index.assign("journal".into(), "ada".into(), Role::Editor);
        index.assign("journal".into(), "ada".into(), Role::Contributor);

        assert_eq!(
            index.role_of_container(&MemberId::from("ada").into(), &"journal".into()),
            Some(Role::Contributor)
        );
    }
}
