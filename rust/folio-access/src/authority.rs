use folio_content::{BlogId, ContentSource, Principal};

use crate::{
    Action, EffectiveRole, ItemAccess, MembershipIndex, Node, RoleResolver, Settings, Visibility,
    can_perform,
};

/// Answers "may this principal do that to this node?".
///
/// Owns the membership index and the item access policy, and composes
/// [`RoleResolver`] with [`can_perform`]. Holds no other state, so a single
/// instance can serve any number of concurrent evaluations.
#[derive(Debug, Clone, Default)]
pub struct Authority {
    index: MembershipIndex,
    item_access: ItemAccess,
}

impl Authority {
    /// Creates an authority over an existing index.
    pub fn new(index: MembershipIndex, item_access: ItemAccess) -> Self {
        Self { index, item_access }
    }

    /// Indexes every blog of `source`, configured by `settings`.
    pub fn from_source(source: &impl ContentSource, settings: &Settings) -> Self {
        Self::new(MembershipIndex::from_source(source), settings.item_access)
    }

    /// The underlying membership index.
    pub fn index(&self) -> &MembershipIndex {
        &self.index
    }

    /// A resolver borrowing this authority's index.
    pub fn resolver(&self) -> RoleResolver<'_> {
        RoleResolver::new(&self.index, self.item_access)
    }

    /// The effective role of `principal` on `node`.
    pub fn role_of<'n>(&self, principal: &Principal, node: impl Into<Node<'n>>) -> Option<EffectiveRole> {
        self.resolver().resolve(principal, node)
    }

    /// Whether `principal` may perform `action` on `node`.
    pub fn can<'n>(&self, principal: &Principal, action: Action, node: impl Into<Node<'n>>) -> bool {
        let node = node.into();
        let role = self.role_of(principal, node);
        let allowed = can_perform(role, action, node.scope());
        tracing::trace!(%principal, ?action, scope = ?node.scope(), allowed, "Evaluated permission");
        allowed
    }

    /// Whether `principal` may edit `node`.
    pub fn can_edit<'n>(&self, principal: &Principal, node: impl Into<Node<'n>>) -> bool {
        self.can(principal, Action::Edit, node)
    }

    /// Whether `principal` may publish `node`.
    pub fn can_publish<'n>(&self, principal: &Principal, node: impl Into<Node<'n>>) -> bool {
        self.can(principal, Action::Publish, node)
    }

    /// Whether `principal` may add children to `node`.
    pub fn can_add_children<'n>(&self, principal: &Principal, node: impl Into<Node<'n>>) -> bool {
        self.can(principal, Action::AddChild, node)
    }

    /// How much of `blog` the principal may read.
    pub fn visibility(&self, principal: &Principal, blog: &BlogId) -> Visibility {
        let role = self
            .index
            .role_of_container(principal, blog)
            .map(EffectiveRole::from);
        Visibility::for_role(role)
    }
}
