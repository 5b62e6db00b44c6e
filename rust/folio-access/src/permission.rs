use serde::{Deserialize, Serialize};

use crate::{EffectiveRole, Scope};

/// An action a principal may attempt on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Change the node's content.
    Edit,
    /// Make the node live.
    Publish,
    /// Create a child under the node.
    AddChild,
}

impl Action {
    /// Every action.
    pub const ALL: [Action; 3] = [Action::Edit, Action::Publish, Action::AddChild];
}

/// Whether `role` may perform `action` at `scope`.
///
/// This is the complete capability table. Authorship is already folded into
/// the effective role, so no ownership flag is consulted here. Posts are
/// leaves: nobody adds children to them.
///
/// | Role               | Container                 | Item          |
/// |--------------------|---------------------------|---------------|
/// | Editor             | edit, publish, add child  | edit, publish |
/// | Writer             | add child                 | edit, publish |
/// | Contributor        | add child                 | edit          |
/// | Author (writer)    | -                         | edit, publish |
/// | Author (contrib.)  | -                         | edit          |
/// | none               | -                         | -             |
pub const fn can_perform(role: Option<EffectiveRole>, action: Action, scope: Scope) -> bool {
    use Action::*;
    use EffectiveRole::*;

    let Some(role) = role else {
        return false;
    };

    match (scope, role, action) {
        (Scope::Container, Editor, _) => true,
        (Scope::Container, Writer | Contributor, AddChild) => true,
        (Scope::Container, _, _) => false,

        (Scope::Item, _, AddChild) => false,
        (Scope::Item, Editor | Writer | WriterAuthor, Edit | Publish) => true,
        (Scope::Item, Contributor | ContributorAuthor, Edit) => true,
        (Scope::Item, Contributor | ContributorAuthor, Publish) => false,
    }
}

/// How much of a blog's content a requester may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Only published posts.
    PublishedOnly,
    /// Unpublished posts too, when the reading stage provides them.
    Privileged,
}

impl Visibility {
    /// Visibility granted by a container-level role.
    ///
    /// Any role able to edit posts is privileged.
    pub const fn for_role(role: Option<EffectiveRole>) -> Self {
        if can_perform(role, Action::Edit, Scope::Item) {
            Visibility::Privileged
        } else {
            Visibility::PublishedOnly
        }
    }
}
