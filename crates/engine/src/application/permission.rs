//! Coarse permission seam consulted before every service call.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Decides whether an action on a record kind may proceed.
#[cfg_attr(test, mockall::automock)]
pub trait PermissionPolicy: Send + Sync {
    fn allows(&self, action: Action, entity_type: &str) -> bool;
}

/// Grants everything. Wired at bootstrap; there is no user model yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl PermissionPolicy for AllowAll {
    fn allows(&self, _action: Action, _entity_type: &str) -> bool {
        true
    }
}
