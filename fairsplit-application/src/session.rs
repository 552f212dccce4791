use crate::model::Event;
use fairsplit_domain::UserId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

/// Identity of the caller, passed explicitly to every use case that needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: UserId,
    pub role: Role,
}

impl SessionContext {
    pub fn new(user_id: impl Into<UserId>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// Event owners and admins may view an event.
    pub fn can_view(&self, event: &Event) -> bool {
        self.role.is_admin() || event.created_by == self.user_id
    }
}
