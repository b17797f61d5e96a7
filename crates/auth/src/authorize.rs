use thiserror::Error;

use crate::roles::Role;

/// Ledger actions subject to role policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewInventory,
    RecordUsage,
    AddItem,
    UpdateStock,
    RequestOrder,
    CreateOrder,
    ApproveOrder,
    ViewReports,
    ExportUsage,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error("role {role} may not {action:?}")]
    Forbidden { role: Role, action: Action },
}

/// Authorize an action for a role.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Nurses view stock, record usage and read alerts; doctors additionally
/// request replenishment; admins manage the catalog and orders outright.
pub fn authorize(role: Role, action: Action) -> Result<(), AuthzError> {
    let allowed = match action {
        Action::ViewInventory | Action::RecordUsage => true,
        Action::RequestOrder => matches!(role, Role::Doctor | Role::Admin),
        Action::AddItem
        | Action::UpdateStock
        | Action::CreateOrder
        | Action::ApproveOrder
        | Action::ViewReports
        | Action::ExportUsage => matches!(role, Role::Admin),
    };

    if allowed {
        Ok(())
    } else {
        Err(AuthzError::Forbidden { role, action })
    }
}
