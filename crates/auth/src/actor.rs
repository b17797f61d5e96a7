use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// The acting user, as supplied per request by the identity collaborator.
///
/// `display_name` is what lands in audit fields ("Sister Priya"), while
/// `username` is the login identity ("nurse1"). Neither is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    username: String,
    display_name: String,
    role: Role,
}

impl Actor {
    pub fn new(
        username: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            role,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
