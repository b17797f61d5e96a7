use wardstock_auth::{Actor, Role};

/// Acting-user context for a request.
///
/// Inserted by the identity middleware and required by every ledger route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    actor: Actor,
}

impl ActorContext {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn role(&self) -> Role {
        self.actor.role()
    }

    /// The name that lands in audit fields.
    pub fn display_name(&self) -> &str {
        self.actor.display_name()
    }
}
