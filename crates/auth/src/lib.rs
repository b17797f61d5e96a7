//! `wardstock-auth` — pure identity/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the identity
//! collaborator (whatever fronts the ledger) supplies an [`Actor`], and the
//! policy here decides which ledger actions that actor's role may perform.
//! Credential validation is explicitly not this crate's job.

pub mod actor;
pub mod authorize;
pub mod roles;

pub use actor::Actor;
pub use authorize::{authorize, Action, AuthzError};
pub use roles::Role;
