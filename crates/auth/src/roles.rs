use serde::{Deserialize, Serialize};

use crate::authorize::AuthzError;

/// Staff role used for authorization decisions.
///
/// The role set is closed: policy is written against these three variants,
/// so free-text roles would silently authorize nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Nurse,
    Doctor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Nurse => "Nurse",
            Role::Doctor => "Doctor",
            Role::Admin => "Admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("nurse") => Ok(Role::Nurse),
            s if s.eq_ignore_ascii_case("doctor") => Ok(Role::Doctor),
            s if s.eq_ignore_ascii_case("admin") => Ok(Role::Admin),
            other => Err(AuthzError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_case_insensitively() {
        assert_eq!("Nurse".parse::<Role>().unwrap(), Role::Nurse);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("DOCTOR".parse::<Role>().unwrap(), Role::Doctor);
    }

    #[test]
    fn unknown_role_is_an_error() {
        match "Pharmacist".parse::<Role>() {
            Err(AuthzError::UnknownRole(r)) => assert_eq!(r, "Pharmacist"),
            other => panic!("expected UnknownRole, got {other:?}"),
        }
    }
}
