//! # Domain Identity Newtypes
//!
//! Identifiers of the admission domain. Each is a distinct type so that a
//! formation reference cannot be passed where a proposition is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one admission proposition.
///
/// An opaque string, normally a UUID. Equality is by value. Persisted
/// fixtures and external systems sometimes use non-UUID keys, so the
/// content is not validated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropositionIdentity(String);

impl PropositionIdentity {
    /// Generate a new random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier.
    pub fn from_string(uuid: impl Into<String>) -> Self {
        Self(uuid.into())
    }

    /// Access the inner identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PropositionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PropositionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a degree programme for one academic year.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FormationIdentity {
    /// Programme acronym (e.g. `SC3DP`).
    pub sigle: String,
    /// Academic year, identified by its starting calendar year.
    pub annee: i32,
}

impl FormationIdentity {
    /// Build a formation identity.
    pub fn new(sigle: impl Into<String>, annee: i32) -> Self {
        Self {
            sigle: sigle.into(),
            annee,
        }
    }
}

impl std::fmt::Display for FormationIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.sigle, self.annee)
    }
}
