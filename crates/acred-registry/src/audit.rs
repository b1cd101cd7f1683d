//! # Audit Log — Append-Only Event Emission
//!
//! Every successful mutation appends one event describing it. The log is
//! write-only from the core's perspective: registry logic only appends and
//! never reads events back — [`AuditLog::events()`] exists for external
//! observers (dashboards, indexers).

use serde::{Deserialize, Serialize};

use acred_core::{Address, StudentId, Timestamp};

use crate::credential::CredentialHash;

/// An event emitted by a successful registry mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A university was authorized (or re-authorized).
    UniversityAuthorized {
        /// The issuer's address.
        address: Address,
        /// The display name recorded for the issuer.
        name: String,
    },

    /// A university was deauthorized.
    UniversityDeauthorized {
        /// The deauthorized address.
        address: Address,
    },

    /// A credential was issued.
    CredentialIssued {
        /// Deterministic identifier of the new record.
        hash: CredentialHash,
        /// The student the credential was awarded to.
        student_id: StudentId,
        /// Degree awarded.
        degree: String,
        /// Course of study.
        course_name: String,
        /// Graduation date.
        graduation_date: Timestamp,
        /// Issuer display name snapshot.
        issuer_name: String,
        /// Issuer address snapshot.
        issued_by: Address,
        /// Opaque supplementary-document reference, possibly empty.
        document_ref: String,
    },

    /// A credential was revoked.
    CredentialRevoked {
        /// The revoked credential's hash.
        hash: CredentialHash,
        /// The student the credential was awarded to.
        student_id: StudentId,
        /// Who performed the revocation (issuer or owner).
        revoked_by: Address,
        /// When the revocation took effect.
        revoked_at: Timestamp,
    },
}

impl RegistryEvent {
    /// The event's name, stable across releases.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UniversityAuthorized { .. } => "UniversityAuthorized",
            Self::UniversityDeauthorized { .. } => "UniversityDeauthorized",
            Self::CredentialIssued { .. } => "CredentialIssued",
            Self::CredentialRevoked { .. } => "CredentialRevoked",
        }
    }
}

/// Append-only log of registry events, in emission order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLog {
    events: Vec<RegistryEvent>,
}

impl AuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Only the registry core may write.
    pub(crate) fn append(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }

    /// All emitted events, in emission order. Observer surface only.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Number of emitted events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
