//! # Credential Records and Deterministic Identification
//!
//! Defines the credential record, its status state machine, and the
//! deterministic hash that identifies it.
//!
//! ## States
//!
//! ```text
//! NonExistent ──issue──▶ Active ──revoke──▶ Revoked (terminal)
//! ```
//!
//! Issuance is the only creating transition, revocation the only other
//! transition, and nothing leaves `Revoked`. Status is a tagged enum rather
//! than a bool-plus-timestamp pair, so the terminal transition is enforced
//! structurally: a `revoked_at` can only exist inside `Revoked`.
//!
//! ## Hash preimage
//!
//! The credential hash is SHA-256 over the JCS canonicalization of
//! `{student_id, degree, course_name, graduation_date (epoch seconds),
//! issued_by (hex), nonce}`. The nonce is a strictly monotonic per-registry
//! issuance counter, so two issuance calls never collide even with identical
//! fields in the same instant. A verifier holding the hash presents a single
//! opaque token bound to the record's content.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use acred_core::{sha256_digest, Address, CanonicalBytes, ContentDigest, StudentId, Timestamp};

use crate::error::RegistryError;

/// The deterministic identifier of a credential.
///
/// Rendered and serialized as 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CredentialHash(ContentDigest);

impl CredentialHash {
    /// Parse a credential hash from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, acred_core::AcredError> {
        Ok(Self(ContentDigest::from_hex(s)?))
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl fmt::Display for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for CredentialHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CredentialHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CredentialHash::from_hex(&s).map_err(de::Error::custom)
    }
}

/// The lifecycle status of a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialStatus {
    /// The credential is valid.
    Active,
    /// The credential has been revoked (terminal).
    Revoked {
        /// When the revocation took effect.
        revoked_at: Timestamp,
    },
}

impl CredentialStatus {
    /// Whether the credential has been revoked.
    pub fn is_revoked(&self) -> bool {
        matches!(self, Self::Revoked { .. })
    }

    /// The revocation instant, if revoked.
    pub fn revoked_at(&self) -> Option<Timestamp> {
        match self {
            Self::Revoked { revoked_at } => Some(*revoked_at),
            Self::Active => None,
        }
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("ACTIVE"),
            Self::Revoked { .. } => f.write_str("REVOKED"),
        }
    }
}

/// An academic credential record.
///
/// Immutable after issuance except for the one-way `Active → Revoked`
/// transition. `issuer_name` and `issued_by` are frozen snapshots taken at
/// issuance: deauthorizing the issuer later does not retroactively alter
/// the displayed issuer or the credential's validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Deterministic identifier of this record.
    pub hash: CredentialHash,
    /// The student the credential was awarded to.
    pub student_id: StudentId,
    /// Degree awarded (e.g. "Bachelor of Science").
    pub degree: String,
    /// Course of study (e.g. "Computer Science").
    pub course_name: String,
    /// Graduation date. Never in the future relative to issuance.
    pub graduation_date: Timestamp,
    /// Issuer display name, snapshotted at issuance.
    pub issuer_name: String,
    /// Issuer address, snapshotted at issuance. Revocation capability
    /// derives from this field, never from the live directory.
    pub issued_by: Address,
    /// When the credential was issued.
    pub issued_at: Timestamp,
    /// Opaque reference to supplementary material in an external
    /// content-addressed store. Stored verbatim, may be empty; the
    /// registry never fetches or interprets it.
    pub document_ref: String,
    /// Lifecycle status.
    pub status: CredentialStatus,
}

impl Credential {
    /// Whether the credential has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.status.is_revoked()
    }

    /// The revocation instant, if revoked.
    pub fn revoked_at(&self) -> Option<Timestamp> {
        self.status.revoked_at()
    }

    /// Apply the one-way `Active → Revoked` transition.
    ///
    /// # Errors
    ///
    /// `AlreadyRevoked` if the credential is already in the terminal state.
    pub fn revoke(&mut self, revoked_at: Timestamp) -> Result<(), RegistryError> {
        if self.is_revoked() {
            return Err(RegistryError::AlreadyRevoked { hash: self.hash });
        }
        self.status = CredentialStatus::Revoked { revoked_at };
        Ok(())
    }
}

/// The documented preimage tuple for credential hash computation.
#[derive(Serialize)]
struct HashPreimage<'a> {
    student_id: &'a str,
    degree: &'a str,
    course_name: &'a str,
    graduation_date: i64,
    issued_by: String,
    nonce: u64,
}

/// Compute the deterministic hash identifying a credential.
///
/// Pure function over the documented field tuple plus the issuance nonce.
/// The same inputs always produce the same hash; any differing field (or
/// nonce) produces a different hash.
pub fn compute_credential_hash(
    student_id: &StudentId,
    degree: &str,
    course_name: &str,
    graduation_date: Timestamp,
    issued_by: Address,
    nonce: u64,
) -> Result<CredentialHash, RegistryError> {
    let preimage = HashPreimage {
        student_id: student_id.as_str(),
        degree,
        course_name,
        graduation_date: graduation_date.epoch_secs(),
        issued_by: issued_by.to_hex(),
        nonce,
    };
    let bytes = CanonicalBytes::new(&preimage)
        .map_err(|e| RegistryError::Canonicalization(e.to_string()))?;
    Ok(CredentialHash(sha256_digest(&bytes)))
}
