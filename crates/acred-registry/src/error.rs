//! # Registry Error Taxonomy
//!
//! Every rejection the registry can produce, with a machine-distinguishable
//! reason. All failures are synchronous, atomic no-ops: a rejected call
//! mutates nothing.
//!
//! Errors fall into four kinds, exposed via [`RegistryError::kind()`]:
//!
//! - **Authorization** — the caller lacks the owner / issuer /
//!   issuer-or-owner capability the operation requires.
//! - **Validation** — a required field is empty, an address is zero, or a
//!   graduation date lies in the future.
//! - **State** — the operation is incompatible with current state (record
//!   absent, already revoked, issuer not authorized, redundant pause toggle).
//! - **Availability** — the registry is paused.
//!
//! Queries never raise these errors for "not found"; they return
//! false/None/empty instead, keeping "verification says no" distinct from
//! "the call itself failed".

use thiserror::Error;

use acred_core::{Address, Timestamp};

use crate::credential::CredentialHash;

/// The four rejection categories of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller lacks the required capability.
    Authorization,
    /// An argument failed validation.
    Validation,
    /// The operation is incompatible with current state.
    State,
    /// The registry is paused.
    Availability,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::State => "STATE",
            Self::Availability => "AVAILABILITY",
        };
        f.write_str(s)
    }
}

/// Errors raised by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not the registry owner.
    #[error("caller is not the registry owner")]
    NotOwner,

    /// Caller is not an active authorized issuer.
    #[error("only authorized universities can issue credentials: {caller}")]
    NotAuthorizedIssuer {
        /// The rejected caller.
        caller: Address,
    },

    /// Caller is neither the credential's issuing university nor the owner.
    #[error("only the issuing university or the registry owner can revoke: {caller}")]
    NotIssuerOrOwner {
        /// The rejected caller.
        caller: Address,
    },

    /// A required string field was empty.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The zero address was supplied where a real identity is required.
    #[error("invalid university address: zero address")]
    ZeroAddress,

    /// The graduation date lies in the future.
    #[error("graduation date {graduation_date} cannot be in the future")]
    FutureGraduationDate {
        /// The rejected graduation date.
        graduation_date: Timestamp,
    },

    /// Digest preimage canonicalization failed.
    ///
    /// Unreachable for the registry's own preimages (strings and integers
    /// only), but propagated rather than unwrapped.
    #[error("canonicalization failed: {0}")]
    Canonicalization(String),

    /// The university is not currently authorized.
    #[error("university {address} is not authorized")]
    IssuerNotAuthorized {
        /// The address that is not authorized.
        address: Address,
    },

    /// No credential exists under the given hash.
    #[error("credential {hash} does not exist")]
    UnknownCredential {
        /// The unknown hash.
        hash: CredentialHash,
    },

    /// The credential has already been revoked.
    #[error("credential {hash} has already been revoked")]
    AlreadyRevoked {
        /// The hash of the revoked credential.
        hash: CredentialHash,
    },

    /// Issuance computed a hash that already maps to a record.
    ///
    /// Issuance never silently overwrites an existing record.
    #[error("credential {hash} already exists")]
    DuplicateCredential {
        /// The colliding hash.
        hash: CredentialHash,
    },

    /// `pause` was called while already paused.
    #[error("registry is already paused")]
    AlreadyPaused,

    /// `unpause` was called while not paused.
    #[error("registry is not paused")]
    NotPaused,

    /// A mutating operation was attempted while the registry is paused.
    #[error("registry is paused")]
    RegistryPaused,
}

impl RegistryError {
    /// The rejection category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOwner | Self::NotAuthorizedIssuer { .. } | Self::NotIssuerOrOwner { .. } => {
                ErrorKind::Authorization
            }
            Self::EmptyField { .. }
            | Self::ZeroAddress
            | Self::FutureGraduationDate { .. }
            | Self::Canonicalization(_) => ErrorKind::Validation,
            Self::IssuerNotAuthorized { .. }
            | Self::UnknownCredential { .. }
            | Self::AlreadyRevoked { .. }
            | Self::DuplicateCredential { .. }
            | Self::AlreadyPaused
            | Self::NotPaused => ErrorKind::State,
            Self::RegistryPaused => ErrorKind::Availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(RegistryError::NotOwner.kind(), ErrorKind::Authorization);
        assert_eq!(
            RegistryError::NotAuthorizedIssuer {
                caller: Address::ZERO
            }
            .kind(),
            ErrorKind::Authorization
        );
        assert_eq!(
            RegistryError::EmptyField { field: "degree" }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(RegistryError::ZeroAddress.kind(), ErrorKind::Validation);
        assert_eq!(RegistryError::AlreadyPaused.kind(), ErrorKind::State);
        assert_eq!(RegistryError::NotPaused.kind(), ErrorKind::State);
        assert_eq!(
            RegistryError::RegistryPaused.kind(),
            ErrorKind::Availability
        );
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Authorization.to_string(), "AUTHORIZATION");
        assert_eq!(ErrorKind::Validation.to_string(), "VALIDATION");
        assert_eq!(ErrorKind::State.to_string(), "STATE");
        assert_eq!(ErrorKind::Availability.to_string(), "AVAILABILITY");
    }

    #[test]
    fn test_display_messages() {
        let err = RegistryError::EmptyField { field: "student id" };
        assert_eq!(err.to_string(), "student id cannot be empty");
        assert_eq!(
            RegistryError::RegistryPaused.to_string(),
            "registry is paused"
        );
    }
}
