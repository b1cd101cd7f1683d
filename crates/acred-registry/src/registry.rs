//! # Credential Registry — The Governing State Machine
//!
//! `CredentialRegistry` is the explicitly owned store threading every
//! operation: owner identity, issuer directory, credential map, student
//! index, pause flag, issuance nonce, and audit log. Nothing here is
//! ambient process-wide state.
//!
//! ## Gate pattern
//!
//! Every mutating operation evaluates its guards in a fixed order before
//! the first write, so a rejected call is an atomic no-op:
//!
//! - issuance: pause → active issuer → field validation → hash → duplicate
//!   guard → write (store insert, index append, nonce bump, event).
//! - revocation: pause → record exists → not already revoked → caller is the
//!   frozen `issued_by` or the owner → write. The live `active` flag of the
//!   issuer is deliberately not consulted.
//! - authorize/deauthorize/pause/unpause: owner only. Admin operations are
//!   not pause-gated — the owner must be able to administer a halted
//!   registry.
//!
//! The ledger substrate serializes mutating calls, so exclusive ownership
//! (`&mut self`) is the whole concurrency story: no suspension points, no
//! background work, no internal retries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use acred_core::{Address, StudentId, Timestamp};

use crate::access::IssuerDirectory;
use crate::audit::{AuditLog, RegistryEvent};
use crate::credential::{compute_credential_hash, Credential, CredentialHash, CredentialStatus};
use crate::error::RegistryError;
use crate::index::StudentIndex;
use crate::pause::PauseSwitch;

/// The credential registry: owner, issuer directory, credential store,
/// student index, pause switch, and audit log.
///
/// Serializable as a whole — a serialized registry is the ledger snapshot
/// the CLI operates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRegistry {
    owner: Address,
    issuers: IssuerDirectory,
    credentials: BTreeMap<CredentialHash, Credential>,
    index: StudentIndex,
    pause_switch: PauseSwitch,
    /// Strictly monotonic issuance counter, part of every hash preimage.
    issuance_nonce: u64,
    audit: AuditLog,
}

impl CredentialRegistry {
    /// Create an empty registry owned by `owner` (the deploying identity).
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            issuers: IssuerDirectory::new(),
            credentials: BTreeMap::new(),
            index: StudentIndex::new(),
            pause_switch: PauseSwitch::new(),
            issuance_nonce: 0,
            audit: AuditLog::new(),
        }
    }

    // ─── AccessControl ───────────────────────────────────────────────

    /// Authorize a university to issue credentials. Owner only.
    ///
    /// Upserts the issuer record with `active = true` and emits
    /// `UniversityAuthorized`.
    pub fn authorize_university(
        &mut self,
        caller: Address,
        address: Address,
        name: &str,
    ) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        self.issuers.authorize(address, name)?;
        self.audit.append(RegistryEvent::UniversityAuthorized {
            address,
            name: name.to_string(),
        });
        Ok(())
    }

    /// Deauthorize a university. Owner only.
    ///
    /// Sets `active = false`, retains the record, emits
    /// `UniversityDeauthorized`. Previously issued credentials are
    /// untouched and remain verifiable.
    pub fn deauthorize_university(
        &mut self,
        caller: Address,
        address: Address,
    ) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        self.issuers.deauthorize(address)?;
        self.audit
            .append(RegistryEvent::UniversityDeauthorized { address });
        Ok(())
    }

    /// Whether the address is a currently active issuer.
    pub fn is_authorized_university(&self, address: &Address) -> bool {
        self.issuers.is_authorized(address)
    }

    /// The display name recorded for an issuer, retained after
    /// deauthorization. `None` for never-authorized addresses.
    pub fn university_name(&self, address: &Address) -> Option<&str> {
        self.issuers.name(address)
    }

    // ─── PauseSwitch ─────────────────────────────────────────────────

    /// Engage the global pause. Owner only.
    pub fn pause(&mut self, caller: Address) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        self.pause_switch.pause()
    }

    /// Release the global pause. Owner only.
    pub fn unpause(&mut self, caller: Address) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        self.pause_switch.unpause()
    }

    /// Whether the registry is currently paused.
    pub fn is_paused(&self) -> bool {
        self.pause_switch.is_paused()
    }

    // ─── CredentialStore ─────────────────────────────────────────────

    /// Issue a credential. Caller must be an active issuer; the registry
    /// must not be paused.
    ///
    /// Validates the required fields, computes the deterministic hash,
    /// stores the record, appends to the student index, bumps the issuance
    /// nonce, and emits `CredentialIssued`. Returns the hash.
    pub fn issue_credential(
        &mut self,
        caller: Address,
        student_id: StudentId,
        degree: &str,
        course_name: &str,
        graduation_date: Timestamp,
        document_ref: &str,
    ) -> Result<CredentialHash, RegistryError> {
        self.pause_switch.ensure_active()?;

        // Snapshot the issuer name while checking the capability; the
        // snapshot is frozen into the record and the event.
        let issuer_name = match self.issuers.get(&caller) {
            Some(issuer) if issuer.active => issuer.display_name.clone(),
            _ => return Err(RegistryError::NotAuthorizedIssuer { caller }),
        };

        if student_id.is_empty() {
            return Err(RegistryError::EmptyField {
                field: "student id",
            });
        }
        if degree.is_empty() {
            return Err(RegistryError::EmptyField { field: "degree" });
        }
        if course_name.is_empty() {
            return Err(RegistryError::EmptyField {
                field: "course name",
            });
        }

        let now = Timestamp::now();
        if graduation_date > now {
            return Err(RegistryError::FutureGraduationDate { graduation_date });
        }

        let hash = compute_credential_hash(
            &student_id,
            degree,
            course_name,
            graduation_date,
            caller,
            self.issuance_nonce,
        )?;
        // The nonce makes a collision unreachable; the guard enforces the
        // never-overwrite invariant regardless.
        if self.credentials.contains_key(&hash) {
            return Err(RegistryError::DuplicateCredential { hash });
        }

        // All guards passed — the single atomic write begins here.
        self.credentials.insert(
            hash,
            Credential {
                hash,
                student_id: student_id.clone(),
                degree: degree.to_string(),
                course_name: course_name.to_string(),
                graduation_date,
                issuer_name: issuer_name.clone(),
                issued_by: caller,
                issued_at: now,
                document_ref: document_ref.to_string(),
                status: CredentialStatus::Active,
            },
        );
        self.index.append(student_id.clone(), hash);
        self.issuance_nonce += 1;
        self.audit.append(RegistryEvent::CredentialIssued {
            hash,
            student_id,
            degree: degree.to_string(),
            course_name: course_name.to_string(),
            graduation_date,
            issuer_name,
            issued_by: caller,
            document_ref: document_ref.to_string(),
        });
        Ok(hash)
    }

    /// Revoke a credential. Caller must be the record's frozen `issued_by`
    /// or the owner; the registry must not be paused.
    ///
    /// The issuer's current `active` flag is deliberately not consulted:
    /// a deauthorized university keeps the right to revoke its own prior
    /// credentials.
    pub fn revoke_credential(
        &mut self,
        caller: Address,
        hash: CredentialHash,
    ) -> Result<(), RegistryError> {
        self.pause_switch.ensure_active()?;

        let owner = self.owner;
        let credential = self
            .credentials
            .get_mut(&hash)
            .ok_or(RegistryError::UnknownCredential { hash })?;
        if credential.is_revoked() {
            return Err(RegistryError::AlreadyRevoked { hash });
        }
        if caller != credential.issued_by && caller != owner {
            return Err(RegistryError::NotIssuerOrOwner { caller });
        }

        let revoked_at = Timestamp::now();
        credential.revoke(revoked_at)?;
        let student_id = credential.student_id.clone();
        self.audit.append(RegistryEvent::CredentialRevoked {
            hash,
            student_id,
            revoked_by: caller,
            revoked_at,
        });
        Ok(())
    }

    /// Fetch a credential record. Pure read; never rejects the caller.
    pub fn get_credential(&self, hash: &CredentialHash) -> Option<&Credential> {
        self.credentials.get(hash)
    }

    /// Whether a credential exists and has not been revoked.
    ///
    /// Returns false both for "never issued" and "revoked" — callers who
    /// need to distinguish the two use [`get_credential`].
    ///
    /// [`get_credential`]: CredentialRegistry::get_credential
    pub fn verify_credential(&self, hash: &CredentialHash) -> bool {
        self.credentials
            .get(hash)
            .map(|credential| !credential.is_revoked())
            .unwrap_or(false)
    }

    /// The credential hashes issued to a student, in issuance order.
    pub fn student_credentials(&self, student_id: &StudentId) -> &[CredentialHash] {
        self.index.hashes(student_id)
    }

    /// The number of credentials ever issued to a student.
    pub fn student_credential_count(&self, student_id: &StudentId) -> usize {
        self.index.count(student_id)
    }

    // ─── Observer surface ────────────────────────────────────────────

    /// The registry owner's address.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// All emitted events, in emission order. Never read by core logic.
    pub fn events(&self) -> &[RegistryEvent] {
        self.audit.events()
    }

    fn require_owner(&self, caller: Address) -> Result<(), RegistryError> {
        if caller != self.owner {
            return Err(RegistryError::NotOwner);
        }
        Ok(())
    }
}
