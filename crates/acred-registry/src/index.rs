//! # Student Index
//!
//! Per-student ordered list of credential hashes, populated exclusively by
//! the registry on issuance.
//!
//! ## Invariant
//!
//! The index is append-only — there is no removal API, so the length of a
//! student's entry always equals the issuance count for that identifier,
//! independent of later revocations. Insertion order is issuance order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use acred_core::StudentId;

use crate::credential::CredentialHash;

/// Append-only map of student identifier to issued credential hashes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentIndex {
    entries: BTreeMap<StudentId, Vec<CredentialHash>>,
}

impl StudentIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a credential hash to a student's entry.
    ///
    /// Each issuance produces a fresh entry; no de-duplication is applied.
    pub(crate) fn append(&mut self, student_id: StudentId, hash: CredentialHash) {
        self.entries.entry(student_id).or_default().push(hash);
    }

    /// The credential hashes issued to a student, in issuance order.
    ///
    /// Empty for unknown identifiers; never an error.
    pub fn hashes(&self, student_id: &StudentId) -> &[CredentialHash] {
        self.entries
            .get(student_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The number of credentials ever issued to a student.
    pub fn count(&self, student_id: &StudentId) -> usize {
        self.hashes(student_id).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acred_core::{Address, Timestamp};

    use crate::credential::compute_credential_hash;

    fn hash(nonce: u64) -> CredentialHash {
        compute_credential_hash(
            &StudentId::new("STU123456"),
            "Bachelor of Science",
            "Computer Science",
            Timestamp::parse("2026-06-15T00:00:00Z").unwrap(),
            Address::from_bytes([1u8; 20]),
            nonce,
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_student_is_empty() {
        let index = StudentIndex::new();
        let id = StudentId::new("STU000000");
        assert!(index.hashes(&id).is_empty());
        assert_eq!(index.count(&id), 0);
    }

    #[test]
    fn test_append_preserves_issuance_order() {
        let mut index = StudentIndex::new();
        let id = StudentId::new("STU123456");
        let (h0, h1, h2) = (hash(0), hash(1), hash(2));
        index.append(id.clone(), h0);
        index.append(id.clone(), h1);
        index.append(id.clone(), h2);
        assert_eq!(index.hashes(&id), &[h0, h1, h2]);
    }

    #[test]
    fn test_count_equals_length() {
        let mut index = StudentIndex::new();
        let id = StudentId::new("STU123456");
        for nonce in 0..5 {
            index.append(id.clone(), hash(nonce));
            assert_eq!(index.count(&id), index.hashes(&id).len());
        }
        assert_eq!(index.count(&id), 5);
    }

    #[test]
    fn test_students_are_independent() {
        let mut index = StudentIndex::new();
        let a = StudentId::new("STU-A");
        let b = StudentId::new("STU-B");
        index.append(a.clone(), hash(0));
        assert_eq!(index.count(&a), 1);
        assert_eq!(index.count(&b), 0);
    }
}
