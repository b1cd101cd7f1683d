//! End-to-end flows through the credential registry: authorization,
//! issuance, verification, revocation, and pause behavior, exercised the
//! way an external caller drives them.

use acred_core::{Address, StudentId, Timestamp};
use acred_registry::{
    CredentialHash, CredentialRegistry, ErrorKind, RegistryError, RegistryEvent,
};

fn addr(last: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = last;
    Address::from_bytes(bytes)
}

fn owner() -> Address {
    addr(1)
}

fn university1() -> Address {
    addr(2)
}

fn university2() -> Address {
    addr(3)
}

fn unauthorized_user() -> Address {
    addr(4)
}

fn yesterday() -> Timestamp {
    let secs = Timestamp::now().epoch_secs() - 86_400;
    Timestamp::from_epoch_secs(secs).expect("valid epoch")
}

fn tomorrow() -> Timestamp {
    let secs = Timestamp::now().epoch_secs() + 86_400;
    Timestamp::from_epoch_secs(secs).expect("valid epoch")
}

/// A fresh registry with both universities authorized.
fn deploy() -> CredentialRegistry {
    let mut registry = CredentialRegistry::new(owner());
    registry
        .authorize_university(owner(), university1(), "Test University 1")
        .unwrap();
    registry
        .authorize_university(owner(), university2(), "Test University 2")
        .unwrap();
    registry
}

fn issue_test_credential(registry: &mut CredentialRegistry) -> CredentialHash {
    registry
        .issue_credential(
            university1(),
            StudentId::new("STU123456"),
            "Bachelor of Science",
            "Computer Science",
            yesterday(),
            "QmTestHash123",
        )
        .unwrap()
}

// ─── Deployment ──────────────────────────────────────────────────────

#[test]
fn fresh_registry_has_owner_and_no_issuers() {
    let registry = CredentialRegistry::new(owner());
    assert_eq!(registry.owner(), owner());
    assert!(!registry.is_authorized_university(&university1()));
    assert_eq!(registry.university_name(&university1()), None);
}

// ─── University authorization ────────────────────────────────────────

#[test]
fn owner_authorizes_university() {
    let mut registry = CredentialRegistry::new(owner());
    registry
        .authorize_university(owner(), university1(), "New University")
        .unwrap();

    assert!(registry.is_authorized_university(&university1()));
    assert_eq!(
        registry.university_name(&university1()),
        Some("New University")
    );
    assert_eq!(
        registry.events().last(),
        Some(&RegistryEvent::UniversityAuthorized {
            address: university1(),
            name: "New University".to_string(),
        })
    );
}

#[test]
fn non_owner_cannot_authorize() {
    let mut registry = CredentialRegistry::new(owner());
    let result =
        registry.authorize_university(unauthorized_user(), university1(), "New University");
    assert!(matches!(result, Err(RegistryError::NotOwner)));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Authorization);
    assert!(!registry.is_authorized_university(&university1()));
    assert!(registry.events().is_empty());
}

#[test]
fn empty_name_rejected() {
    let mut registry = CredentialRegistry::new(owner());
    let result = registry.authorize_university(owner(), university1(), "");
    assert!(matches!(result, Err(RegistryError::EmptyField { .. })));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
}

#[test]
fn zero_address_rejected() {
    let mut registry = CredentialRegistry::new(owner());
    let result = registry.authorize_university(owner(), Address::ZERO, "Test University");
    assert!(matches!(result, Err(RegistryError::ZeroAddress)));
}

#[test]
fn owner_deauthorizes_university() {
    let mut registry = deploy();
    registry
        .deauthorize_university(owner(), university1())
        .unwrap();
    assert!(!registry.is_authorized_university(&university1()));
    assert_eq!(
        registry.events().last(),
        Some(&RegistryEvent::UniversityDeauthorized {
            address: university1(),
        })
    );
}

#[test]
fn deauthorizing_unknown_university_rejected() {
    let mut registry = deploy();
    let result = registry.deauthorize_university(owner(), addr(99));
    assert!(matches!(
        result,
        Err(RegistryError::IssuerNotAuthorized { .. })
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::State);
}

// ─── Scenario A: authorize → issue → verify ──────────────────────────

#[test]
fn scenario_a_issue_and_verify() {
    let mut registry = CredentialRegistry::new(owner());
    registry
        .authorize_university(owner(), university1(), "Test University 1")
        .unwrap();

    let graduation_date = yesterday();
    let hash = registry
        .issue_credential(
            university1(),
            StudentId::new("STU123456"),
            "Bachelor of Science",
            "Computer Science",
            graduation_date,
            "QmTestHash123",
        )
        .unwrap();

    assert_eq!(
        registry.events().last(),
        Some(&RegistryEvent::CredentialIssued {
            hash,
            student_id: StudentId::new("STU123456"),
            degree: "Bachelor of Science".to_string(),
            course_name: "Computer Science".to_string(),
            graduation_date,
            issuer_name: "Test University 1".to_string(),
            issued_by: university1(),
            document_ref: "QmTestHash123".to_string(),
        })
    );

    let stored = registry.get_credential(&hash).unwrap();
    assert_eq!(stored.student_id, StudentId::new("STU123456"));
    assert_eq!(stored.degree, "Bachelor of Science");
    assert_eq!(stored.course_name, "Computer Science");
    assert_eq!(stored.graduation_date, graduation_date);
    assert_eq!(stored.issuer_name, "Test University 1");
    assert_eq!(stored.issued_by, university1());
    assert_eq!(stored.document_ref, "QmTestHash123");
    assert!(!stored.is_revoked());

    assert!(registry.verify_credential(&hash));
}

// ─── Issuance validation ─────────────────────────────────────────────

#[test]
fn unauthorized_caller_cannot_issue() {
    let mut registry = deploy();
    let result = registry.issue_credential(
        unauthorized_user(),
        StudentId::new("STU123456"),
        "Bachelor of Science",
        "Computer Science",
        yesterday(),
        "QmTestHash123",
    );
    assert!(matches!(
        result,
        Err(RegistryError::NotAuthorizedIssuer { .. })
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Authorization);
}

#[test]
fn empty_required_fields_rejected() {
    let mut registry = deploy();

    let student = registry.issue_credential(
        university1(),
        StudentId::new(""),
        "Bachelor of Science",
        "Computer Science",
        yesterday(),
        "",
    );
    assert_eq!(
        student.unwrap_err(),
        RegistryError::EmptyField {
            field: "student id"
        }
    );

    let degree = registry.issue_credential(
        university1(),
        StudentId::new("STU123456"),
        "",
        "Computer Science",
        yesterday(),
        "",
    );
    assert_eq!(degree.unwrap_err(), RegistryError::EmptyField { field: "degree" });

    let course = registry.issue_credential(
        university1(),
        StudentId::new("STU123456"),
        "Bachelor of Science",
        "",
        yesterday(),
        "",
    );
    assert_eq!(
        course.unwrap_err(),
        RegistryError::EmptyField {
            field: "course name"
        }
    );

    assert_eq!(
        registry.student_credential_count(&StudentId::new("STU123456")),
        0
    );
}

#[test]
fn future_graduation_date_rejected() {
    let mut registry = deploy();
    let result = registry.issue_credential(
        university1(),
        StudentId::new("STU123456"),
        "Bachelor of Science",
        "Computer Science",
        tomorrow(),
        "QmTestHash123",
    );
    assert!(matches!(
        result,
        Err(RegistryError::FutureGraduationDate { .. })
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
}

// ─── Verification and student index ──────────────────────────────────

#[test]
fn verification_distinguishes_nothing_but_get_credential_does() {
    let mut registry = deploy();
    let hash = issue_test_credential(&mut registry);

    // verify: false for both "never issued" and "revoked".
    let fake = CredentialHash::from_hex(&"00".repeat(32)).unwrap();
    assert!(!registry.verify_credential(&fake));
    registry.revoke_credential(university1(), hash).unwrap();
    assert!(!registry.verify_credential(&hash));

    // get_credential tells the two states apart.
    assert!(registry.get_credential(&fake).is_none());
    assert!(registry.get_credential(&hash).unwrap().is_revoked());
}

#[test]
fn student_index_tracks_issuance_order() {
    let mut registry = deploy();
    let student = StudentId::new("STU123456");

    let first = issue_test_credential(&mut registry);
    let second = registry
        .issue_credential(
            university2(),
            student.clone(),
            "Master of Science",
            "Data Engineering",
            yesterday(),
            "",
        )
        .unwrap();

    assert_eq!(registry.student_credentials(&student), &[first, second]);
    assert_eq!(registry.student_credential_count(&student), 2);
}

#[test]
fn count_always_equals_sequence_length() {
    let mut registry = deploy();
    let student = StudentId::new("STU123456");
    for _ in 0..4 {
        issue_test_credential(&mut registry);
        assert_eq!(
            registry.student_credential_count(&student),
            registry.student_credentials(&student).len()
        );
    }

    // Revocation never shrinks the index.
    let hash = registry.student_credentials(&student)[0];
    registry.revoke_credential(university1(), hash).unwrap();
    assert_eq!(registry.student_credential_count(&student), 4);
}

// ─── Scenario B: pause blocks issuance ───────────────────────────────

#[test]
fn scenario_b_paused_registry_rejects_issuance() {
    let mut registry = deploy();
    registry.pause(owner()).unwrap();
    let events_before = registry.events().len();

    let result = registry.issue_credential(
        university1(),
        StudentId::new("STU123456"),
        "Bachelor of Science",
        "Computer Science",
        yesterday(),
        "QmTestHash123",
    );

    assert!(matches!(result, Err(RegistryError::RegistryPaused)));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Availability);
    assert_eq!(registry.events().len(), events_before);
    assert_eq!(
        registry.student_credential_count(&StudentId::new("STU123456")),
        0
    );
}

#[test]
fn unpause_restores_issuance() {
    let mut registry = deploy();
    registry.pause(owner()).unwrap();
    assert!(registry.is_paused());
    registry.unpause(owner()).unwrap();
    assert!(!registry.is_paused());
    issue_test_credential(&mut registry);
}

#[test]
fn only_owner_may_pause_or_unpause() {
    let mut registry = deploy();
    assert!(matches!(
        registry.pause(unauthorized_user()),
        Err(RegistryError::NotOwner)
    ));
    assert!(!registry.is_paused());

    registry.pause(owner()).unwrap();
    assert!(matches!(
        registry.unpause(university1()),
        Err(RegistryError::NotOwner)
    ));
    assert!(registry.is_paused());
}

// ─── Scenario C: foreign issuer cannot revoke ────────────────────────

#[test]
fn scenario_c_other_university_cannot_revoke() {
    let mut registry = deploy();
    let hash = issue_test_credential(&mut registry);

    let result = registry.revoke_credential(university2(), hash);
    assert!(matches!(result, Err(RegistryError::NotIssuerOrOwner { .. })));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Authorization);
    assert!(registry.verify_credential(&hash));
}

#[test]
fn unauthorized_user_cannot_revoke() {
    let mut registry = deploy();
    let hash = issue_test_credential(&mut registry);
    let result = registry.revoke_credential(unauthorized_user(), hash);
    assert!(matches!(result, Err(RegistryError::NotIssuerOrOwner { .. })));
}

// ─── Scenario D: issuer revokes, terminal state ──────────────────────

#[test]
fn scenario_d_issuer_revokes_then_second_revoke_rejected() {
    let mut registry = deploy();
    let hash = issue_test_credential(&mut registry);

    registry.revoke_credential(university1(), hash).unwrap();

    match registry.events().last() {
        Some(RegistryEvent::CredentialRevoked {
            hash: event_hash,
            student_id,
            revoked_by,
            ..
        }) => {
            assert_eq!(*event_hash, hash);
            assert_eq!(*student_id, StudentId::new("STU123456"));
            assert_eq!(*revoked_by, university1());
        }
        other => panic!("expected CredentialRevoked, got: {other:?}"),
    }
    assert!(!registry.verify_credential(&hash));

    let again = registry.revoke_credential(university1(), hash);
    assert!(matches!(again, Err(RegistryError::AlreadyRevoked { .. })));
    assert_eq!(again.unwrap_err().kind(), ErrorKind::State);
    assert!(!registry.verify_credential(&hash));
}

#[test]
fn owner_may_revoke_any_credential() {
    let mut registry = deploy();
    let hash = issue_test_credential(&mut registry);
    registry.revoke_credential(owner(), hash).unwrap();
    assert!(!registry.verify_credential(&hash));
}

#[test]
fn revoking_unknown_credential_rejected() {
    let mut registry = deploy();
    let fake = CredentialHash::from_hex(&"ff".repeat(32)).unwrap();
    let result = registry.revoke_credential(university1(), fake);
    assert!(matches!(result, Err(RegistryError::UnknownCredential { .. })));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::State);
}

// ─── Deauthorization does not reach back ─────────────────────────────

#[test]
fn deauthorization_preserves_issued_credentials() {
    let mut registry = deploy();
    let hash = issue_test_credential(&mut registry);

    registry
        .deauthorize_university(owner(), university1())
        .unwrap();

    // Still verifiable, issuer snapshot intact.
    assert!(registry.verify_credential(&hash));
    let credential = registry.get_credential(&hash).unwrap();
    assert_eq!(credential.issuer_name, "Test University 1");

    // The deauthorized issuer can no longer issue...
    let issue_again = registry.issue_credential(
        university1(),
        StudentId::new("STU777777"),
        "Bachelor of Arts",
        "Philosophy",
        yesterday(),
        "",
    );
    assert!(matches!(
        issue_again,
        Err(RegistryError::NotAuthorizedIssuer { .. })
    ));

    // ...but keeps the right to revoke its prior credentials.
    registry.revoke_credential(university1(), hash).unwrap();
    assert!(!registry.verify_credential(&hash));
}

// ─── Revocation is permanent ─────────────────────────────────────────

#[test]
fn verification_never_reverts_to_true() {
    let mut registry = deploy();
    let hash = issue_test_credential(&mut registry);
    assert!(registry.verify_credential(&hash));

    registry.revoke_credential(university1(), hash).unwrap();
    assert!(!registry.verify_credential(&hash));

    // No subsequent operation resurrects the credential: re-authorizing the
    // issuer, pausing and unpausing, further issuance.
    registry
        .authorize_university(owner(), university1(), "Test University 1")
        .unwrap();
    registry.pause(owner()).unwrap();
    registry.unpause(owner()).unwrap();
    issue_test_credential(&mut registry);
    assert!(!registry.verify_credential(&hash));
}
