use studentsphere_core::model::note::Note;
use studentsphere_core::seed;
use studentsphere_core::store::keys;
use studentsphere_core::{
    KeyValueStore, LatencyProfile, MemoryStore, Portal, ServiceError, SqliteStore, StoreError,
};

#[test]
fn seeding_past_the_quota_surfaces_quota_exceeded() {
    let portal = Portal::new(MemoryStore::with_quota(256), LatencyProfile::disabled());

    let err = portal.students().list().unwrap_err();
    assert!(matches!(
        err,
        StoreError::QuotaExceeded { ref key, quota_bytes: Some(256), .. } if key == keys::STUDENTS
    ));
    assert!(err.is_retryable());
    assert!(portal.store().backend().is_empty());
}

#[test]
fn add_past_the_quota_keeps_the_previous_document() {
    let portal = Portal::new(MemoryStore::with_quota(1_200), LatencyProfile::disabled());
    let before = portal.notes().list().unwrap();

    let big = Note {
        id: "big".to_string(),
        title: "Lecture dump".to_string(),
        content: "x".repeat(2_000),
        ..Note::default()
    };
    let err = portal.notes().add(big).unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { .. }));
    assert_eq!(portal.notes().list().unwrap(), before);
}

#[test]
fn sqlite_quota_is_enforced_too() {
    let backend = SqliteStore::open_in_memory().unwrap().with_quota(64);
    let portal = Portal::new(backend, LatencyProfile::disabled());

    let err = portal.assignments().list().unwrap_err();
    assert!(matches!(
        err,
        StoreError::QuotaExceeded { quota_bytes: Some(64), .. }
    ));
}

#[test]
fn disabled_storage_surfaces_unavailable_everywhere() {
    let portal = Portal::new(MemoryStore::disabled(), LatencyProfile::disabled());

    assert!(matches!(
        portal.notes().list(),
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        portal.ensure_initialized(),
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        portal.students().find_by_key("demo"),
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        portal.contacts().submit("Asha", "asha@example.com", "hi"),
        Err(ServiceError::Store(StoreError::Unavailable(_)))
    ));
}

#[test]
fn malformed_document_surfaces_data_corruption() {
    let portal = Portal::in_memory();
    portal
        .store()
        .backend()
        .set(keys::MARKS, "{not json")
        .unwrap();

    let err = portal.marks().list().unwrap_err();
    assert!(matches!(err, StoreError::DataCorruption { ref key, .. } if key == keys::MARKS));
    assert!(!err.is_retryable());

    // The corrupt value is left for inspection, not reseeded.
    assert_eq!(
        portal.store().backend().get(keys::MARKS).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn older_documents_missing_fields_still_load() {
    let portal = Portal::in_memory();
    portal
        .store()
        .backend()
        .set(
            keys::STUDENTS,
            r#"[{"id":"7","name":"Legacy Student","usn":"1CR19EC007"}]"#,
        )
        .unwrap();

    let students = portal.students().list().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].usn, "1CR19EC007");
    assert_eq!(students[0].cgpa, 0.0);
    assert!(students[0].phone.is_none());
}

#[test]
fn fractional_student_attendance_loads_and_resolves() {
    let portal = Portal::in_memory();
    portal
        .store()
        .backend()
        .set(
            keys::STUDENTS,
            r#"[{"id":"1","name":"Asha Rao","usn":"1CR21EC201","cgpa":8.1,"attendance":82.5}]"#,
        )
        .unwrap();

    let students = portal.students().list().unwrap();
    assert_eq!(students[0].attendance, 82.5);

    let found = portal.students().find_by_key("1cr21ec201").unwrap().unwrap();
    assert_eq!(found.attendance, 82.5);
}

#[test]
fn sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.sqlite3");

    {
        let portal = Portal::new(SqliteStore::open(&path).unwrap(), LatencyProfile::disabled());
        assert_eq!(portal.ensure_initialized().unwrap(), 10);
        assert!(portal.notes().delete("1").unwrap());
    }

    let reopened = Portal::new(SqliteStore::open(&path).unwrap(), LatencyProfile::disabled());
    assert_eq!(reopened.ensure_initialized().unwrap(), 0);
    assert_eq!(reopened.notes().list().unwrap(), seed::notes()[1..].to_vec());
    assert_eq!(reopened.students().list().unwrap().len(), seed::SEED_STUDENT_COUNT);
}

#[test]
fn two_portals_on_one_file_share_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.sqlite3");
    let first = Portal::new(SqliteStore::open(&path).unwrap(), LatencyProfile::disabled());
    let second = Portal::new(SqliteStore::open(&path).unwrap(), LatencyProfile::disabled());

    let pending = first.assignments().list().unwrap()[0].clone();
    first.assignments().toggle_status(&pending).unwrap();

    // Only the in-progress assignment is left open.
    assert_eq!(second.assignments().pending_count().unwrap(), 1);
}

#[test]
fn unreadable_database_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-a-db.sqlite3");
    std::fs::write(&path, "not an sqlite database\n".repeat(200)).unwrap();

    let err = SqliteStore::open(&path).err().unwrap();
    assert!(matches!(err, StoreError::Unavailable(_)));
}
