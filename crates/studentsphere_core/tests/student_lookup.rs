use studentsphere_core::service::student_import::ImportError;
use studentsphere_core::service::student_service::DEMO_LOOKUP_KEY;
use studentsphere_core::{seed, sign_in, Portal, Role, ServiceError, Student};

#[test]
fn demo_key_resolves_to_the_first_student() {
    let portal = Portal::in_memory();
    let found = portal.students().find_by_key(DEMO_LOOKUP_KEY).unwrap();
    assert_eq!(found, seed::students().into_iter().next());
}

#[test]
fn demo_key_follows_the_current_head_of_the_roster() {
    let portal = Portal::in_memory();
    let newcomer = Student::enrollment("Nikhil Rao", "1CR21EC101");
    portal.students().add(newcomer.clone()).unwrap();

    assert_eq!(portal.students().find_by_key("demo").unwrap(), Some(newcomer));
}

#[test]
fn usn_lookup_ignores_case() {
    let portal = Portal::in_memory();
    for key in ["1CR21EC005", "1cr21ec005", "1Cr21eC005"] {
        let found = portal.students().find_by_key(key).unwrap().unwrap();
        assert_eq!(found.name, "Vikram Singh");
    }
}

#[test]
fn unknown_usn_is_none() {
    let portal = Portal::in_memory();
    assert_eq!(portal.students().find_by_key("1CR21EC999").unwrap(), None);
    assert_eq!(portal.students().find_by_key("").unwrap(), None);
}

#[test]
fn student_session_resolves_its_record_or_falls_back() {
    let portal = Portal::in_memory();
    let students = portal.students();

    let known = sign_in(Role::Student, "1cr21ec002", "pw").unwrap();
    let record = known.student_record(&students).unwrap().unwrap();
    assert_eq!(record.name, "Priya Sharma");

    let unknown = sign_in(Role::Student, "1CR21EC999", "pw").unwrap();
    let record = unknown.student_record(&students).unwrap().unwrap();
    assert_eq!(record.id, "1");

    let faculty = sign_in(Role::Faculty, "roopa@uni.std", "pw").unwrap();
    assert_eq!(faculty.student_record(&students).unwrap(), None);
}

#[test]
fn csv_import_prepends_rows_ahead_of_the_roster() {
    let portal = Portal::in_memory();
    let csv = "name,usn,semester,email,cgpa,attendance\n\
               Nikhil Rao,1CR21EC101,6th,nikhil101@sambhram.edu,8.4,91\n\
               Divya Shetty,1CR21EC102,,,,\n";

    let imported = portal.students().import_csv(csv.as_bytes()).unwrap();
    assert_eq!(imported.len(), 2);

    let listed = portal.students().list().unwrap();
    assert_eq!(listed.len(), seed::SEED_STUDENT_COUNT + 2);
    assert_eq!(listed[0].usn, "1CR21EC101");
    assert_eq!(listed[0].semester, "6th");
    assert_eq!(listed[0].attendance, 91.0);
    assert_eq!(listed[1].usn, "1CR21EC102");
    assert_eq!(listed[1].semester, "5th");

    let found = portal.students().find_by_key("1cr21ec102").unwrap().unwrap();
    assert_eq!(found.name, "Divya Shetty");
}

#[test]
fn csv_import_accepts_fractional_attendance() {
    let portal = Portal::in_memory();
    let csv = "name,usn,attendance\nAsha Rao,1CR21EC201,82.5\n";

    let imported = portal.students().import_csv(csv.as_bytes()).unwrap();
    assert_eq!(imported[0].attendance, 82.5);
    assert_eq!(portal.students().list().unwrap()[0].attendance, 82.5);
}

#[test]
fn csv_import_with_a_bad_row_writes_nothing() {
    let portal = Portal::in_memory();
    let before = portal.students().list().unwrap();
    let csv = "name,usn\nNikhil Rao,1CR21EC101\n,1CR21EC102\n";

    let err = portal.students().import_csv(csv.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Import(ImportError::MissingField { row: 2, field: "name" })
    ));
    assert_eq!(portal.students().list().unwrap(), before);
}
