//! Student roster service.
//!
//! # Responsibility
//! - Roster list/add/update plus bulk import.
//! - Resolve a student by USN for student sign-in.
//!
//! # Invariants
//! - USN lookup ignores case.
//! - The demo key resolves to the first roster entry.

use super::student_import::parse_students;
use super::{list_records, prepend_records, replace_record, require, ServiceResult};
use crate::model::id::IdGenerator;
use crate::model::student::Student;
use crate::store::{KeyValueStore, LatencyClass, LocalStore, StoreResult};
use log::info;
use std::io::Read;

/// Lookup key that signs in as the first student without a real USN.
pub const DEMO_LOOKUP_KEY: &str = "demo";

pub struct StudentService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
    ids: &'s IdGenerator,
}

impl<'s, S: KeyValueStore> StudentService<'s, S> {
    pub fn new(store: &'s LocalStore<S>, ids: &'s IdGenerator) -> Self {
        Self { store, ids }
    }

    pub fn list(&self) -> StoreResult<Vec<Student>> {
        self.store.simulate(LatencyClass::Standard);
        list_records(self.store)
    }

    pub fn add(&self, student: Student) -> StoreResult<()> {
        self.store.simulate(LatencyClass::Standard);
        let student_id = student.id.clone();
        prepend_records(self.store, vec![student])?;
        info!("event=student_add module=service status=ok student_id={student_id}");
        Ok(())
    }

    /// Enrolls a student from form input with a freshly generated id.
    ///
    /// Name and USN are required.
    pub fn create(&self, mut student: Student) -> ServiceResult<Student> {
        require("student", "name", &student.name)?;
        require("student", "usn", &student.usn)?;
        student.id = self.ids.next_id();
        self.add(student.clone())?;
        Ok(student)
    }

    pub fn update(&self, student: Student) -> ServiceResult<()> {
        self.store.simulate(LatencyClass::Standard);
        let student_id = student.id.clone();
        replace_record(self.store, student)?;
        info!("event=student_update module=service status=ok student_id={student_id}");
        Ok(())
    }

    /// Prepends `students` as one batch, keeping their order.
    pub fn add_bulk(&self, students: Vec<Student>) -> StoreResult<()> {
        self.store.simulate(LatencyClass::Bulk);
        let count = students.len();
        prepend_records(self.store, students)?;
        info!("event=student_bulk_add module=service status=ok count={count}");
        Ok(())
    }

    /// Parses a roster CSV and bulk-adds its rows.
    ///
    /// Nothing is written when any row is rejected.
    pub fn import_csv<R: Read>(&self, reader: R) -> ServiceResult<Vec<Student>> {
        let students = parse_students(reader, self.ids)?;
        if !students.is_empty() {
            self.add_bulk(students.clone())?;
        }
        Ok(students)
    }

    /// Finds a student by USN, ignoring case.
    ///
    /// [`DEMO_LOOKUP_KEY`] returns the first student on the roster.
    pub fn find_by_key(&self, key: &str) -> StoreResult<Option<Student>> {
        self.store.simulate(LatencyClass::Extended);
        let students: Vec<Student> = list_records(self.store)?;
        if key == DEMO_LOOKUP_KEY {
            return Ok(students.into_iter().next());
        }
        Ok(students.into_iter().find(|student| student.matches_usn(key)))
    }
}
