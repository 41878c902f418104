//! Sign-in stub for the two portal roles.
//!
//! Any non-empty identifier and password pair is accepted. Nothing is
//! checked against stored credentials.

use crate::model::student::Student;
use crate::service::student_service::StudentService;
use crate::store::{KeyValueStore, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Signs in with an email address.
    Faculty,
    /// Signs in with a USN.
    Student,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    MissingCredentials(Role),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials(Role::Faculty) => {
                write!(f, "Please enter both email and password")
            }
            Self::MissingCredentials(Role::Student) => write!(f, "Please enter USN and password"),
        }
    }
}

impl Error for SessionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    /// Email for faculty, USN for students, trimmed.
    pub identifier: String,
}

pub fn sign_in(role: Role, identifier: &str, password: &str) -> Result<Session, SessionError> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err(SessionError::MissingCredentials(role));
    }
    info!("event=sign_in module=session status=ok role={role:?}");
    Ok(Session {
        role,
        identifier: identifier.to_string(),
    })
}

impl Session {
    /// Roster entry for a student session.
    ///
    /// Unknown USNs fall back to the first student so the dashboard always
    /// has a record to show. Returns `None` for faculty sessions or an empty
    /// roster.
    pub fn student_record<S: KeyValueStore>(
        &self,
        students: &StudentService<'_, S>,
    ) -> StoreResult<Option<Student>> {
        if self.role != Role::Student {
            return Ok(None);
        }
        if let Some(student) = students.find_by_key(&self.identifier)? {
            return Ok(Some(student));
        }
        Ok(students.list()?.into_iter().next())
    }
}
