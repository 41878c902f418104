//! Student roster import from CSV.
//!
//! # Responsibility
//! - Parse header-driven CSV rows into `Student` records.
//!
//! # Invariants
//! - Headers are matched by name (`name,usn,semester,department,email,cgpa,
//!   attendance,phone,guardian,dob,address`); column order is free and every
//!   column except `name` and `usn` may be omitted.
//! - A row with a blank `name` or `usn` rejects the whole file.
//! - Each imported student receives a fresh id in row order.

use crate::model::id::IdGenerator;
use crate::model::student::{Student, DEFAULT_DEPARTMENT, DEFAULT_SEMESTER};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Read;

#[derive(Debug)]
pub enum ImportError {
    /// Malformed CSV or a value of the wrong type.
    Csv(csv::Error),
    /// Required column blank on a data row (1-based, header excluded).
    MissingField { row: usize, field: &'static str },
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "invalid student import file: {err}"),
            Self::MissingField { row, field } => {
                write!(f, "student import row {row} is missing `{field}`")
            }
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::MissingField { .. } => None,
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StudentRow {
    name: String,
    usn: String,
    semester: Option<String>,
    department: Option<String>,
    email: Option<String>,
    cgpa: Option<f64>,
    attendance: Option<f64>,
    phone: Option<String>,
    guardian: Option<String>,
    dob: Option<String>,
    address: Option<String>,
}

impl StudentRow {
    fn into_student(self, row: usize, id: String) -> Result<Student, ImportError> {
        if self.name.trim().is_empty() {
            return Err(ImportError::MissingField { row, field: "name" });
        }
        if self.usn.trim().is_empty() {
            return Err(ImportError::MissingField { row, field: "usn" });
        }

        Ok(Student {
            id,
            name: self.name.trim().to_string(),
            usn: self.usn.trim().to_string(),
            semester: non_blank(self.semester).unwrap_or_else(|| DEFAULT_SEMESTER.to_string()),
            department: non_blank(self.department)
                .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
            email: non_blank(self.email).unwrap_or_default(),
            cgpa: self.cgpa.unwrap_or(0.0),
            attendance: self.attendance.unwrap_or(0.0),
            phone: non_blank(self.phone),
            guardian: non_blank(self.guardian),
            dob: non_blank(self.dob),
            address: non_blank(self.address),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Parses every data row of `reader`.
pub fn parse_students<R: Read>(reader: R, ids: &IdGenerator) -> Result<Vec<Student>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut students = Vec::new();
    for (index, result) in csv_reader.deserialize::<StudentRow>().enumerate() {
        let row = result?;
        students.push(row.into_student(index + 1, ids.next_id())?);
    }
    Ok(students)
}
