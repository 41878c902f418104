//! Fixed, namespaced storage keys. One key per entity.

pub const NOTES: &str = "studentsphere_notes";
pub const ASSIGNMENTS: &str = "studentsphere_assignments";
pub const MARKS: &str = "studentsphere_marks";
pub const FACULTY: &str = "studentsphere_faculty";
pub const LABS: &str = "studentsphere_labs";
pub const ACHIEVEMENTS: &str = "studentsphere_achievements";
pub const CONTACTS: &str = "studentsphere_contacts";
pub const ATTENDANCE: &str = "studentsphere_attendance";
pub const PROFILE: &str = "studentsphere_profile";
pub const STUDENTS: &str = "studentsphere_students";
