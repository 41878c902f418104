//! Default record sets written the first time a key is observed empty.
//!
//! # Invariants
//! - Seed output is fixed: calling any function twice yields equal records.
//! - Seed ids are small decimal strings starting at `"1"`.

use crate::model::achievement::Achievement;
use crate::model::assignment::{Assignment, AssignmentStatus};
use crate::model::attendance::AttendanceRecord;
use crate::model::faculty::FacultyMember;
use crate::model::lab::LabSession;
use crate::model::mark::Mark;
use crate::model::note::Note;
use crate::model::profile::UserProfile;
use crate::model::student::{Student, DEFAULT_DEPARTMENT, DEFAULT_SEMESTER};

/// Size of the seeded student roster.
pub const SEED_STUDENT_COUNT: usize = 40;

const STUDENT_NAMES: [&str; SEED_STUDENT_COUNT] = [
    "Aditya Kumar",
    "Priya Sharma",
    "Rahul Verma",
    "Sneha Gupta",
    "Vikram Singh",
    "Ananya Das",
    "Rohan Mehta",
    "Kavya Iyer",
    "Arjun Nair",
    "Meera Reddy",
    "Siddharth Rao",
    "Nisha Patel",
    "Varun Chopra",
    "Ishita Malhotra",
    "Karan Johar",
    "Pooja Hegde",
    "Manoj Bajpayee",
    "Kiara Advani",
    "Ranbir Kapoor",
    "Alia Bhatt",
    "Shahrukh Khan",
    "Deepika P",
    "Ranveer Singh",
    "Katrina Kaif",
    "Salman Khan",
    "Aamir Khan",
    "Hrithik Roshan",
    "Kangana R",
    "Akshay Kumar",
    "Twinkle K",
    "Ajay Devgn",
    "Kajol D",
    "Saif Ali Khan",
    "Kareena K",
    "Shahid Kapoor",
    "Mira Rajput",
    "Vicky Kaushal",
    "Katrina Turquotte",
    "Kartik Aaryan",
    "Sara Ali Khan",
];

/// The 40-student Electronics & Communication roster.
///
/// CGPA (6.00..=9.80), attendance (60..=99) and contact details are derived
/// from the roster index instead of randomness.
pub fn students() -> Vec<Student> {
    STUDENT_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| seeded_student(index, name))
        .collect()
}

fn seeded_student(index: usize, name: &str) -> Student {
    let number = index + 1;
    let suffix = format!("{number:03}");
    let first_name = name.split_whitespace().next().unwrap_or(name);
    let n = number as u64;

    let cgpa_hundredths = 600 + (n * 37) % 381;
    let phone_tail = (n * 7_919 * 104_729) % 100_000_000;
    let month = (n * 5) % 12 + 1;
    let day = (n * 11) % 28 + 1;

    Student {
        id: number.to_string(),
        name: name.to_string(),
        usn: format!("1CR21EC{suffix}"),
        semester: DEFAULT_SEMESTER.to_string(),
        department: DEFAULT_DEPARTMENT.to_string(),
        email: format!("{}{suffix}@sambhram.edu", first_name.to_lowercase()),
        cgpa: cgpa_hundredths as f64 / 100.0,
        attendance: (60 + (n * 13) % 40) as f64,
        phone: Some(format!("98{phone_tail:08}")),
        guardian: Some(format!("Parent of {first_name}")),
        dob: Some(format!("2003-{month:02}-{day:02}")),
        address: Some(format!(
            "{}, Street {}, Bangalore",
            (n * 17) % 100 + 1,
            n % 10
        )),
    }
}

pub fn notes() -> Vec<Note> {
    vec![
        Note {
            id: "1".to_string(),
            title: "Digital Signal Processing".to_string(),
            content: "The Nyquist-Shannon sampling theorem states that a signal can be perfectly reconstructed if sampled at twice its highest frequency.".to_string(),
            date: "2023-10-05".to_string(),
            tags: vec!["Electronics".to_string(), "DSP".to_string()],
        },
        Note {
            id: "2".to_string(),
            title: "Industrial Automation".to_string(),
            content: "PLCs (Programmable Logic Controllers) use ladder logic for controlling manufacturing processes. Key components: Input, CPU, Output.".to_string(),
            date: "2023-10-08".to_string(),
            tags: vec!["Automation".to_string(), "Control".to_string()],
        },
    ]
}

pub fn assignments() -> Vec<Assignment> {
    let row = |id: &str, subject: &str, title: &str, due: &str, status, description: &str| {
        Assignment {
            id: id.to_string(),
            subject: subject.to_string(),
            title: title.to_string(),
            due_date: due.to_string(),
            status,
            description: description.to_string(),
        }
    };
    vec![
        row(
            "1",
            "DSP",
            "DSP Assignment 1",
            "2023-11-15",
            AssignmentStatus::Pending,
            "Solve circuit problems 1-10 in Chapter 4.",
        ),
        row(
            "2",
            "VLSI",
            "VLSI Lab Report",
            "2023-11-10",
            AssignmentStatus::Completed,
            "Analyze the frequency spectrum of the audio signal.",
        ),
        row(
            "3",
            "Digital Communication",
            "DC Assignment",
            "2023-11-20",
            AssignmentStatus::InProgress,
            "Design a traffic light controller using ladder logic.",
        ),
    ]
}

pub fn marks() -> Vec<Mark> {
    [
        ("1", "Network Analysis", 85.0, "Midterm 1", "2023-09-15"),
        ("2", "DSP", 78.0, "Quiz 1", "2023-09-20"),
        ("3", "Automation", 92.0, "Unit Test", "2023-10-01"),
        ("4", "Network Analysis", 88.0, "Midterm 2", "2023-10-25"),
        ("5", "Digital Communication", 70.0, "Theory Exam", "2023-10-15"),
    ]
    .into_iter()
    .map(|(id, subject, score, test_name, date)| Mark {
        id: id.to_string(),
        subject: subject.to_string(),
        score,
        total: 100.0,
        test_name: test_name.to_string(),
        date: date.to_string(),
    })
    .collect()
}

pub fn faculty() -> Vec<FacultyMember> {
    [
        ("1", "Dr. Roopa", "Basic Electronics", "roopa@uni.std", "Semiconductors"),
        ("2", "Prof. Savitha", "Network Analysis", "savitha0@uni.std", "Circuit Theory"),
        ("3", "Dr. Ramesh", "Control Systems", "ramesh@uni.std", "Automation"),
    ]
    .into_iter()
    .map(|(id, name, department, email, specialization)| FacultyMember {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        email: email.to_string(),
        specialization: specialization.to_string(),
        image: Some(format!("https://picsum.photos/200/200?random={id}")),
    })
    .collect()
}

pub fn labs() -> Vec<LabSession> {
    vec![
        LabSession {
            id: "1".to_string(),
            subject: "VLSI".to_string(),
            topic: "CMOS Inverter Design".to_string(),
            time: "Tue 02:00 PM".to_string(),
            room: "Lab 301".to_string(),
            instructor: "Dr. Shreesha".to_string(),
        },
        LabSession {
            id: "2".to_string(),
            subject: "MATLAB".to_string(),
            topic: "Digital Signal Processing".to_string(),
            time: "Thu 10:00 AM".to_string(),
            room: "Comp Lab 2".to_string(),
            instructor: "Prof. Rao".to_string(),
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".to_string(),
            title: "Dean's List".to_string(),
            date: "2023-05-20".to_string(),
            description: "Awarded for GPA > 3.8".to_string(),
            icon: "\u{1F3C6}".to_string(),
        },
        Achievement {
            id: "2".to_string(),
            title: "Hackathon Winner".to_string(),
            date: "2023-09-10".to_string(),
            description: "First place in Campus Hackathon".to_string(),
            icon: "\u{1F4BB}".to_string(),
        },
    ]
}

pub fn attendance() -> Vec<AttendanceRecord> {
    [
        ("1", "Network Analysis", 30, 26, "2023-10-28"),
        ("2", "DSP", 28, 20, "2023-10-27"),
        ("3", "Automation", 25, 24, "2023-10-26"),
        ("4", "Digital Communication", 22, 16, "2023-10-25"),
        ("5", "VLSI", 15, 15, "2023-10-24"),
    ]
    .into_iter()
    .map(
        |(id, subject, total_classes, attended_classes, last_updated)| AttendanceRecord {
            id: id.to_string(),
            subject: subject.to_string(),
            total_classes,
            attended_classes,
            last_updated: last_updated.to_string(),
        },
    )
    .collect()
}

pub fn profile() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: "Dr. Shreesha".to_string(),
        email: "shreesha@sambhram.org".to_string(),
        department: DEFAULT_DEPARTMENT.to_string(),
        designation: "Professor & HOD".to_string(),
        employee_id: "FAC-EC-001".to_string(),
        bio: "Passionate about embedded systems, signal processing, and mentoring the next generation of engineers.".to_string(),
        image_url: Some(
            "https://sambhramit.com/wp-content/uploads/2022/03/sambhram-logo.png".to_string(),
        ),
    }
}
