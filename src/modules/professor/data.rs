//! Professor portal datasets. Compiled-in display constants.

pub struct ProfessorProfile {
    pub name: &'static str,
    pub id: &'static str,
    pub department: &'static str,
    pub experience: &'static str,
}

pub const PROFILE: ProfessorProfile = ProfessorProfile {
    name: "Dr. Sarah Johnson",
    id: "PROF001",
    department: "Computer Science",
    experience: "10 years",
};

pub struct TeachingClass {
    pub code: &'static str,
    pub name: &'static str,
    pub students: u32,
    pub semester: &'static str,
    pub schedule: &'static str,
}

pub const CLASSES: [TeachingClass; 3] = [
    TeachingClass {
        code: "CS301",
        name: "Data Structures",
        students: 45,
        semester: "6th",
        schedule: "Mon, Wed, Fri - 9:00 AM",
    },
    TeachingClass {
        code: "CS302",
        name: "Algorithms",
        students: 38,
        semester: "6th",
        schedule: "Tue, Thu - 10:00 AM",
    },
    TeachingClass {
        code: "CS101",
        name: "Programming Fundamentals",
        students: 52,
        semester: "2nd",
        schedule: "Mon, Wed - 2:00 PM",
    },
];

/// Sum of class sizes, shown on the overview cards
pub fn total_students() -> u32 {
    CLASSES.iter().map(|class| class.students).sum()
}

pub struct StudentRecord {
    pub roll_no: &'static str,
    pub name: &'static str,
    pub cgpa: f64,
    pub attendance_pct: u16,
}

pub const STUDENTS: [StudentRecord; 4] = [
    StudentRecord {
        roll_no: "20CS001",
        name: "John Doe",
        cgpa: 8.5,
        attendance_pct: 92,
    },
    StudentRecord {
        roll_no: "20CS002",
        name: "Jane Smith",
        cgpa: 9.1,
        attendance_pct: 88,
    },
    StudentRecord {
        roll_no: "20CS003",
        name: "Mike Johnson",
        cgpa: 7.8,
        attendance_pct: 95,
    },
    StudentRecord {
        roll_no: "20CS004",
        name: "Sarah Wilson",
        cgpa: 8.9,
        attendance_pct: 90,
    },
];

pub struct Material {
    pub title: &'static str,
    pub kind: &'static str,
    pub uploaded: &'static str,
}

pub const MATERIALS: [Material; 3] = [
    Material {
        title: "Week 1 - Introduction to Data Structures",
        kind: "Lecture Notes",
        uploaded: "2024-01-05",
    },
    Material {
        title: "Lab Assignment 1",
        kind: "Assignment",
        uploaded: "2024-01-08",
    },
    Material {
        title: "Binary Trees Tutorial",
        kind: "Video",
        uploaded: "2024-01-10",
    },
];

pub struct TimetableEntry {
    pub day: &'static str,
    pub time: &'static str,
    pub subject: &'static str,
    pub room: &'static str,
    pub class_code: &'static str,
}

pub const TIMETABLE: [TimetableEntry; 4] = [
    TimetableEntry {
        day: "Monday",
        time: "9:00-10:00",
        subject: "Data Structures",
        room: "Lab 1",
        class_code: "CS301",
    },
    TimetableEntry {
        day: "Monday",
        time: "14:00-15:00",
        subject: "Programming Fundamentals",
        room: "Room 201",
        class_code: "CS101",
    },
    TimetableEntry {
        day: "Tuesday",
        time: "10:00-11:00",
        subject: "Algorithms",
        room: "Room 301",
        class_code: "CS302",
    },
    TimetableEntry {
        day: "Wednesday",
        time: "9:00-10:00",
        subject: "Data Structures",
        room: "Lab 1",
        class_code: "CS301",
    },
];

pub struct AttendanceSession {
    pub class_code: &'static str,
    pub date: &'static str,
    pub present: u32,
    pub total: u32,
}

pub const RECENT_ATTENDANCE: [AttendanceSession; 3] = [
    AttendanceSession {
        class_code: "CS301",
        date: "January 15, 2024",
        present: 42,
        total: 45,
    },
    AttendanceSession {
        class_code: "CS302",
        date: "January 14, 2024",
        present: 35,
        total: 38,
    },
    AttendanceSession {
        class_code: "CS101",
        date: "January 13, 2024",
        present: 50,
        total: 52,
    },
];

pub const RECENT_ACTIVITY: [&str; 4] = [
    "Uploaded new material for CS301",
    "Graded 15 assignments",
    "Updated attendance for CS302",
    "Created new assignment",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_students_sums_class_sizes() {
        assert_eq!(total_students(), 135);
    }
}
