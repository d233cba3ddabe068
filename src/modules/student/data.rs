//! Student portal datasets. Compiled-in display constants; nothing here is
//! created or mutated at runtime.

pub struct StudentProfile {
    pub name: &'static str,
    pub roll_no: &'static str,
    pub semester: &'static str,
    pub department: &'static str,
    pub cgpa: f64,
    pub attendance_pct: u16,
}

pub const PROFILE: StudentProfile = StudentProfile {
    name: "John Doe",
    roll_no: "20CS001",
    semester: "6th Semester",
    department: "Computer Science",
    cgpa: 8.5,
    attendance_pct: 85,
};

pub struct Course {
    pub code: &'static str,
    pub name: &'static str,
    pub instructor: &'static str,
    pub credits: u8,
}

pub const COURSES: [Course; 4] = [
    Course {
        code: "CS301",
        name: "Data Structures",
        instructor: "Dr. Smith",
        credits: 4,
    },
    Course {
        code: "CS302",
        name: "Algorithms",
        instructor: "Prof. Johnson",
        credits: 3,
    },
    Course {
        code: "CS303",
        name: "Database Systems",
        instructor: "Dr. Brown",
        credits: 4,
    },
    Course {
        code: "CS304",
        name: "Computer Networks",
        instructor: "Prof. Davis",
        credits: 3,
    },
];

pub struct TimetableEntry {
    pub day: &'static str,
    pub time: &'static str,
    pub subject: &'static str,
    pub room: &'static str,
}

pub const TIMETABLE: [TimetableEntry; 4] = [
    TimetableEntry {
        day: "Monday",
        time: "9:00-10:00",
        subject: "Data Structures",
        room: "Lab 1",
    },
    TimetableEntry {
        day: "Monday",
        time: "10:00-11:00",
        subject: "Algorithms",
        room: "Room 201",
    },
    TimetableEntry {
        day: "Tuesday",
        time: "9:00-10:00",
        subject: "Database Systems",
        room: "Lab 2",
    },
    TimetableEntry {
        day: "Tuesday",
        time: "11:00-12:00",
        subject: "Computer Networks",
        room: "Room 301",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    Pending,
    Submitted,
}

impl AssignmentStatus {
    pub fn title(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Submitted => "submitted",
        }
    }
}

pub struct Assignment {
    pub title: &'static str,
    pub course: &'static str,
    pub due: &'static str,
    pub status: AssignmentStatus,
}

pub const ASSIGNMENTS: [Assignment; 3] = [
    Assignment {
        title: "Data Structure Implementation",
        course: "CS301",
        due: "2024-01-15",
        status: AssignmentStatus::Pending,
    },
    Assignment {
        title: "Algorithm Analysis Report",
        course: "CS302",
        due: "2024-01-12",
        status: AssignmentStatus::Submitted,
    },
    Assignment {
        title: "Database Design Project",
        course: "CS303",
        due: "2024-01-20",
        status: AssignmentStatus::Pending,
    },
];

/// Resources offered against every course on the materials tab
pub const MATERIAL_KINDS: [&str; 3] = ["Lecture Notes", "Lab Manual", "Previous Papers"];

pub struct PendingPayment {
    pub description: &'static str,
    pub amount: &'static str,
    pub due: &'static str,
}

pub const PENDING_PAYMENT: PendingPayment = PendingPayment {
    description: "Semester Fee",
    amount: "₹50,000",
    due: "January 31, 2024",
};

pub struct PaymentRecord {
    pub description: &'static str,
    pub amount: &'static str,
    pub status: &'static str,
}

pub const PAYMENT_HISTORY: [PaymentRecord; 2] = [
    PaymentRecord {
        description: "Admission Fee",
        amount: "₹25,000",
        status: "Paid",
    },
    PaymentRecord {
        description: "Previous Semester Fee",
        amount: "₹50,000",
        status: "Paid",
    },
];
