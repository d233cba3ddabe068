//! Admin portal datasets. Compiled-in display constants.

pub struct CampusStats {
    pub students: u32,
    pub professors: u32,
    pub courses: u32,
    pub active_sessions: u32,
}

pub const STATS: CampusStats = CampusStats {
    students: 1250,
    professors: 85,
    courses: 120,
    active_sessions: 45,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn title(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }
}

pub struct UserRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub status: RecordStatus,
    pub joined: &'static str,
}

pub const USERS: [UserRecord; 4] = [
    UserRecord {
        id: "20CS001",
        name: "John Doe",
        role: "Student",
        status: RecordStatus::Active,
        joined: "2024-01-15",
    },
    UserRecord {
        id: "PROF015",
        name: "Dr. Sarah Johnson",
        role: "Professor",
        status: RecordStatus::Active,
        joined: "2024-01-10",
    },
    UserRecord {
        id: "20CS002",
        name: "Jane Smith",
        role: "Student",
        status: RecordStatus::Inactive,
        joined: "2024-01-08",
    },
    UserRecord {
        id: "PROF016",
        name: "Prof. Michael Brown",
        role: "Professor",
        status: RecordStatus::Active,
        joined: "2024-01-05",
    },
];

pub struct CourseRecord {
    pub code: &'static str,
    pub name: &'static str,
    pub enrolled: u32,
    pub instructor: &'static str,
    pub status: RecordStatus,
}

pub const COURSES: [CourseRecord; 4] = [
    CourseRecord {
        code: "CS301",
        name: "Data Structures",
        enrolled: 45,
        instructor: "Dr. Johnson",
        status: RecordStatus::Active,
    },
    CourseRecord {
        code: "CS302",
        name: "Algorithms",
        enrolled: 38,
        instructor: "Prof. Brown",
        status: RecordStatus::Active,
    },
    CourseRecord {
        code: "CS303",
        name: "Database Systems",
        enrolled: 42,
        instructor: "Dr. Smith",
        status: RecordStatus::Active,
    },
    CourseRecord {
        code: "CS304",
        name: "Computer Networks",
        enrolled: 35,
        instructor: "Prof. Davis",
        status: RecordStatus::Inactive,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertLevel {
    pub fn title(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Success => "success",
            AlertLevel::Warning => "warning",
            AlertLevel::Error => "error",
        }
    }
}

pub struct SystemAlert {
    pub level: AlertLevel,
    pub text: &'static str,
    pub age: &'static str,
}

pub const ALERTS: [SystemAlert; 4] = [
    SystemAlert {
        level: AlertLevel::Warning,
        text: "Server maintenance scheduled for tonight",
        age: "2 hours ago",
    },
    SystemAlert {
        level: AlertLevel::Info,
        text: "New semester registration opened",
        age: "5 hours ago",
    },
    SystemAlert {
        level: AlertLevel::Success,
        text: "Backup completed successfully",
        age: "1 day ago",
    },
    SystemAlert {
        level: AlertLevel::Error,
        text: "Payment gateway issue resolved",
        age: "2 days ago",
    },
];

pub struct MonthlyGrowth {
    pub month: &'static str,
    pub students: u32,
    pub professors: u32,
    pub courses: u32,
}

pub const MONTHLY_GROWTH: [MonthlyGrowth; 3] = [
    MonthlyGrowth {
        month: "Jan",
        students: 1150,
        professors: 80,
        courses: 115,
    },
    MonthlyGrowth {
        month: "Feb",
        students: 1200,
        professors: 82,
        courses: 118,
    },
    MonthlyGrowth {
        month: "Mar",
        students: 1250,
        professors: 85,
        courses: 120,
    },
];

pub struct PerformanceMetric {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PERFORMANCE: [PerformanceMetric; 4] = [
    PerformanceMetric {
        label: "System Uptime",
        value: "99.9%",
    },
    PerformanceMetric {
        label: "Student Satisfaction",
        value: "4.8/5",
    },
    PerformanceMetric {
        label: "Course Completion",
        value: "92%",
    },
    PerformanceMetric {
        label: "Avg Response Time",
        value: "0.3s",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Online,
    Maintenance,
}

impl ServiceState {
    pub fn title(&self) -> &'static str {
        match self {
            ServiceState::Online => "online",
            ServiceState::Maintenance => "maintenance",
        }
    }
}

pub struct ServerService {
    pub name: &'static str,
    pub state: ServiceState,
    pub uptime: &'static str,
}

pub const SERVICES: [ServerService; 4] = [
    ServerService {
        name: "Web Server",
        state: ServiceState::Online,
        uptime: "99.9%",
    },
    ServerService {
        name: "Database",
        state: ServiceState::Online,
        uptime: "99.8%",
    },
    ServerService {
        name: "File Storage",
        state: ServiceState::Online,
        uptime: "99.7%",
    },
    ServerService {
        name: "Email Service",
        state: ServiceState::Maintenance,
        uptime: "98.5%",
    },
];

pub struct ResourceUsage {
    pub label: &'static str,
    pub pct: u16,
}

pub const RESOURCES: [ResourceUsage; 3] = [
    ResourceUsage {
        label: "CPU",
        pct: 45,
    },
    ResourceUsage {
        label: "Memory",
        pct: 68,
    },
    ResourceUsage {
        label: "Storage",
        pct: 32,
    },
];

pub const SETTINGS_GENERAL: [&str; 4] = [
    "System Configuration",
    "Backup Settings",
    "Security Settings",
    "Academic Calendar",
];

pub const SETTINGS_MAINTENANCE: [&str; 4] = [
    "Clear Cache",
    "Generate Reports",
    "Export Data",
    "System Maintenance Mode",
];
