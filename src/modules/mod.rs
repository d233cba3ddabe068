//! UI Modules
//!
//! Each module owns the interaction state for one screen and implements the
//! Module trait for key handling. Rendering lives in `crate::ui`.
//!
//! Modules:
//! - login: role picker + credential form, simulated sign-in
//! - landing: portal cards shown between dashboards
//! - student: academic records (courses, timetable, assignments, fees)
//! - professor: teaching records (classes, students, attendance)
//! - admin: institution records (users, courses, analytics, system)

pub mod admin;
pub mod landing;
pub mod login;
pub mod professor;
pub mod student;

/// Day-of-week used by the "today" panels. The datasets are static, so the
/// wall clock has no say here.
pub const TODAY: &str = "Monday";

/// Notice shown when an inert action column is activated
pub const DISPLAY_ONLY: &str = "Display-only preview; actions are not wired";
