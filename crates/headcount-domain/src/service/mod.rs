//! Domain services

pub mod session;

pub use session::AttendanceSession;
