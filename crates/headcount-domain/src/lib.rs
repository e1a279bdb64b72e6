//! Domain layer - attendance session and repository traits

pub mod repository;
pub mod service;

pub use service::session::AttendanceSession;
