//! Application service layer - config, report generation, export

pub mod config;
pub mod export;
pub mod report;
pub mod repository;
