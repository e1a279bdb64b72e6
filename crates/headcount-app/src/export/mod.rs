//! Export functionality

pub mod excel;

pub use excel::export_history_to_excel;
