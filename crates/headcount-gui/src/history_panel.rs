//! History panel for viewing records saved during this session

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use headcount_types::AttendanceRecord;

/// Action requested by the panel, executed by the parent app
#[derive(Clone, Copy)]
pub enum HistoryAction {
    /// Write the history to an Excel workbook
    ExportExcel,
}

/// Panel showing the session's saved records as a table
pub struct HistoryPanel;

impl HistoryPanel {
    pub fn new() -> Self {
        Self
    }

    /// Render the panel UI, returning a requested action if any
    pub fn ui(&mut self, ui: &mut egui::Ui, records: &[AttendanceRecord]) -> Option<HistoryAction> {
        let mut action = None;

        ui.heading("History");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label(format!("{} record(s) this session", records.len()));
            ui.add_space(16.0);
            if ui.button("Export to Excel").clicked() {
                action = Some(HistoryAction::ExportExcel);
            }
        });
        ui.add_space(8.0);

        if records.is_empty() {
            ui.label(RichText::new("No records saved yet").weak());
            return action;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(140.0))
            .column(Column::remainder().at_least(120.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(50.0))
            .header(22.0, |mut header| {
                for title in ["Date", "Service Name", "Gents", "Ladies", "Kids", "Total"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for record in records {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string());
                        });
                        row.col(|ui| {
                            ui.label(&record.service_name);
                        });
                        row.col(|ui| {
                            ui.label(record.gents.to_string());
                        });
                        row.col(|ui| {
                            ui.label(record.ladies.to_string());
                        });
                        row.col(|ui| {
                            ui.label(record.kids.to_string());
                        });
                        row.col(|ui| {
                            ui.label(record.total().to_string());
                        });
                    });
                }
            });

        action
    }
}
