//! Counter panel: live tally editing and the bar breakdown

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Vec2};

use headcount_domain::AttendanceSession;
use headcount_types::Category;

/// Action requested by the panel, executed by the parent app
#[derive(Clone, Copy)]
pub enum CounterAction {
    /// Snapshot the tally into history and rewrite the history CSV
    Save,
    /// Zero all counts and clear the service name, without saving
    ResetAll,
    /// Render charts and assemble the PDF report
    GenerateReport,
}

/// Panel for editing the live tally
pub struct CounterPanel {
    /// Edit buffer for the service name field
    service_name_input: String,
}

impl CounterPanel {
    pub fn new() -> Self {
        Self {
            service_name_input: String::new(),
        }
    }

    /// Clear the service name edit buffer after a full reset
    pub fn clear_service_input(&mut self) {
        self.service_name_input.clear();
    }

    fn category_color(category: Category) -> Color32 {
        match category {
            Category::Gents => Color32::from_rgb(31, 119, 180),
            Category::Ladies => Color32::from_rgb(255, 127, 14),
            Category::Kids => Color32::from_rgb(44, 160, 44),
        }
    }

    /// Render the panel UI, returning a requested action if any
    pub fn ui(&mut self, ui: &mut egui::Ui, session: &mut AttendanceSession) -> Option<CounterAction> {
        let mut action = None;

        ui.heading("Attendance");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Service name:");
            let response = ui.text_edit_singleline(&mut self.service_name_input);
            if response.changed() {
                session.set_service_name(self.service_name_input.clone());
            }
        });
        ui.add_space(8.0);

        // One row of +/- controls per category
        for category in Category::ALL {
            ui.horizontal(|ui| {
                if ui.button(format!("+ {}", category.label())).clicked() {
                    session.increment(category);
                }
                if ui.button("-").clicked() {
                    session.decrement(category);
                }
                let count = session.tally().count(category);
                ui.label(
                    RichText::new(format!("{}: {}", category.label(), count))
                        .size(16.0)
                        .color(Self::category_color(category)),
                );
            });
        }

        ui.add_space(4.0);
        ui.label(RichText::new(format!("Total: {}", session.tally().total())).size(18.0).strong());

        ui.add_space(8.0);
        self.draw_breakdown(ui, session);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                action = Some(CounterAction::Save);
            }
            if ui.button("Reset All").clicked() {
                action = Some(CounterAction::ResetAll);
            }
            if ui.button("Generate Report").clicked() {
                action = Some(CounterAction::GenerateReport);
            }
        });

        action
    }

    /// Live bar breakdown of the current tally
    fn draw_breakdown(&self, ui: &mut egui::Ui, session: &AttendanceSession) {
        let tally = session.tally();
        let total = tally.total();

        let desired = Vec2::new(ui.available_width().min(420.0), 140.0);
        let (response, painter) = ui.allocate_painter(desired, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, Color32::from_gray(245));

        let max = tally
            .counts()
            .iter()
            .map(|(_, c)| *c)
            .max()
            .unwrap_or(0)
            .max(1);

        let bar_area = rect.shrink(12.0);
        let slot_width = bar_area.width() / 3.0;

        for (i, (category, count)) in tally.counts().iter().enumerate() {
            let fraction = *count as f32 / max as f32;
            let bar_width = slot_width * 0.6;
            let x_center = bar_area.left() + slot_width * (i as f32 + 0.5);
            let bar_height = (bar_area.height() - 18.0) * fraction;

            let bar_rect = egui::Rect::from_min_max(
                egui::pos2(x_center - bar_width / 2.0, bar_area.bottom() - 16.0 - bar_height),
                egui::pos2(x_center + bar_width / 2.0, bar_area.bottom() - 16.0),
            );
            painter.rect_filled(bar_rect, 2.0, Self::category_color(*category));

            let percent = if total > 0 {
                format!("{} ({:.0}%)", count, *count as f32 / total as f32 * 100.0)
            } else {
                count.to_string()
            };
            painter.text(
                egui::pos2(x_center, bar_rect.top() - 2.0),
                Align2::CENTER_BOTTOM,
                percent,
                FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
            painter.text(
                egui::pos2(x_center, bar_area.bottom()),
                Align2::CENTER_BOTTOM,
                category.label(),
                FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
        }
    }
}
