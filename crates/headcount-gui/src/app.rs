//! Main application structure with tab navigation

use chrono::Utc;
use eframe::egui;

use headcount_app::config::Config;
use headcount_app::export::export_history_to_excel;
use headcount_app::report::generate_report;
use headcount_app::repository::open_history_repo;
use headcount_domain::repository::HistoryRepository;
use headcount_domain::AttendanceSession;

use crate::counter_panel::{CounterAction, CounterPanel};
use crate::history_panel::{HistoryAction, HistoryPanel};

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Counter,
    History,
}

impl Tab {
    /// Get the display label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Counter => "Counter",
            Tab::History => "History",
        }
    }
}

/// Main application state
pub struct HeadcountApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Counter panel state
    counter_panel: CounterPanel,
    /// History panel state
    history_panel: HistoryPanel,
    /// Application configuration
    config: Config,
    /// Live attendance session, in memory for the lifetime of the window
    session: AttendanceSession,
    /// Last status notice shown to the user
    status: Option<String>,
}

impl HeadcountApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Slightly larger default text for counting at a distance
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_default();

        Self {
            current_tab: Tab::default(),
            counter_panel: CounterPanel::new(),
            history_panel: HistoryPanel::new(),
            config,
            session: AttendanceSession::new(),
            status: None,
        }
    }

    fn handle_counter_action(&mut self, action: CounterAction) {
        match action {
            CounterAction::Save => {
                let record = self.session.save_record(Utc::now());
                // CSV export is best effort: failure becomes a notice, not a crash
                let result = open_history_repo(&self.config)
                    .and_then(|repo| repo.replace_all(self.session.history()));
                self.status = Some(match result {
                    Ok(()) => format!(
                        "Saved \"{}\" (total {}) and wrote the history CSV",
                        record.service_name,
                        record.total()
                    ),
                    Err(e) => format!("Record saved, but the history CSV failed: {}", e),
                });
            }
            CounterAction::ResetAll => {
                self.session.reset_all();
                self.counter_panel.clear_service_input();
                self.status = Some("Counts reset".to_string());
            }
            CounterAction::GenerateReport => {
                let result = self
                    .config
                    .report_dir()
                    .and_then(|dir| generate_report(self.session.tally(), &dir));
                self.status = Some(match result {
                    Ok(path) => format!("Report generated: {}", path.display()),
                    Err(e) => format!("Report generation failed: {}", e),
                });
            }
        }
    }

    fn handle_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::ExportExcel => {
                let result = self.config.data_dir().and_then(|dir| {
                    let path = dir.join("attendance_history.xlsx");
                    export_history_to_excel(self.session.history(), &path).map(|_| path)
                });
                self.status = Some(match result {
                    Ok(path) => format!("Exported history to {}", path.display()),
                    Err(e) => format!("Excel export failed: {}", e),
                });
            }
        }
    }
}

impl eframe::App for HeadcountApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in [Tab::Counter, Tab::History] {
                    ui.selectable_value(&mut self.current_tab, tab, tab.label());
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if let Some(ref status) = self.status {
                ui.label(status);
            } else {
                ui.label("Ready");
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let action = match self.current_tab {
                Tab::Counter => self
                    .counter_panel
                    .ui(ui, &mut self.session)
                    .map(PanelAction::Counter),
                Tab::History => self
                    .history_panel
                    .ui(ui, self.session.history())
                    .map(PanelAction::History),
            };

            if let Some(action) = action {
                match action {
                    PanelAction::Counter(action) => self.handle_counter_action(action),
                    PanelAction::History(action) => self.handle_history_action(action),
                }
            }
        });
    }
}

enum PanelAction {
    Counter(CounterAction),
    History(HistoryAction),
}
