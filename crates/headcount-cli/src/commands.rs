//! Command handlers

use chrono::Utc;

use headcount_app::config::Config;
use headcount_app::export::export_history_to_excel;
use headcount_app::report::generate_report;
use headcount_app::repository::{open_history_repo, open_session_repo};
use headcount_domain::repository::HistoryRepository;
use headcount_types::Result;

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    let session_repo = open_session_repo(&config)?;
    let mut session = session_repo.load()?;

    match cli.command {
        Commands::Add { category, count } => {
            for _ in 0..count {
                session.increment(category);
            }
            session_repo.persist(&session)?;
            output::print_tally(format, session.tally())?;
        }

        Commands::Remove { category } => {
            session.decrement(category);
            session_repo.persist(&session)?;
            output::print_tally(format, session.tally())?;
        }

        Commands::Service { name } => {
            session.set_service_name(name);
            session_repo.persist(&session)?;
            output::print_tally(format, session.tally())?;
        }

        Commands::Status => {
            output::print_tally(format, session.tally())?;
        }

        Commands::Save { reset } => {
            let record = session.save_record(Utc::now());
            if reset {
                session.reset_all();
            }
            session_repo.persist(&session)?;

            // CSV export is best effort: a write failure is reported, not fatal
            let history_repo = open_history_repo(&config)?;
            match history_repo.replace_all(session.history()) {
                Ok(()) => {
                    println!("Attendance recorded and saved successfully!");
                    println!("History written to {}", history_repo.path().display());
                }
                Err(e) => {
                    eprintln!("Warning: record saved but history CSV could not be written: {}", e);
                }
            }

            output::print_record(format, &record)?;
        }

        Commands::Reset { category } => {
            match category {
                Some(category) => session.reset_category(category),
                None => session.reset_all(),
            }
            session_repo.persist(&session)?;
            output::print_tally(format, session.tally())?;
        }

        Commands::Clear => {
            session_repo.clear()?;
            println!("Session cleared");
        }

        Commands::History => {
            output::print_history(format, session.history())?;
        }

        Commands::Report { output } => {
            let report_dir = match output {
                Some(dir) => dir,
                None => config.report_dir()?,
            };
            let pdf_path = generate_report(session.tally(), &report_dir)?;
            println!("Report generated: {}", pdf_path.display());
        }

        Commands::Export { output } => {
            let output_path = match output {
                Some(path) => path,
                None => config.data_dir()?.join("attendance_history.xlsx"),
            };
            export_history_to_excel(session.history(), &output_path)?;
            println!(
                "Exported {} record(s) to {}",
                session.history().len(),
                output_path.display()
            );
        }

        Commands::Config { show, reset } => {
            if reset {
                let config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults");
            } else if show {
                println!("{}", serde_json::to_string_pretty(&config)?);
                println!("\nConfig file: {}", Config::config_path()?.display());
            } else {
                println!("Use --show to view or --reset to restore defaults");
            }
        }
    }

    Ok(())
}
