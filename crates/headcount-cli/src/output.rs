//! Output formatting module

use headcount_types::{AttendanceRecord, Category, OutputFormat, Result, Tally};

/// Print the current tally
pub fn print_tally(output_format: OutputFormat, tally: &Tally) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "service_name": tally.service_name_or_default(),
            "gents": tally.count(Category::Gents),
            "ladies": tally.count(Category::Ladies),
            "kids": tally.count(Category::Kids),
            "total": tally.total(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("\nCurrent Tally");
        println!("=============");
        println!("Service:  {}", tally.service_name_or_default());
        for (category, count) in tally.counts() {
            println!("{:<8} {}", format!("{}:", category.label()), count);
        }
        println!("{:<8} {}", "Total:", tally.total());
    }

    Ok(())
}

/// Print a single saved record
pub fn print_record(output_format: OutputFormat, record: &AttendanceRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "date": record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "service_name": record.service_name,
            "gents": record.gents,
            "ladies": record.ladies,
            "kids": record.kids,
            "total": record.total(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "Saved: {} | {} | Gents {} / Ladies {} / Kids {} | Total {}",
            record.recorded_at.format("%Y-%m-%d %H:%M:%S"),
            record.service_name,
            record.gents,
            record.ladies,
            record.kids,
            record.total()
        );
    }

    Ok(())
}

/// Print the session history table
pub fn print_history(output_format: OutputFormat, records: &[AttendanceRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No records saved yet");
        return Ok(());
    }

    println!(
        "{:<20} {:<24} {:>6} {:>7} {:>5} {:>6}",
        "Date", "Service Name", "Gents", "Ladies", "Kids", "Total"
    );
    println!("{}", "-".repeat(72));
    for record in records {
        println!(
            "{:<20} {:<24} {:>6} {:>7} {:>5} {:>6}",
            record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.service_name,
            record.gents,
            record.ladies,
            record.kids,
            record.total()
        );
    }

    Ok(())
}
