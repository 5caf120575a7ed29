use anyhow::Result;
use bujo_core::calendar::{collect_month, month_weeks, CalendarEntry, MonthStats};
use bujo_store::Journal;
use chrono::{Datelike, Local};
use clap::Args;
use std::collections::BTreeMap;

#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Month 1-12; defaults to the current month
    #[arg(long)]
    pub month: Option<u32>,
    /// Defaults to the current year
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub json: bool,
}

pub fn handle(journal: &Journal, args: &CalendarArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let month = args.month.unwrap_or_else(|| today.month());
    let year = args.year.unwrap_or_else(|| today.year());
    if !(1..=12).contains(&month) {
        println!("Month must be between 1 and 12.");
        return Ok(());
    }

    let days = collect_month(journal.document(), year, month);
    let stats = MonthStats::from_entries(&days);

    if args.json {
        let payload = serde_json::json!({ "days": days, "stats": stats });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_grid(year, month, &days);
    print_entries(&days);
    print_stats(&stats);
    Ok(())
}

fn print_grid(year: i32, month: u32, days: &BTreeMap<u32, Vec<CalendarEntry>>) {
    println!("{year}-{month:02}");
    println!("Mon   Tue   Wed   Thu   Fri   Sat   Sun");
    for week in month_weeks(year, month) {
        let mut row = String::new();
        for cell in week {
            match cell {
                Some(day) => {
                    let count = days.get(&day).map_or(0, |entries| entries.len());
                    if count > 0 {
                        row.push_str(&format!("{day:>2}({count}) "));
                    } else {
                        row.push_str(&format!("{day:>2}    "));
                    }
                }
                None => row.push_str("      "),
            }
        }
        println!("{}", row.trim_end());
    }
}

fn print_entries(days: &BTreeMap<u32, Vec<CalendarEntry>>) {
    if days.is_empty() {
        println!("Nothing scheduled this month.");
        return;
    }
    println!();
    for (day, entries) in days {
        for (position, entry) in entries.iter().enumerate() {
            let mark = if entry.completed { "x" } else { " " };
            let prefix = if position == 0 {
                format!("{day:>2}")
            } else {
                "  ".to_string()
            };
            println!("{prefix}  [{mark}] {} ({})", entry.description, entry.kind);
        }
    }
}

fn print_stats(stats: &MonthStats) {
    println!();
    println!("Entries this month: {}", stats.total);
    println!("Completed: {} ({:.1}%)", stats.completed, stats.completed_pct);
    println!("Pending: {}", stats.pending);
    match &stats.busiest_day {
        Some(busiest) => println!("Busiest day: {} ({} entries)", busiest.day, busiest.count),
        None => println!("Busiest day: none"),
    }
    if !stats.by_kind.is_empty() {
        println!("By type:");
        for (kind, count) in &stats.by_kind {
            println!("  {kind}: {count}");
        }
    }
}
