//! Read-only monthly projection over the journal: every dated entity
//! bucketed by day-of-month, plus the derived month statistics.

use crate::{parse_date, Document, Priority};
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One dated item on the calendar, detached from its source collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEntry {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub kind: EntryKind,
    #[serde(rename = "completada")]
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Daily,
    ProjectDeadline,
    ProjectTask(Priority),
    Log,
}

impl EntryKind {
    /// The type label without the priority suffix, used for the
    /// per-type statistics breakdown.
    pub fn prefix(&self) -> &'static str {
        match self {
            EntryKind::Daily => "diaria",
            EntryKind::ProjectDeadline => "deadline-proyecto",
            EntryKind::ProjectTask(_) => "tarea-proyecto",
            EntryKind::Log => "bitacora",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::ProjectTask(priority) => {
                write!(f, "tarea-proyecto: {}", priority.as_str())
            }
            other => f.write_str(other.prefix()),
        }
    }
}

impl Serialize for EntryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Buckets every entity dated inside `year`/`month` by day-of-month.
///
/// Scan order is fixed: daily tasks, then each project's deadline followed
/// by its tasks in document order, then log entries. Entities with missing
/// or malformed dates are skipped.
pub fn collect_month(
    document: &Document,
    year: i32,
    month: u32,
) -> BTreeMap<u32, Vec<CalendarEntry>> {
    let mut days: BTreeMap<u32, Vec<CalendarEntry>> = BTreeMap::new();
    let mut push = |day: u32, entry: CalendarEntry| {
        days.entry(day).or_default().push(entry);
    };

    for task in &document.daily {
        if let Some(day) = day_in_month(&task.date, year, month) {
            push(
                day,
                CalendarEntry {
                    description: task.description.clone(),
                    kind: EntryKind::Daily,
                    completed: task.completed,
                },
            );
        }
    }

    for (name, project) in &document.projects {
        if let Some(day) = day_in_month(&project.deadline, year, month) {
            push(
                day,
                CalendarEntry {
                    description: format!("Fecha límite: {name}"),
                    kind: EntryKind::ProjectDeadline,
                    completed: false,
                },
            );
        }
        for task in &project.tasks {
            if let Some(day) = day_in_month(&task.deadline, year, month) {
                push(
                    day,
                    CalendarEntry {
                        description: format!("{} ({name})", task.description),
                        kind: EntryKind::ProjectTask(task.priority),
                        completed: task.completed,
                    },
                );
            }
        }
    }

    for entry in &document.log {
        // only the date part of the timestamp counts
        let date_part = entry.timestamp.split_whitespace().next().unwrap_or("");
        if let Some(day) = day_in_month(date_part, year, month) {
            push(
                day,
                CalendarEntry {
                    description: format!("Nota: {}", entry.title),
                    kind: EntryKind::Log,
                    completed: false,
                },
            );
        }
    }

    days
}

fn day_in_month(raw: &str, year: i32, month: u32) -> Option<u32> {
    let date = parse_date(raw)?;
    (date.year() == year && date.month() == month).then(|| date.day())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Share of completed entries, one decimal, 0 when the month is empty.
    pub completed_pct: f64,
    pub busiest_day: Option<BusiestDay>,
    /// Entry counts keyed by type prefix (`diaria`, `tarea-proyecto`, ...).
    pub by_kind: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusiestDay {
    pub day: u32,
    pub count: usize,
}

impl MonthStats {
    pub fn from_entries(days: &BTreeMap<u32, Vec<CalendarEntry>>) -> Self {
        let mut total = 0;
        let mut completed = 0;
        let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();
        let mut busiest_day: Option<BusiestDay> = None;

        for (&day, entries) in days {
            total += entries.len();
            for entry in entries {
                if entry.completed {
                    completed += 1;
                }
                *by_kind.entry(entry.kind.prefix().to_string()).or_insert(0) += 1;
            }
            // strict comparison keeps the earliest day on ties
            if busiest_day.map_or(true, |best| entries.len() > best.count) {
                busiest_day = Some(BusiestDay {
                    day,
                    count: entries.len(),
                });
            }
        }

        let completed_pct = if total > 0 {
            ((completed as f64 / total as f64 * 100.0) * 10.0).round() / 10.0
        } else {
            0.0
        };

        Self {
            total,
            completed,
            pending: total - completed,
            completed_pct,
            busiest_day,
            by_kind,
        }
    }
}

/// Monday-first week rows for a month, `None` padding outside the month.
/// An invalid year/month combination yields no rows.
pub fn month_weeks(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return Vec::new(),
    };
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = first.weekday().num_days_from_monday() as usize;
    for day in 1..=days_in_month(year, month) {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return 0,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn sample_document() -> Document {
        let mut doc = Document::default();
        doc.add_daily_task("Buy milk", day(2024, 3, 5));
        doc
    }

    #[test]
    fn aggregation_includes_only_the_requested_month() {
        let doc = sample_document();

        let march = collect_month(&doc, 2024, 3);
        assert_eq!(march.len(), 1);
        let entries = &march[&5];
        assert_eq!(
            entries,
            &vec![CalendarEntry {
                description: "Buy milk".to_string(),
                kind: EntryKind::Daily,
                completed: false,
            }]
        );

        assert!(collect_month(&doc, 2024, 4).is_empty());
        assert!(collect_month(&doc, 2023, 3).is_empty());
    }

    #[test]
    fn malformed_dates_are_skipped_silently() {
        let mut doc = sample_document();
        doc.daily[0].date = "not-a-date".to_string();
        doc.create_project("Casa", day(2024, 1, 1));
        doc.projects.get_mut("Casa").unwrap().deadline = "2024-13-40".to_string();
        assert!(collect_month(&doc, 2024, 3).is_empty());
    }

    #[test]
    fn project_deadlines_are_always_pending() {
        let mut doc = Document::default();
        doc.create_project("Casa", day(2024, 1, 1));
        doc.set_project_deadline("Casa", Some(day(2024, 3, 15)));
        doc.add_project_task(
            "Casa",
            "pintar",
            Some(day(2024, 3, 15)),
            Priority::High,
            day(2024, 1, 2),
        );
        doc.toggle_project_task("Casa", 0);

        let march = collect_month(&doc, 2024, 3);
        let entries = &march[&15];
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "Fecha límite: Casa");
        assert_eq!(entries[0].kind, EntryKind::ProjectDeadline);
        assert!(!entries[0].completed);
        assert_eq!(entries[1].description, "pintar (Casa)");
        assert_eq!(entries[1].kind.to_string(), "tarea-proyecto: Alta");
        assert!(entries[1].completed);
    }

    #[test]
    fn log_entries_use_the_date_part_only() {
        let mut doc = Document::default();
        doc.add_log_entry(
            "una idea",
            "contenido",
            Category::Idea,
            None,
            day(2024, 3, 20).and_hms_opt(23, 59, 59).expect("time"),
        );
        let march = collect_month(&doc, 2024, 3);
        let entries = &march[&20];
        assert_eq!(entries[0].description, "Nota: una idea");
        assert_eq!(entries[0].kind, EntryKind::Log);
        assert!(!entries[0].completed);
    }

    #[test]
    fn entries_serialize_with_wire_names() {
        let doc = sample_document();
        let march = collect_month(&doc, 2024, 3);
        let value = serde_json::to_value(&march).expect("serialize");
        assert_eq!(value["5"][0]["descripcion"], "Buy milk");
        assert_eq!(value["5"][0]["tipo"], "diaria");
        assert_eq!(value["5"][0]["completada"], false);
    }

    #[test]
    fn stats_cover_totals_completion_and_kinds() {
        let mut doc = Document::default();
        doc.add_daily_task("a", day(2024, 3, 5));
        doc.add_daily_task("b", day(2024, 3, 5));
        doc.toggle_daily_task(0);
        doc.create_project("Casa", day(2024, 1, 1));
        doc.add_project_task(
            "Casa",
            "alta",
            Some(day(2024, 3, 7)),
            Priority::High,
            day(2024, 1, 2),
        );
        doc.add_project_task(
            "Casa",
            "baja",
            Some(day(2024, 3, 8)),
            Priority::Low,
            day(2024, 1, 2),
        );

        let stats = MonthStats::from_entries(&collect_month(&doc, 2024, 3));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.completed_pct, 25.0);
        assert_eq!(
            stats.busiest_day,
            Some(BusiestDay { day: 5, count: 2 })
        );
        // both priorities fold into the same prefix
        assert_eq!(stats.by_kind["tarea-proyecto"], 2);
        assert_eq!(stats.by_kind["diaria"], 2);
    }

    #[test]
    fn busiest_day_tie_goes_to_the_earliest_day() {
        let mut doc = Document::default();
        doc.add_daily_task("a", day(2024, 3, 9));
        doc.add_daily_task("b", day(2024, 3, 3));
        let stats = MonthStats::from_entries(&collect_month(&doc, 2024, 3));
        assert_eq!(stats.busiest_day, Some(BusiestDay { day: 3, count: 1 }));
    }

    #[test]
    fn empty_month_has_empty_stats() {
        let stats = MonthStats::from_entries(&BTreeMap::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed_pct, 0.0);
        assert_eq!(stats.busiest_day, None);
        assert!(stats.by_kind.is_empty());
    }

    #[test]
    fn month_weeks_align_monday_first() {
        // March 2024 starts on a Friday and fills exactly five rows
        let weeks = month_weeks(2024, 3);
        assert_eq!(weeks.len(), 5);
        assert_eq!(
            weeks[0],
            [None, None, None, None, Some(1), Some(2), Some(3)]
        );
        assert_eq!(weeks[4][6], Some(31));

        // leap February
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert!(month_weeks(2024, 13).is_empty());
    }
}
